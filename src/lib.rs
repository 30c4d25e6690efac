use std::io::Write;

pub mod args;
pub mod backend;
pub mod error;
pub mod logger;
pub mod params;

use backend::{BackendConfig, SendBackend, SendRequest, SendResponse};
use clap::Parser;
use error::{SendError, EXIT_SUCCESS};
use log::{debug, error, info, warn};

/// Run one send with the REST API backend and return the process exit code.
pub fn run_send(
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
    args: &[String],
    envs: &[(String, String)],
) -> i32 {
    run_with_backend(stdout, stderr, args, envs, backend::create_from_config)
}

/// Like [`run_send`], with the backend built by `make_backend`.
///
/// `make_backend` is only called once the arguments and template variables
/// have been validated.
pub fn run_with_backend<B, F>(
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
    args: &[String],
    envs: &[(String, String)],
    make_backend: F,
) -> i32
where
    B: SendBackend,
    F: FnOnce(&BackendConfig) -> Result<B, SendError>,
{
    report(stdout, stderr, dispatch(args, envs, make_backend))
}

/// Validate, decode and send. Performs no output of its own.
pub fn dispatch<B, F>(
    args: &[String],
    envs: &[(String, String)],
    make_backend: F,
) -> Result<SendResponse, SendError>
where
    B: SendBackend,
    F: FnOnce(&BackendConfig) -> Result<B, SendError>,
{
    let cli_args = args::SendArgs::try_parse_from(args)?;

    logger::init_logger(cli_args.verbosity);

    if !cli_args.ignored.is_empty() {
        warn!(
            "Ignoring {} extra positional argument(s); recipient and private key are not read positionally",
            cli_args.ignored.len()
        );
    }

    let mut template_params = params::decode_template_params(&cli_args.template_vars_json)?;
    if let Some(to) = &cli_args.to {
        info!("Setting recipient {}", to);
        template_params = params::with_recipient(template_params, to)?;
    }

    let config = BackendConfig::from_env(envs);
    let access_token = cli_args.private_key.or_else(|| config.private_key.clone());
    if access_token.is_some() {
        debug!("Sending with a private key access token");
    }

    let request = SendRequest {
        service_id: cli_args.service_id,
        template_id: cli_args.template_id,
        user_id: cli_args.public_key,
        template_params,
        access_token,
    };

    let backend = make_backend(&config)?;
    Ok(backend.send(&request)?)
}

/// The single place that writes the outcome and picks the exit code.
fn report(
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
    outcome: Result<SendResponse, SendError>,
) -> i32 {
    match outcome {
        Ok(response) => {
            let _ = writeln!(stdout, "SUCCESS {} {}", response.status, response.text);
            EXIT_SUCCESS
        }
        // --help and --version
        Err(SendError::Usage(e)) if !e.use_stderr() => {
            let _ = write!(stdout, "{}", e);
            EXIT_SUCCESS
        }
        Err(e @ SendError::Usage(_)) => {
            let message = e.to_string();
            let _ = write!(stderr, "{}", message);
            if !message.contains("Usage:") {
                let _ = writeln!(stderr, "\n{}", args::usage());
            }
            e.exit_code()
        }
        Err(e) => {
            error!("{}", e);
            let _ = writeln!(stderr, "{}", e);
            e.exit_code()
        }
    }
}
