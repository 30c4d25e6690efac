use clap::{CommandFactory, Parser};
use email_address::EmailAddress;
use std::str::FromStr;

/// Reject empty positional values so they fail the same way as missing ones
fn non_empty(s: &str) -> Result<String, String> {
    if s.is_empty() {
        Err("value must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Parse an email address from a string for clap
fn parse_email(s: &str) -> Result<EmailAddress, String> {
    EmailAddress::from_str(s).map_err(|e| format!("Invalid email address '{}': {}", s, e))
}

#[derive(Parser, Debug)]
#[command(name = "emailjs-send")]
#[command(about = "Send an EmailJS template from the command line")]
#[command(
    long_about = "Sends one EmailJS template with the given template variables. Exits 0 when the provider accepts the message, 1 on invalid input and 2 when the send fails."
)]
pub struct SendArgs {
    /// EmailJS service identifier
    #[arg(value_name = "SERVICE_ID", value_parser = non_empty, allow_hyphen_values = true)]
    pub service_id: String,

    /// EmailJS template identifier
    #[arg(value_name = "TEMPLATE_ID", value_parser = non_empty, allow_hyphen_values = true)]
    pub template_id: String,

    /// EmailJS public key
    #[arg(value_name = "PUBLIC_KEY", value_parser = non_empty, allow_hyphen_values = true)]
    pub public_key: String,

    /// Template variables as a JSON document
    #[arg(value_name = "TEMPLATE_VARS_JSON", value_parser = non_empty, allow_hyphen_values = true)]
    pub template_vars_json: String,

    /// Set the recipient as the `to_email` template variable
    #[arg(long = "to", value_name = "EMAIL", value_parser = parse_email)]
    pub to: Option<EmailAddress>,

    /// Private key sent as the access token (overrides EMAILJS_PRIVATE_KEY)
    #[arg(long = "private-key", value_name = "KEY", value_parser = non_empty)]
    pub private_key: Option<String>,

    /// Extra positional values from the legacy six-argument usage; never sent
    #[arg(value_name = "IGNORED", hide = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,

    /// Increase verbosity (can be used multiple times: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

/// The usage line, for errors clap renders without one
pub fn usage() -> String {
    SendArgs::command().render_usage().to_string()
}
