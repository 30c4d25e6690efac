use env_logger::Target;

/// Initialise logging from the `-v` count.
///
/// Logs always go to stderr: stdout carries only the `SUCCESS` line.
pub fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Off,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // `run_send` runs many times in one process under the integration tests,
    // and `init()` panics on the second call.
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .target(Target::Stderr)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
