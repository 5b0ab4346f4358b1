use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber, writing to standard error.
///
/// Logs at `warn` and above by default, or `info` with `--verbose`.
/// `RUST_LOG` takes precedence over both.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
