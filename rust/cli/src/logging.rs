use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Installs the stderr subscriber. `RUST_LOG` wins unless `verbose` is set;
/// later calls are no-ops.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
