use tracing_subscriber::{util::TryInitError, EnvFilter};
use tracing_subscriber::{fmt, prelude::*};

/// Logs go to stderr so stdout carries only the report. `RUST_LOG` overrides the `warn` default.
pub(crate) fn init_logger() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
}
