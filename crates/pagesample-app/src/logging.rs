//! Logging initialization.

use pagesample_config::{LogFormat, LoggingConfig};
use pagesample_core::{PageSampleError, PageSampleResult};
use tracing::{error, warn, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Events go to
/// stderr so stdout only carries the rendered page.
pub fn init_logging(config: &LoggingConfig) -> PageSampleResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| PageSampleError::Other(anyhow::Error::new(e)))
}

/// Logs a failed run and returns the level it was logged at.
///
/// Bad input (page size, missing or duplicate maps) is a warning; anything
/// raised by the environment is an error.
pub fn log_failure(err: &PageSampleError) -> Level {
    if err.is_usage_error() {
        warn!(code = err.error_code(), "Rejected request: {}", err);
        Level::WARN
    } else {
        error!(code = err.error_code(), "Application error: {}", err);
        Level::ERROR
    }
}
