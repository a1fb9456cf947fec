//! Structured logging with pretty, JSON or compact console output

use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{Result, WebError};

/// Build the filter used by the subscriber
///
/// `RUST_LOG` wins when present. Otherwise this crate logs at the configured
/// level and `tower_http` request traces are kept at `debug`.
#[must_use]
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},decifreelance_web={},tower_http=debug",
            config.level.as_directive(),
            config.level.as_directive()
        ))
    })
}

/// Initialize the global tracing subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config);
    let registry = tracing_subscriber::registry().with(filter);

    // Separate branches because each fmt layer is a distinct type
    let result = match config.format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(io::stdout).pretty())
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().with_writer(io::stdout).json())
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().with_writer(io::stdout).compact())
            .try_init(),
    };

    result.map_err(|e| WebError::LoggingInit(e.to_string()))
}
