//! Error types for the web host

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("Invalid bind address '{address}': {reason}")]
    InvalidBindAddress { address: String, reason: String },

    #[error("Invalid log format '{0}' (expected pretty, json or compact)")]
    InvalidLogFormat(String),

    #[error("Invalid log level '{0}' (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),

    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WebError>;
