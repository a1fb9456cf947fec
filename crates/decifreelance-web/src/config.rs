//! Configuration for the web host
//!
//! Everything is read from environment variables with defaults that work for
//! local development:
//!
//! | Variable | Default |
//! |---|---|
//! | `DECIFREELANCE_WEB_ADDR` | `0.0.0.0:3000` |
//! | `LEPTOS_SITE_ROOT` | `target/site` (debug) / `/app/target/site` (release) |
//! | `DECIFREELANCE_LOG_FORMAT` | `pretty` |
//! | `DECIFREELANCE_LOG_LEVEL` | `info` |
//!
//! `RUST_LOG` still takes precedence over the configured level when set.

use std::net::SocketAddr;
use std::str::FromStr;

use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::Deserialize;

use crate::error::{Result, WebError};

pub const ADDR_ENV: &str = "DECIFREELANCE_WEB_ADDR";
pub const SITE_ROOT_ENV: &str = "LEPTOS_SITE_ROOT";
pub const LOG_FORMAT_ENV: &str = "DECIFREELANCE_LOG_FORMAT";
pub const LOG_LEVEL_ENV: &str = "DECIFREELANCE_LOG_LEVEL";

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Deserialize a unit enum variant from a case-insensitive name
fn parse_variant<T: DeserializeOwned>(s: &str) -> Option<T> {
    let name = s.trim().to_ascii_lowercase();
    let de: StrDeserializer<'_, ValueError> = name.as_str().into_deserializer();
    T::deserialize(de).ok()
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// JSON format for log aggregation
    Json,
    /// Compact format (single line)
    Compact,
}

impl FromStr for LogFormat {
    type Err = WebError;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant(s).ok_or_else(|| WebError::InvalidLogFormat(s.to_string()))
    }
}

/// Log level
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    #[serde(alias = "warning")]
    Warn,
    Error,
}

impl LogLevel {
    /// Filter directive understood by `EnvFilter`
    #[must_use]
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = WebError;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant(s).ok_or_else(|| WebError::InvalidLogLevel(s.to_string()))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

/// Web server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    /// Address the HTTP listener binds to
    pub bind: SocketAddr,

    /// Directory holding the compiled site (`pkg/`, `assets/`)
    pub site_root: String,

    pub logging: LoggingConfig,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            site_root: default_site_root().to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

fn default_site_root() -> &'static str {
    if cfg!(debug_assertions) {
        "target/site"
    } else {
        "/app/target/site"
    }
}

impl WebConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    ///
    /// Unset or empty variables fall back to their defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let address = get(ADDR_ENV).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind = address
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| WebError::InvalidBindAddress {
                address: address.clone(),
                reason: e.to_string(),
            })?;

        let site_root = get(SITE_ROOT_ENV).unwrap_or_else(|| default_site_root().to_string());

        let format = get(LOG_FORMAT_ENV)
            .map(|v| v.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();
        let level = get(LOG_LEVEL_ENV)
            .map(|v| v.parse::<LogLevel>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            bind,
            site_root,
            logging: LoggingConfig { level, format },
        })
    }

    /// Directory serving the WASM bundle
    #[must_use]
    pub fn pkg_dir(&self) -> String {
        format!("{}/pkg", self.site_root)
    }

    /// Directory serving static assets
    ///
    /// In dev builds assets are served straight from the crate directory.
    #[must_use]
    pub fn assets_dir(&self) -> String {
        if cfg!(debug_assertions) {
            "crates/decifreelance-web/assets".to_string()
        } else {
            format!("{}/assets", self.site_root)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = WebConfig::from_vars(|_| None).unwrap();
        assert_eq!(config, WebConfig::default());
        assert_eq!(config.bind.port(), 3000);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_reads_all_variables() {
        let env = vars(&[
            (ADDR_ENV, "127.0.0.1:8080"),
            (SITE_ROOT_ENV, "/srv/site"),
            (LOG_FORMAT_ENV, "JSON"),
            (LOG_LEVEL_ENV, "debug"),
        ]);
        let config = WebConfig::from_vars(|k| env.get(k).cloned()).unwrap();

        assert_eq!(config.bind, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.site_root, "/srv/site");
        assert_eq!(config.pkg_dir(), "/srv/site/pkg");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_empty_variable_uses_default() {
        let env = vars(&[(ADDR_ENV, "  ")]);
        let config = WebConfig::from_vars(|k| env.get(k).cloned()).unwrap();
        assert_eq!(config.bind.port(), 3000);
    }

    #[test]
    fn test_invalid_bind_address() {
        let env = vars(&[(ADDR_ENV, "not-an-address")]);
        let err = WebConfig::from_vars(|k| env.get(k).cloned()).unwrap_err();
        assert!(matches!(err, WebError::InvalidBindAddress { .. }));
        assert!(err.to_string().contains("not-an-address"));
    }

    #[test]
    fn test_invalid_log_settings() {
        let env = vars(&[(LOG_FORMAT_ENV, "xml")]);
        assert!(matches!(
            WebConfig::from_vars(|k| env.get(k).cloned()),
            Err(WebError::InvalidLogFormat(_))
        ));

        let env = vars(&[(LOG_LEVEL_ENV, "loud")]);
        assert!(matches!(
            WebConfig::from_vars(|k| env.get(k).cloned()),
            Err(WebError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn test_variant_names_are_case_insensitive() {
        assert_eq!(" Compact ".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert_eq!("ERROR".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert!("".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_level_aliases() {
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::Trace.as_directive(), "trace");
    }
}
