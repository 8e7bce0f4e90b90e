//! Process configuration, read from the environment.

use subhub_observability::LogFormat;
use thiserror::Error;

pub const HOST_VAR: &str = "SUBHUB_HOST";
pub const PORT_VAR: &str = "SUBHUB_PORT";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {message}")]
    Invalid { var: &'static str, message: String },
}

/// Runtime configuration for the API binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_format: LogFormat::default(),
        }
    }
}

impl ApiConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unset variables take their default; set but malformed ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR) {
            let host = host.trim();
            if host.is_empty() {
                return Err(ConfigError::Invalid {
                    var: HOST_VAR,
                    message: "must not be empty".to_string(),
                });
            }
            config.host = host.to_string();
        }

        if let Some(port) = lookup(PORT_VAR) {
            config.port = port.trim().parse().map_err(|e| ConfigError::Invalid {
                var: PORT_VAR,
                message: format!("{e}"),
            })?;
        }

        if let Some(format) = lookup(LOG_FORMAT_VAR) {
            config.log_format = format.parse().map_err(|e| ConfigError::Invalid {
                var: LOG_FORMAT_VAR,
                message: format!("{e}"),
            })?;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
