// ABOUTME: Configuration for session button controllers.
// ABOUTME: Poll cadence and status endpoint, parseable from embedded YAML.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Settings shared by every controller a coordinator mounts.
#[derive(Debug, Clone, Deserialize)]
pub struct ButtonsConfig {
    /// `host:port` authority of the container lock service.
    pub status_endpoint: String,

    /// Recurring status poll period.
    #[serde(default = "default_poll_interval", with = "humantime_serde")]
    pub poll_interval: Duration,
}

fn default_poll_interval() -> Duration {
    Duration::from_secs(5)
}

impl ButtonsConfig {
    /// Create a config with the default 5s poll cadence.
    pub fn new(status_endpoint: impl Into<String>) -> Self {
        Self {
            status_endpoint: status_endpoint.into(),
            poll_interval: default_poll_interval(),
        }
    }

    /// Parse from a YAML snippet, validating the endpoint is usable.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.status_endpoint.is_empty() {
            return Err(ConfigError::Invalid(
                "status_endpoint cannot be empty".to_string(),
            ));
        }
        if self.poll_interval.is_zero() {
            return Err(ConfigError::Invalid(
                "poll_interval must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
