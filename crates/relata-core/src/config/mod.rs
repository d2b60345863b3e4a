//! Configuration: discovery parameters and observability settings.

pub mod defaults;
pub mod discovery_config;
pub mod observability_config;

pub use discovery_config::{DiscoveryConfig, LoneCandidatePolicy};
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::constants::MIN_MAX_LAG;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelataConfig {
    pub discovery: DiscoveryConfig,
    pub observability: ObservabilityConfig,
}

impl RelataConfig {
    /// Load configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.discovery.max_lag < MIN_MAX_LAG {
            return Err(ConfigError::ValidationFailed {
                field: "discovery.max_lag".to_string(),
                message: format!("must be at least {MIN_MAX_LAG}"),
            });
        }
        if self.observability.log_level.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
