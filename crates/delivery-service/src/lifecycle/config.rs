//! Runtime configuration for the delivery system.
//!
//! Every field has a default, so an empty TOML document is a valid configuration:
//!
//! ```toml
//! channel_buffer = 64
//! assignment_seed = 7
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Parse(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.message().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SystemConfig {
    /// Capacity of every actor's request channel.
    pub channel_buffer: usize,
    /// Seed for the assignment RNG. `None` draws from OS entropy.
    pub assignment_seed: Option<u64>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            assignment_seed: None,
        }
    }
}

impl SystemConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: SystemConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_buffer == 0 {
            return Err(ConfigError::Validation("channel_buffer must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(SystemConfig::from_toml_str("").unwrap(), SystemConfig::default());
    }

    #[test]
    fn test_fields_override_defaults() {
        let config = SystemConfig::from_toml_str("channel_buffer = 8\nassignment_seed = 99\n").unwrap();
        assert_eq!(config.channel_buffer, 8);
        assert_eq!(config.assignment_seed, Some(99));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            SystemConfig::from_toml_str("channel_buffer = 0"),
            Err(ConfigError::Validation(_))
        ));
        assert!(matches!(
            SystemConfig::from_toml_str("channel_buffer = \"lots\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SystemConfig::from_toml_str("buffer = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SystemConfig::load("/nonexistent/delivery.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
