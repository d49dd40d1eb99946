//! Logging configuration

use serde::Deserialize;
use tracing::Level;

use super::error::ValidationError;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter level when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Validate the configured level
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.level
            .parse::<Level>()
            .map(|_| ())
            .map_err(|_| ValidationError::InvalidLogLevel(self.level.clone()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.json);
    }

    #[test]
    fn test_known_levels_validate() {
        for level in ["trace", "debug", "info", "warn", "error", "DEBUG"] {
            let config = LoggingConfig {
                level: level.to_string(),
                json: false,
            };
            assert!(config.validate().is_ok(), "{} should be accepted", level);
        }
    }

    #[test]
    fn test_unknown_level_rejected() {
        let config = LoggingConfig {
            level: "loud".to_string(),
            json: false,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLogLevel(level)) if level == "loud"
        ));
    }
}
