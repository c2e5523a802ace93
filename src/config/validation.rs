//! Configuration validation module
//!
//! Checks that go beyond what the validator derive expresses.

use crate::config::AppConfig;
use crate::shared::error::{AppError, AppResult};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["text", "json"];

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> AppResult<()> {
        Self::validate_log_level(&config.logging.level)?;
        Self::validate_log_format(&config.logging.format)?;
        Ok(())
    }

    fn validate_log_level(level: &str) -> AppResult<()> {
        // Full filter directives such as "graphene_rpc_decode=debug" are accepted as is
        if level.contains('=') || LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Invalid log level '{}', expected one of {}",
                level,
                LOG_LEVELS.join(", ")
            )))
        }
    }

    fn validate_log_format(format: &str) -> AppResult<()> {
        if LOG_FORMATS.contains(&format) {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Invalid log format '{}', expected one of {}",
                format,
                LOG_FORMATS.join(", ")
            )))
        }
    }
}
