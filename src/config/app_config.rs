//! Application configuration structures
//!
//! Settings are layered: built-in defaults, then an optional `Decoder.toml`
//! (or the file given on the command line), then `GRAPHENE_DECODE__*`
//! environment variables.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::factory::DEFAULT_MAX_RESPONSE_BYTES;
use crate::config::validation::ConfigValidator;
use crate::shared::error::{AppError, AppResult};

/// Decoder settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DecoderSettings {
    /// Largest reply accepted, in bytes
    #[validate(range(min = 1024, max = 1073741824))] // 1KB to 1GB
    pub max_response_bytes: usize,

    /// Build every call decoder at startup instead of on first use
    pub eager_profiles: bool,
}

impl Default for DecoderSettings {
    fn default() -> Self {
        Self {
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
            eager_profiles: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format, `text` or `json`
    #[validate(length(min = 1))]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Decoder settings
    pub decoder: DecoderSettings,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `Decoder.toml` and environment variables
    pub fn load() -> AppResult<Self> {
        Self::load_from("Decoder", false)
    }

    /// Load configuration from the named file and environment variables
    pub fn load_from(file: &str, required: bool) -> AppResult<Self> {
        let defaults = config::Config::try_from(&AppConfig::default())?;

        let config = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name(file).required(required))
            .add_source(config::Environment::with_prefix("GRAPHENE_DECODE").separator("__"))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config
            .validate_config()
            .map_err(|e| AppError::Validation(format!("Configuration validation failed: {}", e)))?;
        ConfigValidator::validate_config(&config)?;

        Ok(config)
    }

    /// Validate every section
    pub fn validate_config(&self) -> Result<(), validator::ValidationErrors> {
        self.decoder.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
