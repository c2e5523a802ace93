//! Configuration management module
//!
//! This module handles loading and validating the decoder settings.

pub mod app_config;
pub mod validation;

pub use app_config::{AppConfig, DecoderSettings, LoggingConfig};
pub use validation::ConfigValidator;
