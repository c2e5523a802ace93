//! Logging utilities module
//!
//! This module provides centralized logging setup and the structured log
//! events emitted around decoding.

use tracing::{debug, trace};

use crate::domain::CallKind;
use crate::shared::error::{AppError, AppResult, DecodeError};

/// Logging utilities for the crate
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified level and format (`text` or `json`)
    pub fn initialize(level: &str, format: &str) -> AppResult<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false);

        let result = if format == "json" {
            tracing::subscriber::set_global_default(builder.json().finish())
        } else {
            tracing::subscriber::set_global_default(builder.finish())
        };

        result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
    }

    /// Log that a decoder profile was built
    pub fn log_decoder_built(kind: CallKind, custom: usize, excluded: usize) {
        debug!(
            call = %kind,
            custom_rules = custom,
            excluded_types = excluded,
            "Built response decoder"
        );
    }

    /// Log a completed decode
    pub fn log_decoded(kind: CallKind, items: usize) {
        trace!(call = %kind, items = items, "Decoded response");
    }

    /// Log a failed decode
    pub fn log_decode_failure(kind: CallKind, error: &DecodeError) {
        debug!(
            call = %kind,
            path = error.path().unwrap_or("-"),
            error = %error,
            "Response decode failed"
        );
    }
}
