//! Error handling module
//!
//! This module provides centralized error handling for the crate. Decode
//! failures are described by [`DecodeError`]; everything around decoding
//! (configuration, logging setup, file access in the binary) by [`AppError`].

use thiserror::Error;

/// Errors produced while turning a raw RPC reply into a typed value.
///
/// Paths are rendered from the root of the result, e.g.
/// `result[0].operations[1][1].amount`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Unknown call kind: {0}")]
    UnknownCallKind(String),

    #[error("Malformed response at {path}: {reason}")]
    MalformedResponse { path: String, reason: String },

    #[error("Missing required field: {path}")]
    MissingField { path: String },

    #[error("Wrong type at {path}: expected {expected}, found {found}")]
    WrongType {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Unknown operation tag: {tag}")]
    UnknownOperationTag { tag: u64 },

    #[error("Unknown variant tag {raw} at {path}")]
    UnknownVariant { path: String, raw: String },

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Response too large: {size} bytes exceeds limit of {limit} bytes")]
    ResponseTooLarge { size: usize, limit: usize },
}

impl DecodeError {
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        DecodeError::MalformedResponse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(path: impl Into<String>) -> Self {
        DecodeError::MissingField { path: path.into() }
    }

    /// Field path the error refers to, when it has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            DecodeError::MalformedResponse { path, .. }
            | DecodeError::MissingField { path }
            | DecodeError::WrongType { path, .. }
            | DecodeError::UnknownVariant { path, .. } => Some(path),
            _ => None,
        }
    }

    /// True for failures caused by the shape of the payload rather than by
    /// the node (RPC errors) or by the caller (unknown call kinds).
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            DecodeError::MalformedResponse { .. }
                | DecodeError::MissingField { .. }
                | DecodeError::WrongType { .. }
                | DecodeError::UnknownOperationTag { .. }
                | DecodeError::UnknownVariant { .. }
                | DecodeError::InvalidJson(_)
        )
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::InvalidJson(err.to_string())
    }
}

/// Decode result type
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Application error types
#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}
