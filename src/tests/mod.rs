//! Test suite for the response decoders
//!
//! This module provides:
//! - Golden reply fixtures for every supported call
//! - Unit tests decoding each fixture into exact typed values
//! - Integration tests covering the factory end to end and under concurrency

pub mod unit;

/// Test configuration and utilities
pub mod config {
    use crate::config::AppConfig;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize test environment
    pub fn init() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter("debug")
                .with_test_writer()
                .try_init();
        });
    }

    /// Create test configuration
    pub fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.decoder.eager_profiles = true;
        config.logging.level = "debug".to_string();
        config
    }
}

/// Test utilities and helpers
pub mod utils {
    use serde_json::Value;

    /// Raw JSON-RPC reply carrying `result`
    pub fn create_rpc_response(result: Value, id: u64) -> Vec<u8> {
        serde_json::to_vec(&serde_json::json!({
            "id": id,
            "jsonrpc": "2.0",
            "result": result
        }))
        .unwrap()
    }

    /// Raw JSON-RPC error reply
    pub fn create_rpc_error(code: i64, message: &str, id: u64) -> Vec<u8> {
        serde_json::to_vec(&serde_json::json!({
            "id": id,
            "jsonrpc": "2.0",
            "error": {
                "code": code,
                "message": message,
                "data": {"code": 10, "name": "assert_exception"}
            }
        }))
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_initialization() {
        config::init();
        let test_config = config::test_config();
        assert!(test_config.decoder.eager_profiles);
        assert!(test_config.validate_config().is_ok());
    }

    #[test]
    fn test_rpc_response_creation() {
        let raw = utils::create_rpc_response(serde_json::json!([1]), 7);
        let value: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["result"], serde_json::json!([1]));
    }

    #[test]
    fn test_rpc_error_creation() {
        let raw = utils::create_rpc_error(1, "Assert Exception", 2);
        let value: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        assert_eq!(value["error"]["code"], 1);
        assert_eq!(value["error"]["message"], "Assert Exception");
    }
}
