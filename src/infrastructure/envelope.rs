//! JSON-RPC reply envelope

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::infrastructure::wire::kind_name;
use crate::shared::error::{DecodeError, DecodeResult};

/// JSON-RPC reply as sent by the node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub jsonrpc: Option<String>,

    /// `null` when the field is absent or explicitly `null`
    #[serde(default)]
    pub result: Value,

    #[serde(default)]
    pub error: Option<JsonRpcError>,

    #[serde(default)]
    pub id: Option<Value>,
}

/// JSON-RPC error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    /// Parse an envelope from raw bytes.
    ///
    /// Bytes that are not JSON fail with `InvalidJson`; JSON that is not an
    /// object fails with `MalformedResponse`.
    pub fn parse(raw: &[u8]) -> DecodeResult<Self> {
        let value: Value = serde_json::from_slice(raw)?;
        if !value.is_object() {
            return Err(DecodeError::malformed(
                "$",
                format!("expected response object, found {}", kind_name(&value)),
            ));
        }
        serde_json::from_value(value)
            .map_err(|e| DecodeError::malformed("$", format!("invalid envelope: {}", e)))
    }

    /// The result payload, or the node's error
    pub fn into_result(self) -> DecodeResult<Value> {
        match self.error {
            Some(error) => Err(DecodeError::Rpc {
                code: error.code,
                message: error.message,
            }),
            None => Ok(self.result),
        }
    }
}
