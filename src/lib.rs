//! Graphene RPC Decode - typed decoding of Graphene/BitShares RPC replies
//!
//! This library turns the JSON replies of a Graphene node's websocket API
//! into typed values. Every supported call has a fixed response shape and a
//! profile saying which types use their compact wire encoding and which
//! optional members are left undecoded.
//!
//! ```no_run
//! use graphene_rpc_decode::{CallKind, ResponseDecoderFactory};
//!
//! let factory = ResponseDecoderFactory::new();
//! let raw = br#"{"id":1,"jsonrpc":"2.0","result":[["2000","1.3.0"]]}"#;
//! let fees = factory.decode(raw, CallKind::GetRequiredFees)?;
//! assert_eq!(fees.len(), 1);
//! # Ok::<(), graphene_rpc_decode::DecodeError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::{ResponseDecoder, ResponseDecoderFactory};
pub use config::AppConfig;
pub use domain::{CallKind, DecodedResponse, DecoderProfile, ResponseShape, TargetType, TypedValue};
pub use shared::error::{AppError, AppResult, DecodeError, DecodeResult};

#[cfg(test)]
mod tests;
