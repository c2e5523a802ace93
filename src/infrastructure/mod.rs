//! Infrastructure layer - JSON wire decoding
//!
//! This module contains the envelope parser, the value cursor and the
//! decoders that turn JSON trees into domain values.

pub mod composite;
pub mod envelope;
pub mod operations;
pub mod structural;
pub mod wire;

pub use envelope::{JsonRpcError, JsonRpcResponse};
pub use operations::OperationDecoder;
pub use wire::{DecodeContext, Node, WireDecode};
