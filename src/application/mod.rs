//! Application layer - call registry and the decoder factory
//!
//! This module maps each supported call onto its decoding rules and owns the
//! cached decoders built from them.

pub mod factory;
pub mod registry;

pub use factory::{ResponseDecoder, ResponseDecoderFactory, DEFAULT_MAX_RESPONSE_BYTES};
pub use registry::{profile, resolve, resolve_method};
