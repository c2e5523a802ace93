//! Decoder profiles - per-call decoding rules

use std::collections::BTreeSet;

use serde::Serialize;
use strum::Display;

use super::call::ResponseShape;

/// Identifier of a named decodable type.
///
/// Profiles use these as keys: a type listed as custom is decoded with its
/// non-standard wire encoding, a type listed as excluded is never expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display)]
pub enum WireType {
    AssetAmount,
    Authority,
    AccountOptions,
    AssetOptions,
    Memo,
    Price,
    BucketObject,
    Operation,
    OperationResult,
    OperationHistory,
    HistoryOperationDetail,
    Transaction,
    Block,
    BlockHeader,
    AccountProperties,
    Asset,
    LimitOrder,
    DynamicGlobalProperties,
    AccountIdList,
}

/// Immutable bundle of decoding rules for one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecoderProfile {
    shape: ResponseShape,
    custom: BTreeSet<WireType>,
    excluded: BTreeSet<WireType>,
}

impl DecoderProfile {
    pub fn new(shape: ResponseShape) -> Self {
        Self {
            shape,
            custom: BTreeSet::new(),
            excluded: BTreeSet::new(),
        }
    }

    /// Decode `wire_type` with its custom (positional) encoding
    pub fn with_custom(mut self, wire_type: WireType) -> Self {
        self.custom.insert(wire_type);
        self
    }

    /// Elide every optional field whose type is `wire_type`
    pub fn excluding(mut self, wire_type: WireType) -> Self {
        self.excluded.insert(wire_type);
        self
    }

    pub fn shape(&self) -> ResponseShape {
        self.shape
    }

    pub fn has_custom(&self, wire_type: WireType) -> bool {
        self.custom.contains(&wire_type)
    }

    pub fn excludes(&self, wire_type: WireType) -> bool {
        self.excluded.contains(&wire_type)
    }

    pub fn custom_types(&self) -> impl Iterator<Item = WireType> + '_ {
        self.custom.iter().copied()
    }

    pub fn excluded_types(&self) -> impl Iterator<Item = WireType> + '_ {
        self.excluded.iter().copied()
    }
}
