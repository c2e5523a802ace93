//! Call registry - response shape and decoding rules for every call

use std::str::FromStr;

use crate::domain::{CallKind, DecoderProfile, ResponseShape, TargetType, WireType};
use crate::shared::error::{DecodeError, DecodeResult};

/// Expected shape of the result of `kind`.
pub fn resolve(kind: CallKind) -> ResponseShape {
    use ResponseShape::{ListOf, Single};

    match kind {
        CallKind::GetBlock => Single(TargetType::Block),
        CallKind::GetAccounts => ListOf(TargetType::AccountProperties),
        CallKind::GetRequiredFees => ListOf(TargetType::AssetAmount),
        CallKind::GetRelativeAccountHistory => ListOf(TargetType::OperationHistory),
        CallKind::GetBlockHeader => Single(TargetType::BlockHeader),
        CallKind::GetMarketHistory => ListOf(TargetType::BucketObject),
        CallKind::LookupAssetSymbols => ListOf(TargetType::Asset),
        CallKind::GetObjects => ListOf(TargetType::Asset),
        CallKind::ListAssets => ListOf(TargetType::Asset),
        CallKind::GetAccountByName => Single(TargetType::AccountProperties),
        CallKind::GetAssets => ListOf(TargetType::Asset),
        CallKind::GetAccountBalances => ListOf(TargetType::AssetAmount),
        CallKind::GetDynamicGlobalProperties => Single(TargetType::DynamicGlobalProperties),
        CallKind::GetKeyReferences => ListOf(TargetType::AccountIdList),
        CallKind::GetLimitOrders => ListOf(TargetType::LimitOrder),
        CallKind::GetTransaction => Single(TargetType::Transaction),
        CallKind::GetAccountHistoryByOperations => Single(TargetType::HistoryOperationDetail),
    }
}

/// Decoding rules for `kind`.
///
/// Account and asset options are elided where they would lead the decoder
/// back into the structure being decoded: in `get_accounts` and wherever
/// account history entries are returned.
pub fn profile(kind: CallKind) -> DecoderProfile {
    let base = DecoderProfile::new(resolve(kind));
    match kind {
        CallKind::GetBlock | CallKind::GetTransaction => base
            .with_custom(WireType::AssetAmount)
            .with_custom(WireType::Authority),
        CallKind::GetAccounts => base
            .with_custom(WireType::Authority)
            .excluding(WireType::AccountOptions),
        CallKind::GetRequiredFees => base.with_custom(WireType::AssetAmount),
        CallKind::GetRelativeAccountHistory | CallKind::GetAccountHistoryByOperations => base
            .with_custom(WireType::AssetAmount)
            .with_custom(WireType::Authority)
            .excluding(WireType::AccountOptions)
            .excluding(WireType::AssetOptions),
        CallKind::GetBlockHeader => base,
        CallKind::GetMarketHistory => base.with_custom(WireType::BucketObject),
        CallKind::LookupAssetSymbols
        | CallKind::GetObjects
        | CallKind::ListAssets
        | CallKind::GetAssets => base,
        CallKind::GetAccountByName => base.with_custom(WireType::Authority),
        CallKind::GetAccountBalances
        | CallKind::GetDynamicGlobalProperties
        | CallKind::GetKeyReferences
        | CallKind::GetLimitOrders => base,
    }
}

/// Map a method name received from the transport onto the catalog.
pub fn resolve_method(method: &str) -> DecodeResult<CallKind> {
    CallKind::from_str(method).map_err(|_| DecodeError::UnknownCallKind(method.to_string()))
}
