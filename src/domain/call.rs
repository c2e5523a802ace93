//! Call catalog - the RPC methods whose replies this crate understands

use serde::Serialize;
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// One supported RPC method.
///
/// The string form is the method name sent on the wire (`get_block`,
/// `lookup_asset_symbols`, ...). The set is closed: a name outside it is
/// rejected by [`crate::application::registry::resolve_method`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CallKind {
    GetBlock,
    GetAccounts,
    GetRequiredFees,
    GetRelativeAccountHistory,
    GetBlockHeader,
    GetMarketHistory,
    LookupAssetSymbols,
    GetObjects,
    ListAssets,
    GetAccountByName,
    GetAssets,
    GetAccountBalances,
    GetDynamicGlobalProperties,
    GetKeyReferences,
    GetLimitOrders,
    GetTransaction,
    GetAccountHistoryByOperations,
}

impl CallKind {
    /// Method name as sent to the node
    pub fn method_name(self) -> &'static str {
        self.into()
    }

    /// Dense index, used to address per-call caches
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Typed value produced for one element of a call's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum TargetType {
    Block,
    BlockHeader,
    AccountProperties,
    AssetAmount,
    OperationHistory,
    BucketObject,
    Asset,
    DynamicGlobalProperties,
    AccountIdList,
    LimitOrder,
    Transaction,
    HistoryOperationDetail,
}

/// Whether a call's result decodes to one value or to an ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResponseShape {
    Single(TargetType),
    ListOf(TargetType),
}

impl ResponseShape {
    pub fn target(&self) -> TargetType {
        match self {
            ResponseShape::Single(target) | ResponseShape::ListOf(target) => *target,
        }
    }
}
