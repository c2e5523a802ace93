//! Decoded responses handed to the application layer

use serde::Serialize;

use super::account::{AccountIdList, AccountProperties};
use super::asset::{Asset, AssetAmount};
use super::block::{Block, BlockHeader, DynamicGlobalProperties, Transaction};
use super::call::TargetType;
use super::history::{HistoryOperationDetail, OperationHistory};
use super::market::{BucketObject, LimitOrder};

/// One typed element of a call's result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedValue {
    Block(Block),
    BlockHeader(BlockHeader),
    AccountProperties(AccountProperties),
    AssetAmount(AssetAmount),
    OperationHistory(OperationHistory),
    BucketObject(BucketObject),
    Asset(Asset),
    DynamicGlobalProperties(DynamicGlobalProperties),
    AccountIdList(AccountIdList),
    LimitOrder(LimitOrder),
    Transaction(Transaction),
    HistoryOperationDetail(HistoryOperationDetail),
}

impl TypedValue {
    pub fn target(&self) -> TargetType {
        match self {
            TypedValue::Block(_) => TargetType::Block,
            TypedValue::BlockHeader(_) => TargetType::BlockHeader,
            TypedValue::AccountProperties(_) => TargetType::AccountProperties,
            TypedValue::AssetAmount(_) => TargetType::AssetAmount,
            TypedValue::OperationHistory(_) => TargetType::OperationHistory,
            TypedValue::BucketObject(_) => TargetType::BucketObject,
            TypedValue::Asset(_) => TargetType::Asset,
            TypedValue::DynamicGlobalProperties(_) => TargetType::DynamicGlobalProperties,
            TypedValue::AccountIdList(_) => TargetType::AccountIdList,
            TypedValue::LimitOrder(_) => TargetType::LimitOrder,
            TypedValue::Transaction(_) => TargetType::Transaction,
            TypedValue::HistoryOperationDetail(_) => TargetType::HistoryOperationDetail,
        }
    }
}

/// Typed result of one call: a single value or an ordered sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DecodedResponse {
    Single(TypedValue),
    List(Vec<TypedValue>),
}

impl DecodedResponse {
    pub fn len(&self) -> usize {
        match self {
            DecodedResponse::Single(_) => 1,
            DecodedResponse::List(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_single(self) -> Option<TypedValue> {
        match self {
            DecodedResponse::Single(value) => Some(value),
            DecodedResponse::List(_) => None,
        }
    }

    pub fn into_list(self) -> Option<Vec<TypedValue>> {
        match self {
            DecodedResponse::List(items) => Some(items),
            DecodedResponse::Single(_) => None,
        }
    }
}
