//! Domain layer - typed models and per-call decoding rules
//!
//! This module contains the call catalog, the decoder profiles and the
//! typed values responses decode into. Nothing here touches JSON.

pub mod account;
pub mod asset;
pub mod block;
pub mod call;
pub mod history;
pub mod market;
pub mod operation;
pub mod profile;
pub mod response;

pub use account::{AccountIdList, AccountOptions, AccountProperties, Authority, WeightedAuth};
pub use asset::{Asset, AssetAmount, AssetOptions, Price};
pub use block::{Block, BlockHeader, DynamicGlobalProperties, Transaction};
pub use call::{CallKind, ResponseShape, TargetType};
pub use history::{HistoryOperationDetail, OperationHistory};
pub use market::{BucketKey, BucketObject, LimitOrder};
pub use operation::{
    AccountUpdateOperation, AssetUpdateOperation, CustomOperation, EncryptedMemo,
    FillOrderOperation, LimitOrderCancelOperation, LimitOrderCreateOperation, Memo, Operation,
    OperationResult, OperationTag, TransferOperation,
};
pub use profile::{DecoderProfile, WireType};
pub use response::{DecodedResponse, TypedValue};
