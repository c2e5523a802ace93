//! On-chain operations and their results
//!
//! On the wire every operation is a `[tag, payload]` pair; [`OperationTag`]
//! holds the tags of the protocol operations this crate decodes.

use chrono::NaiveDateTime;
use serde::Serialize;
use strum::{Display, EnumIter};

use super::account::{AccountOptions, Authority};
use super::asset::{AssetAmount, AssetOptions, Price};

/// Protocol operation tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum OperationTag {
    Transfer = 0,
    LimitOrderCreate = 1,
    LimitOrderCancel = 2,
    FillOrder = 4,
    AccountUpdate = 6,
    AssetUpdate = 11,
    Custom = 35,
}

impl OperationTag {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Tagged union of operation payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Operation {
    Transfer(TransferOperation),
    LimitOrderCreate(LimitOrderCreateOperation),
    LimitOrderCancel(LimitOrderCancelOperation),
    FillOrder(FillOrderOperation),
    AccountUpdate(AccountUpdateOperation),
    AssetUpdate(AssetUpdateOperation),
    Custom(CustomOperation),
}

impl Operation {
    pub fn tag(&self) -> OperationTag {
        match self {
            Operation::Transfer(_) => OperationTag::Transfer,
            Operation::LimitOrderCreate(_) => OperationTag::LimitOrderCreate,
            Operation::LimitOrderCancel(_) => OperationTag::LimitOrderCancel,
            Operation::FillOrder(_) => OperationTag::FillOrder,
            Operation::AccountUpdate(_) => OperationTag::AccountUpdate,
            Operation::AssetUpdate(_) => OperationTag::AssetUpdate,
            Operation::Custom(_) => OperationTag::Custom,
        }
    }
}

/// Encrypted memo attached to a transfer.
///
/// A missing or `null` memo is [`Memo::NoMemo`], not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Memo {
    NoMemo,
    Encrypted(EncryptedMemo),
}

impl Memo {
    pub fn is_present(&self) -> bool {
        matches!(self, Memo::Encrypted(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncryptedMemo {
    pub from: String,
    pub to: String,
    pub nonce: u64,
    pub message: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferOperation {
    pub fee: AssetAmount,
    pub from: String,
    pub to: String,
    pub amount: AssetAmount,
    pub memo: Memo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LimitOrderCreateOperation {
    pub fee: AssetAmount,
    pub seller: String,
    pub amount_to_sell: AssetAmount,
    pub min_to_receive: AssetAmount,
    pub expiration: NaiveDateTime,
    pub fill_or_kill: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LimitOrderCancelOperation {
    pub fee: AssetAmount,
    pub fee_paying_account: String,
    pub order: String,
}

/// Virtual operation emitted when an order is (partially) matched
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillOrderOperation {
    pub fee: AssetAmount,
    pub order_id: String,
    pub account_id: String,
    pub pays: AssetAmount,
    pub receives: AssetAmount,
    pub fill_price: Option<Price>,
    pub is_maker: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountUpdateOperation {
    pub fee: AssetAmount,
    pub account: String,
    pub owner: Option<Authority>,
    pub active: Option<Authority>,
    pub new_options: Option<AccountOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetUpdateOperation {
    pub fee: AssetAmount,
    pub issuer: String,
    pub asset_to_update: String,
    pub new_issuer: Option<String>,
    pub new_options: Option<AssetOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomOperation {
    pub fee: AssetAmount,
    pub payer: String,
    pub required_auths: Vec<String>,
    pub id: u16,
    pub data: Vec<u8>,
}

/// Result of applying one operation, wire `[tag, value]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum OperationResult {
    Void,
    ObjectId(String),
    Asset(AssetAmount),
}
