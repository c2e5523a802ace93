//! Market domain models

use chrono::NaiveDateTime;
use serde::Serialize;

use super::asset::Price;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketKey {
    pub base: String,
    pub quote: String,
    pub seconds: u32,
    pub open: NaiveDateTime,
}

/// One OHLC bucket of market history
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketObject {
    pub id: String,
    pub key: BucketKey,
    pub high_base: u64,
    pub high_quote: u64,
    pub low_base: u64,
    pub low_quote: u64,
    pub open_base: u64,
    pub open_quote: u64,
    pub close_base: u64,
    pub close_quote: u64,
    pub base_volume: u64,
    pub quote_volume: u64,
}

/// Open order on the book (`1.7.x`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LimitOrder {
    pub id: String,
    pub expiration: NaiveDateTime,
    pub seller: String,
    pub for_sale: u64,
    pub sell_price: Price,
    pub deferred_fee: u64,
}
