//! Asset domain models

use serde::Serialize;

/// Quantity of one asset, in the asset's smallest unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetAmount {
    pub amount: u64,
    pub asset_id: String,
}

impl AssetAmount {
    pub fn new(amount: u64, asset_id: impl Into<String>) -> Self {
        Self {
            amount,
            asset_id: asset_id.into(),
        }
    }
}

/// Exchange rate expressed as two amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Price {
    pub base: AssetAmount,
    pub quote: AssetAmount,
}

/// Asset object (`1.3.x`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asset {
    pub id: String,
    pub symbol: String,
    pub precision: u8,
    pub issuer: String,
    /// `None` when absent or elided by the call profile
    pub options: Option<AssetOptions>,
    pub dynamic_asset_data_id: String,
    pub bitasset_data_id: Option<String>,
}

/// Issuer-controlled asset parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetOptions {
    pub max_supply: u64,
    pub market_fee_percent: u16,
    pub max_market_fee: u64,
    pub issuer_permissions: u16,
    pub flags: u16,
    pub core_exchange_rate: Price,
    pub whitelist_authorities: Vec<String>,
    pub blacklist_authorities: Vec<String>,
    pub whitelist_markets: Vec<String>,
    pub blacklist_markets: Vec<String>,
    pub description: String,
}
