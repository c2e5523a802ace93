//! Account domain models

use chrono::NaiveDateTime;
use serde::Serialize;

/// One weighted entry of an [`Authority`]: a key, account or address id
/// and the weight it contributes towards the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightedAuth {
    pub id: String,
    pub weight: u16,
}

impl WeightedAuth {
    pub fn new(id: impl Into<String>, weight: u16) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }
}

/// Weighted multi-signature authority.
///
/// Entry order is kept exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Authority {
    pub weight_threshold: u32,
    pub account_auths: Vec<WeightedAuth>,
    pub key_auths: Vec<WeightedAuth>,
    pub address_auths: Vec<WeightedAuth>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountOptions {
    pub memo_key: String,
    pub voting_account: String,
    pub num_witness: u16,
    pub num_committee: u16,
    pub votes: Vec<String>,
}

/// Account object (`1.2.x`) as returned by the database API
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountProperties {
    pub id: String,
    pub membership_expiration_date: NaiveDateTime,
    pub registrar: String,
    pub referrer: String,
    pub lifetime_referrer: String,
    pub network_fee_percentage: u16,
    pub lifetime_referrer_fee_percentage: u16,
    pub referrer_rewards_percentage: u16,
    pub name: String,
    pub owner: Authority,
    pub active: Authority,
    /// `None` when absent or elided by the call profile
    pub options: Option<AccountOptions>,
    pub statistics: String,
    pub whitelisting_accounts: Vec<String>,
    pub blacklisting_accounts: Vec<String>,
}

/// Accounts referencing one public key, as returned by `get_key_references`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountIdList(pub Vec<String>);
