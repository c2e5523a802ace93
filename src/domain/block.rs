//! Block and transaction domain models

use chrono::NaiveDateTime;
use serde::Serialize;

use super::operation::{Operation, OperationResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockHeader {
    pub previous: String,
    pub timestamp: NaiveDateTime,
    pub witness: String,
    pub transaction_merkle_root: String,
    pub extensions: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub previous: String,
    pub timestamp: NaiveDateTime,
    pub witness: String,
    pub transaction_merkle_root: String,
    pub extensions: Vec<serde_json::Value>,
    pub witness_signature: String,
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub ref_block_num: u16,
    pub ref_block_prefix: u32,
    pub expiration: NaiveDateTime,
    pub operations: Vec<Operation>,
    pub extensions: Vec<serde_json::Value>,
    pub signatures: Vec<String>,
    pub operation_results: Vec<OperationResult>,
}

/// Chain-wide state that changes every block (`2.1.0`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DynamicGlobalProperties {
    pub id: String,
    pub head_block_number: u32,
    pub head_block_id: String,
    pub time: NaiveDateTime,
    pub current_witness: String,
    pub next_maintenance_time: NaiveDateTime,
    pub last_budget_time: NaiveDateTime,
    pub witness_budget: u64,
    pub accounts_registered_this_interval: u32,
    pub recently_missed_count: u32,
    pub current_aslot: u64,
    pub recent_slots_filled: String,
    pub dynamic_flags: u32,
    pub last_irreversible_block_num: u32,
}
