//! Account history domain models

use serde::Serialize;

use super::operation::{Operation, OperationResult};

/// Entry of an account's operation history (`1.11.x`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationHistory {
    pub id: String,
    pub op: Operation,
    pub result: OperationResult,
    pub block_num: u32,
    pub trx_in_block: u16,
    pub op_in_trx: u16,
    pub virtual_op: u32,
}

/// Page of history entries filtered by operation type, with the total
/// number of matches on the node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryOperationDetail {
    pub total_count: u32,
    pub operation_history_objs: Vec<OperationHistory>,
}
