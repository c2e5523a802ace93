//! Keyed-object decoders for the plain database objects
//!
//! These read fields by name and ignore keys they do not know. Nested values
//! go through the [`DecodeContext`] so that profile rules apply to them.

use crate::domain::{
    AccountIdList, AccountOptions, AccountProperties, Asset, AssetOptions, Authority, Block,
    BlockHeader, DynamicGlobalProperties, HistoryOperationDetail, LimitOrder, Operation,
    OperationResult, Transaction, WireType,
};
use crate::infrastructure::wire::{DecodeContext, Node, WireDecode};
use crate::shared::error::DecodeResult;

impl WireDecode for BlockHeader {
    const WIRE_TYPE: WireType = WireType::BlockHeader;

    fn decode_structural(node: &Node<'_>, _cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        Ok(BlockHeader {
            previous: node.field("previous")?.string()?,
            timestamp: node.field("timestamp")?.timestamp()?,
            witness: node.field("witness")?.string()?,
            transaction_merkle_root: node.field("transaction_merkle_root")?.string()?,
            extensions: node.raw_list_or_empty("extensions")?,
        })
    }
}

impl WireDecode for Block {
    const WIRE_TYPE: WireType = WireType::Block;

    fn decode_structural(node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        Ok(Block {
            previous: node.field("previous")?.string()?,
            timestamp: node.field("timestamp")?.timestamp()?,
            witness: node.field("witness")?.string()?,
            transaction_merkle_root: node.field("transaction_merkle_root")?.string()?,
            extensions: node.raw_list_or_empty("extensions")?,
            witness_signature: node.field("witness_signature")?.string()?,
            transactions: cx.list_field_or_empty(node, "transactions")?,
        })
    }
}

impl WireDecode for Transaction {
    const WIRE_TYPE: WireType = WireType::Transaction;

    fn decode_structural(node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        Ok(Transaction {
            ref_block_num: node.field("ref_block_num")?.uint()?,
            ref_block_prefix: node.field("ref_block_prefix")?.uint()?,
            expiration: node.field("expiration")?.timestamp()?,
            operations: cx.list_field::<Operation>(node, "operations")?,
            extensions: node.raw_list_or_empty("extensions")?,
            signatures: node.strings_or_empty("signatures")?,
            operation_results: cx.list_field_or_empty::<OperationResult>(node, "operation_results")?,
        })
    }
}

impl WireDecode for Operation {
    const WIRE_TYPE: WireType = WireType::Operation;

    fn decode_structural(node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        cx.operations().decode_pair(node, cx)
    }
}

impl WireDecode for AccountOptions {
    const WIRE_TYPE: WireType = WireType::AccountOptions;

    fn decode_structural(node: &Node<'_>, _cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        Ok(AccountOptions {
            memo_key: node.field("memo_key")?.string()?,
            voting_account: node.field("voting_account")?.string()?,
            num_witness: node.field("num_witness")?.uint()?,
            num_committee: node.field("num_committee")?.uint()?,
            votes: node.strings_or_empty("votes")?,
        })
    }
}

impl WireDecode for AccountProperties {
    const WIRE_TYPE: WireType = WireType::AccountProperties;

    fn decode_structural(node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        Ok(AccountProperties {
            id: node.field("id")?.string()?,
            membership_expiration_date: node.field("membership_expiration_date")?.timestamp()?,
            registrar: node.field("registrar")?.string()?,
            referrer: node.field("referrer")?.string()?,
            lifetime_referrer: node.field("lifetime_referrer")?.string()?,
            network_fee_percentage: node.field("network_fee_percentage")?.uint()?,
            lifetime_referrer_fee_percentage: node
                .field("lifetime_referrer_fee_percentage")?
                .uint()?,
            referrer_rewards_percentage: node.field("referrer_rewards_percentage")?.uint()?,
            name: node.field("name")?.string()?,
            owner: cx.field::<Authority>(node, "owner")?,
            active: cx.field::<Authority>(node, "active")?,
            options: cx.optional_field(node, "options")?,
            statistics: node.field("statistics")?.string()?,
            whitelisting_accounts: node.strings_or_empty("whitelisting_accounts")?,
            blacklisting_accounts: node.strings_or_empty("blacklisting_accounts")?,
        })
    }
}

impl WireDecode for AssetOptions {
    const WIRE_TYPE: WireType = WireType::AssetOptions;

    fn decode_structural(node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        Ok(AssetOptions {
            max_supply: node.field("max_supply")?.amount()?,
            market_fee_percent: node.field("market_fee_percent")?.uint()?,
            max_market_fee: node.field("max_market_fee")?.amount()?,
            issuer_permissions: node.field("issuer_permissions")?.uint()?,
            flags: node.field("flags")?.uint()?,
            core_exchange_rate: cx.field(node, "core_exchange_rate")?,
            whitelist_authorities: node.strings_or_empty("whitelist_authorities")?,
            blacklist_authorities: node.strings_or_empty("blacklist_authorities")?,
            whitelist_markets: node.strings_or_empty("whitelist_markets")?,
            blacklist_markets: node.strings_or_empty("blacklist_markets")?,
            description: match node.opt_field("description")? {
                Some(description) => description.string()?,
                None => String::new(),
            },
        })
    }
}

impl WireDecode for Asset {
    const WIRE_TYPE: WireType = WireType::Asset;

    fn decode_structural(node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        Ok(Asset {
            id: node.field("id")?.string()?,
            symbol: node.field("symbol")?.string()?,
            precision: node.field("precision")?.uint()?,
            issuer: node.field("issuer")?.string()?,
            options: cx.optional_field(node, "options")?,
            dynamic_asset_data_id: node.field("dynamic_asset_data_id")?.string()?,
            bitasset_data_id: node
                .opt_field("bitasset_data_id")?
                .map(|id| id.string())
                .transpose()?,
        })
    }
}

impl WireDecode for LimitOrder {
    const WIRE_TYPE: WireType = WireType::LimitOrder;

    fn decode_structural(node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        Ok(LimitOrder {
            id: node.field("id")?.string()?,
            expiration: node.field("expiration")?.timestamp()?,
            seller: node.field("seller")?.string()?,
            for_sale: node.field("for_sale")?.amount()?,
            sell_price: cx.field(node, "sell_price")?,
            deferred_fee: match node.opt_field("deferred_fee")? {
                Some(fee) => fee.amount()?,
                None => 0,
            },
        })
    }
}

impl WireDecode for DynamicGlobalProperties {
    const WIRE_TYPE: WireType = WireType::DynamicGlobalProperties;

    fn decode_structural(node: &Node<'_>, _cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        Ok(DynamicGlobalProperties {
            id: node.field("id")?.string()?,
            head_block_number: node.field("head_block_number")?.uint()?,
            head_block_id: node.field("head_block_id")?.string()?,
            time: node.field("time")?.timestamp()?,
            current_witness: node.field("current_witness")?.string()?,
            next_maintenance_time: node.field("next_maintenance_time")?.timestamp()?,
            last_budget_time: node.field("last_budget_time")?.timestamp()?,
            witness_budget: node.field("witness_budget")?.amount()?,
            accounts_registered_this_interval: node
                .field("accounts_registered_this_interval")?
                .uint()?,
            recently_missed_count: node.field("recently_missed_count")?.uint()?,
            current_aslot: node.field("current_aslot")?.uint()?,
            recent_slots_filled: node.field("recent_slots_filled")?.string()?,
            dynamic_flags: node.field("dynamic_flags")?.uint()?,
            last_irreversible_block_num: node.field("last_irreversible_block_num")?.uint()?,
        })
    }
}

impl WireDecode for AccountIdList {
    const WIRE_TYPE: WireType = WireType::AccountIdList;

    fn decode_structural(node: &Node<'_>, _cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        node.strings().map(AccountIdList)
    }
}

impl WireDecode for HistoryOperationDetail {
    const WIRE_TYPE: WireType = WireType::HistoryOperationDetail;

    fn decode_structural(node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        Ok(HistoryOperationDetail {
            total_count: node.field("total_count")?.uint()?,
            operation_history_objs: cx.list_field_or_empty(node, "operation_history_objs")?,
        })
    }
}
