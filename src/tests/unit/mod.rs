//! Unit tests decoding the golden fixtures
//!
//! Each test decodes one call's fixture through its registered profile and
//! compares against the exact typed value.

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::json;

use crate::application::ResponseDecoderFactory;
use crate::domain::{
    AccountIdList, AccountOptions, AccountUpdateOperation, AssetAmount, Authority, BucketKey,
    BucketObject, CallKind, DecodedResponse, EncryptedMemo, Memo, Operation, OperationResult,
    OperationTag, TransferOperation, TypedValue, WeightedAuth,
};
use crate::shared::error::DecodeError;
use crate::tests::fixtures;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

fn decode(kind: CallKind) -> DecodedResponse {
    ResponseDecoderFactory::new()
        .decode_result(&fixtures::result_for(kind), kind)
        .unwrap()
}

const KEY_A: &str = "BTS6Kx9r8vM9mtqZt1vWsGpAkVKqDXbPVGm4UV3zxYo8YzXfV3yZT";
const KEY_B: &str = "BTS8eLeqSZZtB1YHdw7KjQxRSRmaKAseCxhUSqaLxUdqvdGpp6nck";

#[test]
fn required_fees_decode_positional_amounts() {
    assert_eq!(
        decode(CallKind::GetRequiredFees),
        DecodedResponse::List(vec![
            TypedValue::AssetAmount(AssetAmount::new(1929, "1.3.0")),
            TypedValue::AssetAmount(AssetAmount::new(86, "1.3.0")),
        ])
    );
}

#[test]
fn account_balances_decode_keyed_amounts() {
    assert_eq!(
        decode(CallKind::GetAccountBalances),
        DecodedResponse::List(vec![
            TypedValue::AssetAmount(AssetAmount::new(5_000_000, "1.3.0")),
            TypedValue::AssetAmount(AssetAmount::new(120, "1.3.121")),
        ])
    );
}

#[test]
fn block_decodes_operations_in_order() {
    let Some(TypedValue::Block(block)) = decode(CallKind::GetBlock).into_single() else {
        panic!("expected a block");
    };
    assert_eq!(block.witness, "1.6.76");
    assert_eq!(block.timestamp, at(2021, 3, 2, 10, 14, 30));
    assert_eq!(block.transactions.len(), 1);

    let trx = &block.transactions[0];
    assert_eq!(trx.ref_block_num, 50352);
    assert_eq!(trx.ref_block_prefix, 1576072148);
    assert_eq!(trx.signatures, vec!["1f2a".to_string()]);
    assert_eq!(trx.operation_results, vec![OperationResult::Void, OperationResult::Void]);
    assert_eq!(
        trx.operations.iter().map(Operation::tag).collect::<Vec<_>>(),
        vec![OperationTag::Transfer, OperationTag::AccountUpdate]
    );

    assert_eq!(
        trx.operations[0],
        Operation::Transfer(TransferOperation {
            fee: AssetAmount::new(1929, "1.3.0"),
            from: "1.2.1083".to_string(),
            to: "1.2.900".to_string(),
            amount: AssetAmount::new(100_000, "1.3.121"),
            memo: Memo::Encrypted(EncryptedMemo {
                from: KEY_A.to_string(),
                to: KEY_B.to_string(),
                nonce: 5_862_723_643_998_573_708,
                message: hex::decode(fixtures::TRANSFER_MEMO_HEX).unwrap(),
            }),
        })
    );

    assert_eq!(
        trx.operations[1],
        Operation::AccountUpdate(AccountUpdateOperation {
            fee: AssetAmount::new(200, "1.3.0"),
            account: "1.2.1083".to_string(),
            owner: Some(Authority {
                weight_threshold: 1,
                account_auths: vec![],
                key_auths: vec![WeightedAuth::new(KEY_A, 1)],
                address_auths: vec![],
            }),
            active: None,
            new_options: Some(AccountOptions {
                memo_key: KEY_B.to_string(),
                voting_account: "1.2.5".to_string(),
                num_witness: 0,
                num_committee: 0,
                votes: vec!["1:22".to_string(), "0:91".to_string()],
            }),
        })
    );
}

#[test]
fn block_header_decodes_structurally() {
    let Some(TypedValue::BlockHeader(header)) = decode(CallKind::GetBlockHeader).into_single()
    else {
        panic!("expected a block header");
    };
    assert_eq!(header.previous, "01c7c4b0d4f3f05dd04c1fd3ad8ff0f2a8a4b5c1");
    assert_eq!(header.timestamp, at(2021, 3, 2, 10, 14, 30));
    assert_eq!(header.witness, "1.6.76");
    assert!(header.extensions.is_empty());
}

#[test]
fn accounts_elide_self_referencing_options() {
    let accounts = decode(CallKind::GetAccounts).into_list().unwrap();
    assert_eq!(accounts.len(), 2);
    for (value, (id, name)) in accounts
        .iter()
        .zip([("1.2.1083", "bilbo-baggins"), ("1.2.900", "frodo")])
    {
        let TypedValue::AccountProperties(account) = value else {
            panic!("expected account properties");
        };
        assert_eq!(account.id, id);
        assert_eq!(account.name, name);
        assert!(account.options.is_none());
        assert_eq!(account.owner.account_auths, vec![WeightedAuth::new("1.2.15", 1)]);
        assert_eq!(account.active.weight_threshold, 2);
        assert_eq!(
            account.active.key_auths,
            vec![WeightedAuth::new(KEY_A, 1), WeightedAuth::new(KEY_B, 1)]
        );
    }
}

#[test]
fn account_by_name_keeps_options() {
    let Some(TypedValue::AccountProperties(account)) =
        decode(CallKind::GetAccountByName).into_single()
    else {
        panic!("expected account properties");
    };
    assert_eq!(account.statistics, "2.6.1083");
    assert_eq!(account.membership_expiration_date, at(1970, 1, 1, 0, 0, 0));
    assert_eq!(
        account.options,
        Some(AccountOptions {
            memo_key: KEY_B.to_string(),
            voting_account: "1.2.5".to_string(),
            num_witness: 0,
            num_committee: 0,
            votes: vec![],
        })
    );
}

#[test]
fn relative_history_elides_account_options() {
    let history = decode(CallKind::GetRelativeAccountHistory).into_list().unwrap();
    assert_eq!(history.len(), 3);

    let TypedValue::OperationHistory(transfer) = &history[0] else {
        panic!("expected history entry");
    };
    assert_eq!(transfer.id, "1.11.9001");
    assert_eq!(transfer.block_num, 29_992_333);
    assert_eq!(transfer.virtual_op, 48_410);
    assert_eq!(transfer.result, OperationResult::Void);
    let Operation::Transfer(op) = &transfer.op else {
        panic!("expected transfer");
    };
    assert_eq!(op.fee, AssetAmount::new(264_174, "1.3.0"));
    assert_eq!(op.memo, Memo::NoMemo);

    let TypedValue::OperationHistory(update) = &history[1] else {
        panic!("expected history entry");
    };
    let Operation::AccountUpdate(op) = &update.op else {
        panic!("expected account update");
    };
    assert!(op.new_options.is_none());
    assert!(op.owner.is_none());
    assert_eq!(
        op.active.as_ref().map(|auth| auth.key_auths.clone()),
        Some(vec![WeightedAuth::new(KEY_B, 1)])
    );

    let TypedValue::OperationHistory(asset_update) = &history[2] else {
        panic!("expected history entry");
    };
    assert_eq!(asset_update.id, "1.11.8870");
    let Operation::AssetUpdate(op) = &asset_update.op else {
        panic!("expected asset update");
    };
    assert_eq!(op.fee, AssetAmount::new(50_000, "1.3.0"));
    assert_eq!(op.asset_to_update, "1.3.121");
    assert!(op.new_issuer.is_none());
    assert!(op.new_options.is_none());
}

#[test]
fn transaction_decodes_like_its_block() {
    let Some(TypedValue::Transaction(trx)) = decode(CallKind::GetTransaction).into_single() else {
        panic!("expected a transaction");
    };
    let Some(TypedValue::Block(block)) = decode(CallKind::GetBlock).into_single() else {
        panic!("expected a block");
    };
    assert_eq!(trx, block.transactions[0]);
    assert_eq!(trx.expiration, at(2021, 3, 2, 10, 15, 0));
}

#[test]
fn history_by_operations_carries_total_count() {
    let Some(TypedValue::HistoryOperationDetail(detail)) =
        decode(CallKind::GetAccountHistoryByOperations).into_single()
    else {
        panic!("expected a history page");
    };
    assert_eq!(detail.total_count, 17);
    assert_eq!(detail.operation_history_objs.len(), 1);
    let entry = &detail.operation_history_objs[0];
    assert_eq!(entry.id, "1.11.9001");
    assert_eq!(entry.op.tag(), OperationTag::Transfer);
}

#[test]
fn market_history_decodes_positional_buckets() {
    let buckets = decode(CallKind::GetMarketHistory).into_list().unwrap();
    assert_eq!(
        buckets[0],
        TypedValue::BucketObject(BucketObject {
            id: "5.1.4601".to_string(),
            key: BucketKey {
                base: "1.3.0".to_string(),
                quote: "1.3.121".to_string(),
                seconds: 3600,
                open: at(2021, 3, 2, 9, 0, 0),
            },
            high_base: 1_204_000,
            high_quote: 3000,
            low_base: 1_100_000,
            low_quote: 2900,
            open_base: 1_150_000,
            open_quote: 2950,
            close_base: 1_190_000,
            close_quote: 2990,
            base_volume: 88_000_000,
            quote_volume: 221_000,
        })
    );
    let TypedValue::BucketObject(second) = &buckets[1] else {
        panic!("expected bucket");
    };
    assert_eq!(second.key.open, at(2021, 3, 2, 10, 0, 0));
    assert_eq!(second.quote_volume, 30_100);
}

#[test]
fn asset_calls_share_one_shape() {
    for kind in [
        CallKind::LookupAssetSymbols,
        CallKind::GetObjects,
        CallKind::ListAssets,
        CallKind::GetAssets,
    ] {
        let assets = decode(kind).into_list().unwrap();
        let TypedValue::Asset(asset) = &assets[0] else {
            panic!("expected asset for {kind}");
        };
        assert_eq!(asset.symbol, "USD");
        assert_eq!(asset.precision, 4);
        let options = asset.options.as_ref().unwrap();
        assert_eq!(options.core_exchange_rate.base, AssetAmount::new(21, "1.3.0"));
        assert_eq!(options.flags, 128);
    }
}

#[test]
fn dynamic_global_properties_decode() {
    let Some(TypedValue::DynamicGlobalProperties(props)) =
        decode(CallKind::GetDynamicGlobalProperties).into_single()
    else {
        panic!("expected dynamic global properties");
    };
    assert_eq!(props.head_block_number, 29_992_333);
    assert_eq!(props.next_maintenance_time, at(2021, 3, 2, 11, 0, 0));
    assert_eq!(props.witness_budget, 41_570_000);
    assert_eq!(props.last_irreversible_block_num, 29_992_318);
}

#[test]
fn key_references_and_limit_orders_decode() {
    assert_eq!(
        decode(CallKind::GetKeyReferences),
        DecodedResponse::List(vec![
            TypedValue::AccountIdList(AccountIdList(vec!["1.2.1083".to_string()])),
            TypedValue::AccountIdList(AccountIdList(vec![])),
        ])
    );

    let orders = decode(CallKind::GetLimitOrders).into_list().unwrap();
    let TypedValue::LimitOrder(order) = &orders[0] else {
        panic!("expected limit order");
    };
    assert_eq!(order.for_sale, 70_000);
    assert_eq!(order.sell_price.quote, AssetAmount::new(3, "1.3.121"));
    assert_eq!(order.deferred_fee, 578);
}

#[test]
fn every_fixture_decodes_into_its_target() {
    let factory = ResponseDecoderFactory::new();
    for kind in <CallKind as strum::IntoEnumIterator>::iter() {
        let decoded = factory
            .decode_result(&fixtures::result_for(kind), kind)
            .unwrap_or_else(|e| panic!("{kind}: {e}"));
        let target = crate::application::resolve(kind).target();
        let values = match decoded {
            DecodedResponse::Single(value) => vec![value],
            DecodedResponse::List(values) => values,
        };
        assert!(values.iter().all(|value| value.target() == target), "{kind}");
    }
}

#[test]
fn fee_with_extra_element_is_malformed() {
    let factory = ResponseDecoderFactory::new();
    let err = factory
        .decode_result(&json!([["1000", "1.3.0", "extra"]]), CallKind::GetRequiredFees)
        .unwrap_err();
    assert_eq!(
        err,
        DecodeError::MalformedResponse {
            path: "result[0]".to_string(),
            reason: "expected 2 positional elements, found 3".to_string(),
        }
    );
}

#[test]
fn short_bucket_is_malformed() {
    let mut buckets = fixtures::market_history();
    buckets[0].as_array_mut().unwrap().pop();
    let err = ResponseDecoderFactory::new()
        .decode_result(&buckets, CallKind::GetMarketHistory)
        .unwrap_err();
    assert!(matches!(err, DecodeError::MalformedResponse { ref path, .. } if path == "result[0]"));
}

#[test]
fn unknown_operation_in_block_reports_its_location() {
    let mut block = fixtures::block();
    block["transactions"][0]["operations"][1][0] = json!(9999);
    let err = ResponseDecoderFactory::new()
        .decode_result(&block, CallKind::GetBlock)
        .unwrap_err();
    assert_eq!(
        err,
        DecodeError::UnknownVariant {
            path: "result.transactions[0].operations[1][0]".to_string(),
            raw: "9999".to_string(),
        }
    );
}

#[test]
fn missing_required_field_reports_its_location() {
    let mut header = fixtures::block_header();
    header.as_object_mut().unwrap().remove("witness");
    let err = ResponseDecoderFactory::new()
        .decode_result(&header, CallKind::GetBlockHeader)
        .unwrap_err();
    assert_eq!(err, DecodeError::missing("result.witness"));
}
