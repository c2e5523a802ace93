//! Decoders for values with non-standard wire encodings
//!
//! Asset amounts, authorities and market buckets travel as positional arrays
//! in some calls and as keyed objects in others; the profile picks the form.
//! Memos, operation results and history entries have a single encoding.

use serde_json::Value;

use crate::domain::{
    AssetAmount, Authority, BucketKey, BucketObject, EncryptedMemo, Memo, Operation,
    OperationHistory, OperationResult, Price, WeightedAuth, WireType,
};
use crate::infrastructure::wire::{kind_name, DecodeContext, Node, WireDecode};
use crate::shared::error::{DecodeError, DecodeResult};

impl WireDecode for AssetAmount {
    const WIRE_TYPE: WireType = WireType::AssetAmount;

    /// `{"amount": 1000, "asset_id": "1.3.0"}`
    fn decode_structural(node: &Node<'_>, _cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        Ok(AssetAmount {
            amount: node.field("amount")?.amount()?,
            asset_id: node.field("asset_id")?.string()?,
        })
    }

    /// `["1000", "1.3.0"]`
    fn decode_custom(node: &Node<'_>, _cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        let [amount, asset_id] = node.tuple::<2>()?;
        Ok(AssetAmount {
            amount: amount.amount()?,
            asset_id: asset_id.string()?,
        })
    }
}

impl WireDecode for Price {
    const WIRE_TYPE: WireType = WireType::Price;

    fn decode_structural(node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        Ok(Price {
            base: cx.field(node, "base")?,
            quote: cx.field(node, "quote")?,
        })
    }
}

impl WireDecode for Authority {
    const WIRE_TYPE: WireType = WireType::Authority;

    /// Auth lists as objects: `{"BTS6...": 1}`
    fn decode_structural(node: &Node<'_>, _cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        Ok(Authority {
            weight_threshold: node.field("weight_threshold")?.uint()?,
            account_auths: weighted_map(node, "account_auths")?,
            key_auths: weighted_map(node, "key_auths")?,
            address_auths: weighted_map(node, "address_auths")?,
        })
    }

    /// Auth lists as pairs: `[["BTS6...", 1]]`
    fn decode_custom(node: &Node<'_>, _cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        Ok(Authority {
            weight_threshold: node.field("weight_threshold")?.uint()?,
            account_auths: weighted_pairs(node, "account_auths")?,
            key_auths: weighted_pairs(node, "key_auths")?,
            address_auths: weighted_pairs(node, "address_auths")?,
        })
    }
}

fn weighted_pairs(node: &Node<'_>, key: &str) -> DecodeResult<Vec<WeightedAuth>> {
    let Some(list) = node.opt_field(key)? else {
        return Ok(Vec::new());
    };
    list.elements()?
        .iter()
        .map(|entry| {
            let [id, weight] = entry.tuple::<2>()?;
            Ok(WeightedAuth {
                id: id.string()?,
                weight: weight.uint()?,
            })
        })
        .collect()
}

// Relies on serde_json's `preserve_order` to keep wire order.
fn weighted_map(node: &Node<'_>, key: &str) -> DecodeResult<Vec<WeightedAuth>> {
    let Some(map) = node.opt_field(key)? else {
        return Ok(Vec::new());
    };
    let entries = map.as_object()?;
    entries
        .keys()
        .map(|id| {
            let weight = map.field(id)?.uint()?;
            Ok(WeightedAuth::new(id.clone(), weight))
        })
        .collect()
}

impl WireDecode for Memo {
    const WIRE_TYPE: WireType = WireType::Memo;

    /// `null` is the one designed default: no memo.
    fn decode_structural(node: &Node<'_>, _cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        if node.is_null() {
            return Ok(Memo::NoMemo);
        }
        Ok(Memo::Encrypted(EncryptedMemo {
            from: node.field("from")?.string()?,
            to: node.field("to")?.string()?,
            nonce: node.field("nonce")?.amount()?,
            message: node.field("message")?.hex_bytes()?,
        }))
    }
}

/// Memo field of an operation payload; absent means no memo
pub(crate) fn memo_field(node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Memo> {
    match node.get("memo")? {
        Some(memo) => cx.decode(&memo),
        None => Ok(Memo::NoMemo),
    }
}

const BUCKET_ARITY: usize = 12;

impl WireDecode for BucketObject {
    const WIRE_TYPE: WireType = WireType::BucketObject;

    fn decode_structural(node: &Node<'_>, _cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        Ok(BucketObject {
            id: node.field("id")?.string()?,
            key: bucket_key(&node.field("key")?)?,
            high_base: node.field("high_base")?.amount()?,
            high_quote: node.field("high_quote")?.amount()?,
            low_base: node.field("low_base")?.amount()?,
            low_quote: node.field("low_quote")?.amount()?,
            open_base: node.field("open_base")?.amount()?,
            open_quote: node.field("open_quote")?.amount()?,
            close_base: node.field("close_base")?.amount()?,
            close_quote: node.field("close_quote")?.amount()?,
            base_volume: node.field("base_volume")?.amount()?,
            quote_volume: node.field("quote_volume")?.amount()?,
        })
    }

    /// `[id, key, high_base, high_quote, low_base, low_quote, open_base,
    /// open_quote, close_base, close_quote, base_volume, quote_volume]`
    fn decode_custom(node: &Node<'_>, _cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        let [
            id,
            key,
            high_base,
            high_quote,
            low_base,
            low_quote,
            open_base,
            open_quote,
            close_base,
            close_quote,
            base_volume,
            quote_volume,
        ] = node.tuple::<BUCKET_ARITY>()?;
        Ok(BucketObject {
            id: id.string()?,
            key: bucket_key(&key)?,
            high_base: high_base.amount()?,
            high_quote: high_quote.amount()?,
            low_base: low_base.amount()?,
            low_quote: low_quote.amount()?,
            open_base: open_base.amount()?,
            open_quote: open_quote.amount()?,
            close_base: close_base.amount()?,
            close_quote: close_quote.amount()?,
            base_volume: base_volume.amount()?,
            quote_volume: quote_volume.amount()?,
        })
    }
}

fn bucket_key(node: &Node<'_>) -> DecodeResult<BucketKey> {
    Ok(BucketKey {
        base: node.field("base")?.string()?,
        quote: node.field("quote")?.string()?,
        seconds: node.field("seconds")?.uint()?,
        open: node.field("open")?.timestamp()?,
    })
}

impl WireDecode for OperationResult {
    const WIRE_TYPE: WireType = WireType::OperationResult;

    /// `[0, {}]`, `[1, "1.7.42"]` or `[2, <asset amount>]`
    fn decode_structural(node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        let [tag, value] = node.tuple::<2>()?;
        match variant_tag(&tag)? {
            0 => Ok(OperationResult::Void),
            1 => Ok(OperationResult::ObjectId(value.string()?)),
            2 => Ok(OperationResult::Asset(cx.decode(&value)?)),
            other => Err(DecodeError::UnknownVariant {
                path: tag.path().to_string(),
                raw: other.to_string(),
            }),
        }
    }
}

/// Reads the leading tag of a `[tag, value]` pair.
///
/// Non-integer numbers are reported as unknown variants with the raw text
/// preserved; non-numbers are a type error.
pub(crate) fn variant_tag(tag: &Node<'_>) -> DecodeResult<u64> {
    match tag.value() {
        Value::Number(n) => n.as_u64().ok_or_else(|| DecodeError::UnknownVariant {
            path: tag.path().to_string(),
            raw: n.to_string(),
        }),
        other => Err(DecodeError::WrongType {
            path: tag.path().to_string(),
            expected: "integer tag",
            found: kind_name(other),
        }),
    }
}

impl WireDecode for OperationHistory {
    const WIRE_TYPE: WireType = WireType::OperationHistory;

    fn decode_structural(node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        Ok(OperationHistory {
            id: node.field("id")?.string()?,
            op: cx.field::<Operation>(node, "op")?,
            result: cx.field(node, "result")?,
            block_num: node.field("block_num")?.uint()?,
            trx_in_block: node.field("trx_in_block")?.uint()?,
            op_in_trx: node.field("op_in_trx")?.uint()?,
            virtual_op: node.field("virtual_op")?.uint()?,
        })
    }
}
