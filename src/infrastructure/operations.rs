//! Tag dispatch for polymorphic operation payloads
//!
//! Operations arrive as `[tag, payload]`. The table from tag to payload
//! decoder is built once in [`OperationDecoder::new`] and is read-only
//! afterwards; an unmapped tag is always an error.

use std::collections::HashMap;
use std::fmt;

use strum::IntoEnumIterator;
use tracing::trace;

use crate::domain::{
    AccountUpdateOperation, AssetAmount, AssetUpdateOperation, Authority, CustomOperation,
    FillOrderOperation, LimitOrderCancelOperation, LimitOrderCreateOperation, Operation,
    OperationTag, TransferOperation,
};
use crate::infrastructure::composite::{memo_field, variant_tag};
use crate::infrastructure::wire::{DecodeContext, Node};
use crate::shared::error::{DecodeError, DecodeResult};

type PayloadDecoder = fn(&Node<'_>, &DecodeContext<'_>) -> DecodeResult<Operation>;

/// Dispatch table from protocol tag to payload decoder.
pub struct OperationDecoder {
    table: HashMap<u8, PayloadDecoder>,
}

impl OperationDecoder {
    pub fn new() -> Self {
        let table = OperationTag::iter()
            .map(|tag| (tag.code(), payload_decoder(tag)))
            .collect();
        Self { table }
    }

    /// Registered tags, ascending
    pub fn tags(&self) -> Vec<u8> {
        let mut tags: Vec<u8> = self.table.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    pub fn supports(&self, tag: u64) -> bool {
        u8::try_from(tag)
            .map(|tag| self.table.contains_key(&tag))
            .unwrap_or(false)
    }

    /// Decode `payload` as the operation registered under `tag`.
    ///
    /// Fails with [`DecodeError::UnknownOperationTag`] before looking at the
    /// payload when the tag is not registered.
    pub fn decode(
        &self,
        tag: u64,
        payload: &Node<'_>,
        cx: &DecodeContext<'_>,
    ) -> DecodeResult<Operation> {
        let decoder = u8::try_from(tag)
            .ok()
            .and_then(|code| self.table.get(&code))
            .ok_or(DecodeError::UnknownOperationTag { tag })?;
        payload.as_object()?;
        trace!(tag = tag, path = payload.path(), "Decoding operation payload");
        decoder(payload, cx)
    }

    /// Decode a `[tag, payload]` pair found inside a response.
    ///
    /// An unmapped tag becomes [`DecodeError::UnknownVariant`] carrying the
    /// tag's path and raw text.
    pub fn decode_pair(&self, node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Operation> {
        let [tag_node, payload] = node.tuple::<2>()?;
        let tag = variant_tag(&tag_node)?;
        self.decode(tag, &payload, cx).map_err(|err| match err {
            DecodeError::UnknownOperationTag { tag: unknown } if unknown == tag => {
                DecodeError::UnknownVariant {
                    path: tag_node.path().to_string(),
                    raw: tag_node.value().to_string(),
                }
            }
            other => other,
        })
    }
}

impl fmt::Debug for OperationDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationDecoder")
            .field("tags", &self.tags())
            .finish()
    }
}

impl Default for OperationDecoder {
    fn default() -> Self {
        Self::new()
    }
}

fn payload_decoder(tag: OperationTag) -> PayloadDecoder {
    match tag {
        OperationTag::Transfer => decode_transfer,
        OperationTag::LimitOrderCreate => decode_limit_order_create,
        OperationTag::LimitOrderCancel => decode_limit_order_cancel,
        OperationTag::FillOrder => decode_fill_order,
        OperationTag::AccountUpdate => decode_account_update,
        OperationTag::AssetUpdate => decode_asset_update,
        OperationTag::Custom => decode_custom,
    }
}

fn decode_transfer(node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Operation> {
    Ok(Operation::Transfer(TransferOperation {
        fee: cx.field::<AssetAmount>(node, "fee")?,
        from: node.field("from")?.string()?,
        to: node.field("to")?.string()?,
        amount: cx.field(node, "amount")?,
        memo: memo_field(node, cx)?,
    }))
}

fn decode_limit_order_create(node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Operation> {
    Ok(Operation::LimitOrderCreate(LimitOrderCreateOperation {
        fee: cx.field(node, "fee")?,
        seller: node.field("seller")?.string()?,
        amount_to_sell: cx.field(node, "amount_to_sell")?,
        min_to_receive: cx.field(node, "min_to_receive")?,
        expiration: node.field("expiration")?.timestamp()?,
        fill_or_kill: node.field("fill_or_kill")?.bool()?,
    }))
}

fn decode_limit_order_cancel(node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Operation> {
    Ok(Operation::LimitOrderCancel(LimitOrderCancelOperation {
        fee: cx.field(node, "fee")?,
        fee_paying_account: node.field("fee_paying_account")?.string()?,
        order: node.field("order")?.string()?,
    }))
}

fn decode_fill_order(node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Operation> {
    Ok(Operation::FillOrder(FillOrderOperation {
        fee: cx.field(node, "fee")?,
        order_id: node.field("order_id")?.string()?,
        account_id: node.field("account_id")?.string()?,
        pays: cx.field(node, "pays")?,
        receives: cx.field(node, "receives")?,
        fill_price: cx.optional_field(node, "fill_price")?,
        is_maker: match node.opt_field("is_maker")? {
            Some(flag) => flag.bool()?,
            None => false,
        },
    }))
}

fn decode_account_update(node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Operation> {
    Ok(Operation::AccountUpdate(AccountUpdateOperation {
        fee: cx.field(node, "fee")?,
        account: node.field("account")?.string()?,
        owner: cx.optional_field::<Authority>(node, "owner")?,
        active: cx.optional_field::<Authority>(node, "active")?,
        new_options: cx.optional_field(node, "new_options")?,
    }))
}

fn decode_asset_update(node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Operation> {
    Ok(Operation::AssetUpdate(AssetUpdateOperation {
        fee: cx.field(node, "fee")?,
        issuer: node.field("issuer")?.string()?,
        asset_to_update: node.field("asset_to_update")?.string()?,
        new_issuer: node
            .opt_field("new_issuer")?
            .map(|issuer| issuer.string())
            .transpose()?,
        new_options: cx.optional_field(node, "new_options")?,
    }))
}

fn decode_custom(node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Operation> {
    Ok(Operation::Custom(CustomOperation {
        fee: cx.field(node, "fee")?,
        payer: node.field("payer")?.string()?,
        required_auths: node.strings_or_empty("required_auths")?,
        id: node.field("id")?.uint()?,
        data: node.field("data")?.hex_bytes()?,
    }))
}
