//! Response decoder factory
//!
//! Builds one immutable [`ResponseDecoder`] per call kind on first use and
//! shares it afterwards. A factory is an ordinary value: construct it once,
//! keep it behind an `Arc` or a reference, and decode from as many threads as
//! needed.

use std::sync::{Arc, OnceLock};

use serde_json::Value;
use strum::{EnumCount, IntoEnumIterator};

use crate::application::registry;
use crate::config::DecoderSettings;
use crate::domain::{
    CallKind, DecodedResponse, DecoderProfile, ResponseShape, TargetType, TypedValue,
};
use crate::infrastructure::envelope::JsonRpcResponse;
use crate::infrastructure::operations::OperationDecoder;
use crate::infrastructure::wire::{DecodeContext, Node};
use crate::shared::error::{DecodeError, DecodeResult};
use crate::shared::logging::LoggingUtils;

/// Default upper bound on the size of one reply
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 16 * 1024 * 1024;

/// Decoder for the replies of one call kind.
#[derive(Debug)]
pub struct ResponseDecoder {
    kind: CallKind,
    profile: DecoderProfile,
    operations: Arc<OperationDecoder>,
    max_response_bytes: usize,
}

impl ResponseDecoder {
    fn new(kind: CallKind, operations: Arc<OperationDecoder>, max_response_bytes: usize) -> Self {
        let profile = registry::profile(kind);
        LoggingUtils::log_decoder_built(
            kind,
            profile.custom_types().count(),
            profile.excluded_types().count(),
        );
        Self {
            kind,
            profile,
            operations,
            max_response_bytes,
        }
    }

    pub fn kind(&self) -> CallKind {
        self.kind
    }

    /// Decode a full JSON-RPC reply; replies over the size limit are refused
    /// before parsing
    pub fn decode(&self, raw: &[u8]) -> DecodeResult<DecodedResponse> {
        check_size(raw, self.max_response_bytes)?;
        let result = JsonRpcResponse::parse(raw)?.into_result()?;
        self.decode_result(&result)
    }

    /// Decode the `result` member of a reply
    pub fn decode_result(&self, result: &Value) -> DecodeResult<DecodedResponse> {
        let cx = DecodeContext::new(&self.profile, &self.operations);
        let root = Node::root(result);

        match self.profile.shape() {
            ResponseShape::Single(target) => {
                if root.is_null() {
                    return Err(DecodeError::malformed(
                        root.path(),
                        format!("expected {}, found null", target),
                    ));
                }
                decode_target(target, &root, &cx).map(DecodedResponse::Single)
            }
            ResponseShape::ListOf(target) => {
                let elements = root.elements()?;
                elements
                    .iter()
                    .map(|element| decode_target(target, element, &cx))
                    .collect::<DecodeResult<Vec<_>>>()
                    .map(DecodedResponse::List)
            }
        }
    }
}

fn check_size(raw: &[u8], limit: usize) -> DecodeResult<()> {
    if raw.len() > limit {
        return Err(DecodeError::ResponseTooLarge {
            size: raw.len(),
            limit,
        });
    }
    Ok(())
}

fn decode_target(
    target: TargetType,
    node: &Node<'_>,
    cx: &DecodeContext<'_>,
) -> DecodeResult<TypedValue> {
    match target {
        TargetType::Block => cx.decode(node).map(TypedValue::Block),
        TargetType::BlockHeader => cx.decode(node).map(TypedValue::BlockHeader),
        TargetType::AccountProperties => cx.decode(node).map(TypedValue::AccountProperties),
        TargetType::AssetAmount => cx.decode(node).map(TypedValue::AssetAmount),
        TargetType::OperationHistory => cx.decode(node).map(TypedValue::OperationHistory),
        TargetType::BucketObject => cx.decode(node).map(TypedValue::BucketObject),
        TargetType::Asset => cx.decode(node).map(TypedValue::Asset),
        TargetType::DynamicGlobalProperties => {
            cx.decode(node).map(TypedValue::DynamicGlobalProperties)
        }
        TargetType::AccountIdList => cx.decode(node).map(TypedValue::AccountIdList),
        TargetType::LimitOrder => cx.decode(node).map(TypedValue::LimitOrder),
        TargetType::Transaction => cx.decode(node).map(TypedValue::Transaction),
        TargetType::HistoryOperationDetail => {
            cx.decode(node).map(TypedValue::HistoryOperationDetail)
        }
    }
}

/// Owner of the per-call decoders and the shared operation table.
pub struct ResponseDecoderFactory {
    operations: Arc<OperationDecoder>,
    decoders: Vec<OnceLock<Arc<ResponseDecoder>>>,
    max_response_bytes: usize,
}

impl ResponseDecoderFactory {
    /// Factory with default settings; decoders are built lazily
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_MAX_RESPONSE_BYTES)
    }

    pub fn with_limit(max_response_bytes: usize) -> Self {
        Self {
            operations: Arc::new(OperationDecoder::new()),
            decoders: (0..CallKind::COUNT).map(|_| OnceLock::new()).collect(),
            max_response_bytes,
        }
    }

    /// Factory configured from settings, warmed when `eager_profiles` is set
    pub fn from_config(settings: &DecoderSettings) -> Self {
        let factory = Self::with_limit(settings.max_response_bytes);
        if settings.eager_profiles {
            factory.warm();
        }
        factory
    }

    /// Build every decoder now
    pub fn warm(&self) {
        for kind in CallKind::iter() {
            self.decoder(kind);
        }
    }

    /// Number of decoders built so far
    pub fn built(&self) -> usize {
        self.decoders.iter().filter(|slot| slot.get().is_some()).count()
    }

    pub fn max_response_bytes(&self) -> usize {
        self.max_response_bytes
    }

    pub fn operations(&self) -> &OperationDecoder {
        &self.operations
    }

    /// Cached decoder for `kind`
    pub fn decoder(&self, kind: CallKind) -> Arc<ResponseDecoder> {
        self.decoders[kind.index()]
            .get_or_init(|| {
                Arc::new(ResponseDecoder::new(
                    kind,
                    Arc::clone(&self.operations),
                    self.max_response_bytes,
                ))
            })
            .clone()
    }

    /// Decode a raw JSON-RPC reply to a call of `kind`
    pub fn decode(&self, raw: &[u8], kind: CallKind) -> DecodeResult<DecodedResponse> {
        // Checked here as well so an oversize reply never builds a decoder
        if let Err(err) = check_size(raw, self.max_response_bytes) {
            LoggingUtils::log_decode_failure(kind, &err);
            return Err(err);
        }
        self.finish(kind, self.decoder(kind).decode(raw))
    }

    /// Decode a reply to the method named `method`
    pub fn decode_method(&self, raw: &[u8], method: &str) -> DecodeResult<DecodedResponse> {
        let kind = registry::resolve_method(method)?;
        self.decode(raw, kind)
    }

    /// Decode an already extracted `result` value
    pub fn decode_result(&self, result: &Value, kind: CallKind) -> DecodeResult<DecodedResponse> {
        self.finish(kind, self.decoder(kind).decode_result(result))
    }

    fn finish(
        &self,
        kind: CallKind,
        outcome: DecodeResult<DecodedResponse>,
    ) -> DecodeResult<DecodedResponse> {
        match &outcome {
            Ok(decoded) => LoggingUtils::log_decoded(kind, decoded.len()),
            Err(err) => LoggingUtils::log_decode_failure(kind, err),
        }
        outcome
    }
}

impl Default for ResponseDecoderFactory {
    fn default() -> Self {
        Self::new()
    }
}
