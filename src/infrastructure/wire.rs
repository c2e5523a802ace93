//! Generic structural decoding over `serde_json::Value`
//!
//! A [`Node`] is a borrowed JSON value plus the field path that led to it, so
//! every failure can say where it happened. A [`DecodeContext`] carries the
//! active [`DecoderProfile`] and the operation table; it picks between a
//! type's structural and custom decoder and applies the profile's exclusions.

use chrono::NaiveDateTime;
use serde_json::{Map, Value};
use tracing::trace;

use crate::domain::{DecoderProfile, WireType};
use crate::infrastructure::operations::OperationDecoder;
use crate::shared::error::{DecodeError, DecodeResult};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// JSON type name used in error messages
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A JSON value and its path from the root of the result.
#[derive(Debug, Clone)]
pub struct Node<'v> {
    value: &'v Value,
    path: String,
}

impl<'v> Node<'v> {
    pub fn root(value: &'v Value) -> Self {
        Self {
            value,
            path: "result".to_string(),
        }
    }

    pub fn value(&self) -> &'v Value {
        self.value
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn child(&self, value: &'v Value, key: &str) -> Node<'v> {
        Node {
            value,
            path: format!("{}.{}", self.path, key),
        }
    }

    /// Node for the `index`-th element of an array value
    pub fn element(&self, value: &'v Value, index: usize) -> Node<'v> {
        Node {
            value,
            path: format!("{}[{}]", self.path, index),
        }
    }

    fn wrong_type(&self, expected: &'static str) -> DecodeError {
        DecodeError::WrongType {
            path: self.path.clone(),
            expected,
            found: kind_name(self.value),
        }
    }

    pub fn as_object(&self) -> DecodeResult<&'v Map<String, Value>> {
        self.value.as_object().ok_or_else(|| {
            DecodeError::malformed(
                &self.path,
                format!("expected object, found {}", kind_name(self.value)),
            )
        })
    }

    pub fn as_array(&self) -> DecodeResult<&'v [Value]> {
        self.value.as_array().map(Vec::as_slice).ok_or_else(|| {
            DecodeError::malformed(
                &self.path,
                format!("expected array, found {}", kind_name(self.value)),
            )
        })
    }

    /// Field as present on the wire, `null` included
    pub fn get(&self, key: &str) -> DecodeResult<Option<Node<'v>>> {
        Ok(self.as_object()?.get(key).map(|value| self.child(value, key)))
    }

    /// Required field; absent and `null` are both missing
    pub fn field(&self, key: &str) -> DecodeResult<Node<'v>> {
        match self.as_object()?.get(key) {
            Some(value) if !value.is_null() => Ok(self.child(value, key)),
            _ => Err(DecodeError::missing(format!("{}.{}", self.path, key))),
        }
    }

    /// Optional field; absent and `null` both yield `None`
    pub fn opt_field(&self, key: &str) -> DecodeResult<Option<Node<'v>>> {
        match self.as_object()?.get(key) {
            Some(value) if !value.is_null() => Ok(Some(self.child(value, key))),
            _ => Ok(None),
        }
    }

    pub fn elements(&self) -> DecodeResult<Vec<Node<'v>>> {
        Ok(self
            .as_array()?
            .iter()
            .enumerate()
            .map(|(index, value)| self.element(value, index))
            .collect())
    }

    /// Positional array of exactly `N` elements
    pub fn tuple<const N: usize>(&self) -> DecodeResult<[Node<'v>; N]> {
        let items = self.as_array()?;
        if items.len() != N {
            return Err(DecodeError::malformed(
                &self.path,
                format!("expected {} positional elements, found {}", N, items.len()),
            ));
        }
        Ok(std::array::from_fn(|index| self.element(&items[index], index)))
    }

    pub fn str(&self) -> DecodeResult<&'v str> {
        self.value.as_str().ok_or_else(|| self.wrong_type("string"))
    }

    pub fn string(&self) -> DecodeResult<String> {
        self.str().map(str::to_string)
    }

    pub fn bool(&self) -> DecodeResult<bool> {
        self.value.as_bool().ok_or_else(|| self.wrong_type("boolean"))
    }

    /// Unsigned integer that must fit in `T`
    pub fn uint<T: TryFrom<u64>>(&self) -> DecodeResult<T> {
        self.value
            .as_u64()
            .and_then(|n| T::try_from(n).ok())
            .ok_or_else(|| self.wrong_type("unsigned integer"))
    }

    /// Share quantity: either a JSON number or a string of decimal digits
    pub fn amount(&self) -> DecodeResult<u64> {
        match self.value {
            Value::Number(n) => n.as_u64().ok_or_else(|| self.wrong_type("unsigned integer")),
            Value::String(s) if s.starts_with(|c: char| c.is_ascii_digit()) => s
                .parse::<u64>()
                .map_err(|_| self.wrong_type("numeric string")),
            Value::String(_) => Err(self.wrong_type("numeric string")),
            _ => Err(self.wrong_type("number or numeric string")),
        }
    }

    pub fn timestamp(&self) -> DecodeResult<NaiveDateTime> {
        let text = self.str()?;
        NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
            .map_err(|_| self.wrong_type("timestamp"))
    }

    pub fn hex_bytes(&self) -> DecodeResult<Vec<u8>> {
        hex::decode(self.str()?).map_err(|_| self.wrong_type("hex string"))
    }

    pub fn strings(&self) -> DecodeResult<Vec<String>> {
        self.elements()?.iter().map(Node::string).collect()
    }

    /// Field holding a list of raw values; absent means empty
    pub fn raw_list_or_empty(&self, key: &str) -> DecodeResult<Vec<Value>> {
        match self.opt_field(key)? {
            Some(node) => Ok(node.as_array()?.to_vec()),
            None => Ok(Vec::new()),
        }
    }

    /// Field holding a list of strings; absent means empty
    pub fn strings_or_empty(&self, key: &str) -> DecodeResult<Vec<String>> {
        match self.opt_field(key)? {
            Some(node) => node.strings(),
            None => Ok(Vec::new()),
        }
    }
}

/// A type that can be decoded from the wire.
///
/// `decode_structural` reads the plain keyed form. Types with a non-standard
/// wire encoding override `decode_custom`; the profile decides which one is
/// used.
pub trait WireDecode: Sized {
    const WIRE_TYPE: WireType;

    fn decode_structural(node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Self>;

    fn decode_custom(node: &Node<'_>, cx: &DecodeContext<'_>) -> DecodeResult<Self> {
        Self::decode_structural(node, cx)
    }
}

/// Per-decode view of the rules in force. Holds only shared references.
#[derive(Clone, Copy)]
pub struct DecodeContext<'a> {
    profile: &'a DecoderProfile,
    operations: &'a OperationDecoder,
}

impl<'a> DecodeContext<'a> {
    pub fn new(profile: &'a DecoderProfile, operations: &'a OperationDecoder) -> Self {
        Self {
            profile,
            operations,
        }
    }

    pub fn operations(&self) -> &'a OperationDecoder {
        self.operations
    }

    pub fn decode<T: WireDecode>(&self, node: &Node<'_>) -> DecodeResult<T> {
        if self.profile.has_custom(T::WIRE_TYPE) {
            T::decode_custom(node, self)
        } else {
            T::decode_structural(node, self)
        }
    }

    pub fn field<T: WireDecode>(&self, node: &Node<'_>, key: &str) -> DecodeResult<T> {
        self.decode(&node.field(key)?)
    }

    /// Optional field. Returns `None` without reading the value when the
    /// profile excludes `T`.
    pub fn optional_field<T: WireDecode>(
        &self,
        node: &Node<'_>,
        key: &str,
    ) -> DecodeResult<Option<T>> {
        if self.profile.excludes(T::WIRE_TYPE) {
            trace!(path = node.path(), field = key, wire_type = %T::WIRE_TYPE, "Elided excluded field");
            return Ok(None);
        }
        node.opt_field(key)?
            .map(|child| self.decode(&child))
            .transpose()
    }

    pub fn list<T: WireDecode>(&self, node: &Node<'_>) -> DecodeResult<Vec<T>> {
        node.elements()?
            .iter()
            .map(|element| self.decode(element))
            .collect()
    }

    pub fn list_field<T: WireDecode>(&self, node: &Node<'_>, key: &str) -> DecodeResult<Vec<T>> {
        self.list(&node.field(key)?)
    }

    /// List field where absence means empty
    pub fn list_field_or_empty<T: WireDecode>(
        &self,
        node: &Node<'_>,
        key: &str,
    ) -> DecodeResult<Vec<T>> {
        match node.opt_field(key)? {
            Some(child) => self.list(&child),
            None => Ok(Vec::new()),
        }
    }
}
