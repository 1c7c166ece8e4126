//! The runtime decode interface consumed by generated code.
//!
//! A [`Decoder`] hands out a [`KeyedContainer`] over a parsed payload; the
//! container offers per-field fallible decodes that never affect one
//! another. The decoding routine generated by `#[derive(ResilientCodable)]`
//! swallows per-field failures and keeps the field's declared default;
//! failing to obtain the container at all is the one failure it propagates.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{DecodeError, Result};

/// Anything that can hand out a keyed container over its input.
pub trait Decoder {
    /// Obtain the container keyed by field name.
    fn keyed_container(&self) -> Result<KeyedContainer<'_>>;
}

/// Decoder over a parsed JSON document.
#[derive(Debug, Clone)]
pub struct JsonDecoder {
    root: Value,
}

impl JsonDecoder {
    /// Parse a JSON document from text.
    pub fn from_str(input: &str) -> Result<Self> {
        let root = serde_json::from_str(input).map_err(DecodeError::Syntax)?;
        Ok(Self { root })
    }

    /// Parse a JSON document from bytes.
    pub fn from_slice(input: &[u8]) -> Result<Self> {
        let root = serde_json::from_slice(input).map_err(DecodeError::Syntax)?;
        Ok(Self { root })
    }

    /// Wrap an already-parsed document.
    #[must_use]
    pub const fn from_value(root: Value) -> Self {
        Self { root }
    }
}

impl Decoder for JsonDecoder {
    fn keyed_container(&self) -> Result<KeyedContainer<'_>> {
        match &self.root {
            Value::Object(entries) => Ok(KeyedContainer { entries }),
            other => {
                let found = json_type_name(other);
                log::debug!("cannot obtain a keyed container: document root is {found}");
                Err(DecodeError::Container(format!(
                    "expected an object at the document root, found {found}"
                )))
            }
        }
    }
}

/// A view over the payload's keyed fields.
#[derive(Debug, Clone, Copy)]
pub struct KeyedContainer<'a> {
    entries: &'a Map<String, Value>,
}

impl KeyedContainer<'_> {
    /// Decode the value stored under `key`, if any.
    ///
    /// Returns `Ok(None)` when the key is absent and an error when the value
    /// cannot be coerced to `T`; callers decide whether either case is
    /// fatal. One key's outcome never depends on another's.
    pub fn decode_if_present<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(value) => match serde_json::from_value(value.clone()) {
                Ok(decoded) => Ok(Some(decoded)),
                Err(source) => {
                    log::trace!("value under '{key}' did not coerce: {source}");
                    Err(DecodeError::Field {
                        key: key.to_string(),
                        source,
                    })
                }
            },
        }
    }

    /// Whether the payload carries `key` at all.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

/// Decoding routine synthesized by `#[derive(ResilientCodable)]`: any
/// field-level failure falls back to that field's declared default.
pub trait ResilientDecode: Sized {
    fn decode_resilient<D: Decoder>(decoder: &D) -> Result<Self>;
}

/// The serialization capability. Decoding comes from [`ResilientDecode`];
/// the encode half is whatever [`Serialize`] implementation the type
/// already carries.
pub trait Codable: ResilientDecode + Serialize {}

/// Decode a value from JSON text.
pub fn from_json_str<T: ResilientDecode>(input: &str) -> Result<T> {
    let decoder = JsonDecoder::from_str(input)?;
    T::decode_resilient(&decoder)
}

/// Decode a value from JSON bytes.
pub fn from_json_slice<T: ResilientDecode>(input: &[u8]) -> Result<T> {
    let decoder = JsonDecoder::from_slice(input)?;
    T::decode_resilient(&decoder)
}

/// Encode a value to JSON text.
pub fn to_json_string<T: Codable>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(DecodeError::Encode)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
