//! WireMessage: the transport's own tagged value.
//!
//! Its taxonomy is a superset of GenericValue: integers and doubles are
//! distinct, and binary blobs exist. Object entries keep insertion order.

use std::fmt;

use indexmap::IndexMap;

/// Entry storage for [`WireMessage::Object`].
pub type WireObject = IndexMap<String, WireMessage>;

/// Flag identifying the active variant of a [`WireMessage`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WireKind {
    Integer,
    Double,
    String,
    Binary,
    Array,
    Object,
    Boolean,
    Null,
}

impl fmt::Display for WireKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WireKind::Integer => "integer",
            WireKind::Double => "double",
            WireKind::String => "string",
            WireKind::Binary => "binary",
            WireKind::Array => "array",
            WireKind::Object => "object",
            WireKind::Boolean => "boolean",
            WireKind::Null => "null",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum WireMessage {
    Integer(i64),
    Double(f64),
    String(String),
    /// Raw payload bytes. Not representable as a GenericValue.
    Binary(Vec<u8>),
    Array(Vec<WireMessage>),
    Object(WireObject),
    Boolean(bool),
    #[default]
    Null,
}

impl WireMessage {
    #[inline]
    pub fn kind(&self) -> WireKind {
        match self {
            WireMessage::Integer(_) => WireKind::Integer,
            WireMessage::Double(_) => WireKind::Double,
            WireMessage::String(_) => WireKind::String,
            WireMessage::Binary(_) => WireKind::Binary,
            WireMessage::Array(_) => WireKind::Array,
            WireMessage::Object(_) => WireKind::Object,
            WireMessage::Boolean(_) => WireKind::Boolean,
            WireMessage::Null => WireKind::Null,
        }
    }

    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, WireMessage)>) -> Self {
        WireMessage::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn array(items: impl IntoIterator<Item = WireMessage>) -> Self {
        WireMessage::Array(items.into_iter().collect())
    }

    pub fn string(s: impl Into<String>) -> Self {
        WireMessage::String(s.into())
    }

    /// True when this message, or anything nested in it, is a binary blob.
    pub fn contains_binary(&self) -> bool {
        match self {
            WireMessage::Binary(_) => true,
            WireMessage::Array(items) => items.iter().any(WireMessage::contains_binary),
            WireMessage::Object(map) => map.values().any(WireMessage::contains_binary),
            _ => false,
        }
    }
}
