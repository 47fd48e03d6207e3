//! Conversion between [`WireMessage`] and [`GenericValue`].
//!
//! Both directions are total. Precision is traded for availability:
//! - integer wire leaves widen to `Number` and come back as `Double`
//! - binary blobs degrade to [`BINARY_PLACEHOLDER`] text
//! - containers past [`MAX_WIRE_DEPTH`] degrade to `Null`
//!
//! Callers that need the raw bytes must read the wire message directly.

use wirevalue_core::{GenericValue, Object};

use crate::message::{WireMessage, WireObject};

/// Text substituted for binary blobs when converting into a GenericValue.
pub const BINARY_PLACEHOLDER: &str =
    "<binary payload not representable as a generic value, read the wire message directly>";

/// Containers nested deeper than this convert to `Null` (in either direction)
/// rather than being descended into.
pub const MAX_WIRE_DEPTH: usize = 512;

/// Convert a wire message into a generic value.
pub fn from_wire(message: &WireMessage) -> GenericValue {
    from_wire_at(message, 0)
}

fn from_wire_at(message: &WireMessage, depth: usize) -> GenericValue {
    match message {
        WireMessage::Integer(n) => GenericValue::Number(*n as f64),
        WireMessage::Double(n) => GenericValue::Number(*n),
        WireMessage::String(s) => GenericValue::String(s.clone()),
        WireMessage::Binary(bytes) => {
            log::trace!("binary wire payload ({} bytes) replaced by placeholder", bytes.len());
            GenericValue::String(BINARY_PLACEHOLDER.to_string())
        }
        WireMessage::Array(_) | WireMessage::Object(_) if depth >= MAX_WIRE_DEPTH => {
            log::warn!("wire payload nested past {MAX_WIRE_DEPTH} levels truncated to null");
            GenericValue::Null
        }
        WireMessage::Array(items) => GenericValue::Array(
            items
                .iter()
                .map(|item| from_wire_at(item, depth + 1))
                .collect(),
        ),
        WireMessage::Object(map) => {
            let mut out = Object::with_capacity(map.len());
            for (key, val) in map {
                out.insert(key.clone(), from_wire_at(val, depth + 1));
            }
            GenericValue::Object(out)
        }
        WireMessage::Boolean(b) => GenericValue::Boolean(*b),
        WireMessage::Null => GenericValue::Null,
    }
}

/// Convert a generic value into a wire message. Numbers always become
/// `Double`; whether a number was integral is not recoverable here.
pub fn to_wire(value: &GenericValue) -> WireMessage {
    to_wire_at(value, 0)
}

fn to_wire_at(value: &GenericValue, depth: usize) -> WireMessage {
    match value {
        GenericValue::Null => WireMessage::Null,
        GenericValue::Boolean(b) => WireMessage::Boolean(*b),
        GenericValue::Number(n) => WireMessage::Double(*n),
        GenericValue::String(s) => WireMessage::String(s.clone()),
        GenericValue::Array(_) | GenericValue::Object(_) if depth >= MAX_WIRE_DEPTH => {
            log::warn!("generic value nested past {MAX_WIRE_DEPTH} levels sent as null");
            WireMessage::Null
        }
        GenericValue::Array(items) => WireMessage::Array(
            items
                .iter()
                .map(|item| to_wire_at(item, depth + 1))
                .collect(),
        ),
        GenericValue::Object(map) => {
            let mut out = WireObject::with_capacity(map.len());
            for (key, val) in map {
                out.insert(key.clone(), to_wire_at(val, depth + 1));
            }
            WireMessage::Object(out)
        }
    }
}

/// [`to_wire`] for an optional value; absence becomes wire `null`.
pub fn to_wire_opt(value: Option<&GenericValue>) -> WireMessage {
    value.map(to_wire).unwrap_or(WireMessage::Null)
}
