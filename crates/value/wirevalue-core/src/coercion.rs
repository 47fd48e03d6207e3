//! Lossy coercion helpers from GenericValue into host-friendly primitives.
//! These never fail: anything without a sensible reading falls back to the
//! zero value of the target type.

use crate::GenericValue;

/// Coerce a value into an `i32`.
/// Rules:
/// - Number -> truncated toward zero, saturating at the i32 bounds (NaN -> 0)
/// - Boolean -> 1 / 0
/// - String -> parsed as a number, else 0
/// - anything else -> 0
pub fn to_int(v: &GenericValue) -> i32 {
    match v {
        GenericValue::Number(n) => *n as i32,
        GenericValue::Boolean(b) => i32::from(*b),
        GenericValue::String(s) => s.trim().parse::<f64>().map(|n| n as i32).unwrap_or(0),
        _ => 0,
    }
}

/// Coerce a value into an `f32`. Same rules as [`to_int`] without truncation.
pub fn to_float(v: &GenericValue) -> f32 {
    match v {
        GenericValue::Number(n) => *n as f32,
        GenericValue::Boolean(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        GenericValue::String(s) => s.trim().parse::<f32>().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Coerce a value into a `bool`.
/// - Boolean -> itself
/// - Number -> true when non-zero
/// - String -> true for "true" (any case) or a non-zero number
/// - Array / Object -> true when non-empty
/// - Null -> false
pub fn to_bool(v: &GenericValue) -> bool {
    match v {
        GenericValue::Boolean(b) => *b,
        GenericValue::Number(n) => *n != 0.0 && !n.is_nan(),
        GenericValue::String(s) => {
            let s = s.trim();
            s.eq_ignore_ascii_case("true") || s.parse::<f64>().map(|n| n != 0.0).unwrap_or(false)
        }
        GenericValue::Array(items) => !items.is_empty(),
        GenericValue::Object(map) => !map.is_empty(),
        GenericValue::Null => false,
    }
}

/// Encode raw bytes as an array of numbers (one element per byte).
pub fn bytes_to_value(bytes: &[u8]) -> GenericValue {
    GenericValue::Array(
        bytes
            .iter()
            .map(|b| GenericValue::Number(f64::from(*b)))
            .collect(),
    )
}

/// Decode bytes from a value.
/// - Array -> each numeric element clamped to 0..=255; non-numeric elements are skipped
/// - String -> its UTF-8 bytes
/// - anything else -> empty
pub fn to_bytes(v: &GenericValue) -> Vec<u8> {
    match v {
        GenericValue::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                GenericValue::Number(n) => Some(n.clamp(0.0, 255.0) as u8),
                _ => None,
            })
            .collect(),
        GenericValue::String(s) => s.as_bytes().to_vec(),
        _ => Vec::new(),
    }
}
