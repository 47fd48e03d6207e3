//! Compact JSON text codec for [`GenericValue`].
//!
//! Serialization goes through serde so the same impls serve any serde format;
//! the text entry points below use `serde_json`. Numbers that hold an integral
//! value within the exactly representable range are written without a
//! fractional part, and every parsed number becomes `Number(f64)`.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::error::ParseError;
use crate::value::{GenericValue, Object};

/// Largest magnitude where every integer is exactly representable in an f64.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Output layout for [`serialize_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextStyle {
    /// No whitespace between tokens.
    #[default]
    Compact,
    /// Indented, one entry per line. Meant for files people edit by hand.
    Pretty,
}

/// Encode `value` as compact text.
pub fn serialize(value: &GenericValue) -> String {
    serialize_with(value, TextStyle::Compact)
}

pub fn serialize_with(value: &GenericValue, style: TextStyle) -> String {
    let out = match style {
        TextStyle::Compact => serde_json::to_string(value),
        TextStyle::Pretty => serde_json::to_string_pretty(value),
    };
    out.unwrap_or_else(|err| {
        // Only reachable through a failing writer; string keys never fail.
        log::warn!("serialize generic value: {err}");
        String::from("null")
    })
}

/// Decode text into a [`GenericValue`].
///
/// Nesting depth is unbounded so that anything [`serialize`] writes can be
/// read back; the stack grows on demand instead.
pub fn parse(text: &str) -> Result<GenericValue, ParseError> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = GenericValue::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

/// Decode text whose top level must be an object.
pub fn parse_object(text: &str) -> Result<Object, ParseError> {
    match parse(text)? {
        GenericValue::Object(map) => Ok(map),
        other => Err(ParseError::new(
            0,
            0,
            format!("expected object, found {}", other.kind()),
        )),
    }
}

/// Decode text into a list of values. A top-level array yields its elements;
/// any other document yields a single-element list.
pub fn parse_array(text: &str) -> Result<Vec<GenericValue>, ParseError> {
    match parse(text)? {
        GenericValue::Array(items) => Ok(items),
        other => Ok(vec![other]),
    }
}

impl Serialize for GenericValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            GenericValue::Null => serializer.serialize_unit(),
            GenericValue::Boolean(b) => serializer.serialize_bool(*b),
            GenericValue::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_EXACT_INT {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            GenericValue::String(s) => serializer.serialize_str(s),
            GenericValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            GenericValue::Object(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (key, val) in map {
                    state.serialize_entry(key, val)?;
                }
                state.end()
            }
        }
    }
}

struct GenericValueVisitor;

impl<'de> Visitor<'de> for GenericValueVisitor {
    type Value = GenericValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, b: bool) -> Result<GenericValue, E> {
        Ok(GenericValue::Boolean(b))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<GenericValue, E> {
        Ok(GenericValue::Number(n as f64))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<GenericValue, E> {
        Ok(GenericValue::Number(n as f64))
    }

    fn visit_f64<E: de::Error>(self, n: f64) -> Result<GenericValue, E> {
        Ok(GenericValue::Number(n))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<GenericValue, E> {
        Ok(GenericValue::String(s.to_string()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<GenericValue, E> {
        Ok(GenericValue::String(s))
    }

    fn visit_unit<E: de::Error>(self) -> Result<GenericValue, E> {
        Ok(GenericValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<GenericValue, E> {
        Ok(GenericValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<GenericValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        GenericValue::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<GenericValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(GenericValue::Array(items))
    }

    fn visit_map<A>(self, mut access: A) -> Result<GenericValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = Object::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, val)) = access.next_entry::<String, GenericValue>()? {
            // Later duplicates win, matching serde_json::Value.
            map.insert(key, val);
        }
        Ok(GenericValue::Object(map))
    }
}

impl<'de> Deserialize<'de> for GenericValue {
    fn deserialize<D>(deserializer: D) -> Result<GenericValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(GenericValueVisitor)
    }
}
