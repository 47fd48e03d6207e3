//! GenericValue: the dynamically typed tree exchanged between native records,
//! wire messages and text.
//!
//! Integers and floats share one `f64` representation; nothing records whether
//! a number was originally integral. Objects keep the order in which keys were
//! inserted, but equality ignores key order.

use std::fmt;

use indexmap::IndexMap;

use crate::error::ValueError;

/// Key/value storage for [`GenericValue::Object`].
pub type Object = IndexMap<String, GenericValue>;

/// Coarse kind of a [`GenericValue`], used for dispatch and error reporting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum GenericValue {
    #[default]
    Null,

    Boolean(bool),

    /// Shared numeric representation for integers and floats.
    Number(f64),

    String(String),

    /// Ordered sequence; order is significant.
    Array(Vec<GenericValue>),

    /// String-keyed mapping with unique keys.
    Object(Object),
}

impl GenericValue {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            GenericValue::Null => ValueKind::Null,
            GenericValue::Boolean(_) => ValueKind::Boolean,
            GenericValue::Number(_) => ValueKind::Number,
            GenericValue::String(_) => ValueKind::String,
            GenericValue::Array(_) => ValueKind::Array,
            GenericValue::Object(_) => ValueKind::Object,
        }
    }

    /// Convenience constructors
    pub fn null() -> Self {
        GenericValue::Null
    }

    pub fn array(items: impl IntoIterator<Item = GenericValue>) -> Self {
        GenericValue::Array(items.into_iter().collect())
    }

    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, GenericValue)>) -> Self {
        GenericValue::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, GenericValue::Null)
    }

    pub fn as_bool(&self) -> Result<bool, ValueError> {
        match self {
            GenericValue::Boolean(b) => Ok(*b),
            other => Err(other.mismatch(ValueKind::Boolean)),
        }
    }

    pub fn as_number(&self) -> Result<f64, ValueError> {
        match self {
            GenericValue::Number(n) => Ok(*n),
            other => Err(other.mismatch(ValueKind::Number)),
        }
    }

    pub fn as_str(&self) -> Result<&str, ValueError> {
        match self {
            GenericValue::String(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::String)),
        }
    }

    pub fn as_array(&self) -> Result<&[GenericValue], ValueError> {
        match self {
            GenericValue::Array(items) => Ok(items),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    pub fn as_object(&self) -> Result<&Object, ValueError> {
        match self {
            GenericValue::Object(map) => Ok(map),
            other => Err(other.mismatch(ValueKind::Object)),
        }
    }

    /// Look up `key` on an object. Non-objects have no keys.
    pub fn get(&self, key: &str) -> Option<&GenericValue> {
        match self {
            GenericValue::Object(map) => map.get(key),
            _ => None,
        }
    }

    fn mismatch(&self, expected: ValueKind) -> ValueError {
        ValueError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl From<bool> for GenericValue {
    fn from(b: bool) -> Self {
        GenericValue::Boolean(b)
    }
}

impl From<f64> for GenericValue {
    fn from(n: f64) -> Self {
        GenericValue::Number(n)
    }
}

impl From<f32> for GenericValue {
    fn from(n: f32) -> Self {
        GenericValue::Number(f64::from(n))
    }
}

impl From<i32> for GenericValue {
    fn from(n: i32) -> Self {
        GenericValue::Number(f64::from(n))
    }
}

impl From<u32> for GenericValue {
    fn from(n: u32) -> Self {
        GenericValue::Number(f64::from(n))
    }
}

impl From<i64> for GenericValue {
    // Widening past 2^53 loses precision; the shared numeric kind is f64.
    fn from(n: i64) -> Self {
        GenericValue::Number(n as f64)
    }
}

impl From<&str> for GenericValue {
    fn from(s: &str) -> Self {
        GenericValue::String(s.to_string())
    }
}

impl From<String> for GenericValue {
    fn from(s: String) -> Self {
        GenericValue::String(s)
    }
}

impl From<Vec<GenericValue>> for GenericValue {
    fn from(items: Vec<GenericValue>) -> Self {
        GenericValue::Array(items)
    }
}

impl From<Object> for GenericValue {
    fn from(map: Object) -> Self {
        GenericValue::Object(map)
    }
}

impl<T: Into<GenericValue>> From<Option<T>> for GenericValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(GenericValue::Null)
    }
}

impl fmt::Display for GenericValue {
    /// Displays the compact text form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::text::serialize(self))
    }
}
