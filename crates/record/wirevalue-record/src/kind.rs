//! Declared kinds of record fields.

use std::fmt;

use wirevalue_core::ValueKind;

/// The structural type a field is declared with. Mirrors the GenericValue
/// kinds, plus the composite forms native records use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Number,
    Boolean,
    String,
    /// Enumeration stored as its integer index.
    Enum,
    /// Nested record, by record name.
    Record(&'static str),
    /// Variable-length sequence of one element kind.
    Array(Box<FieldKind>),
    /// String-keyed map of one value kind.
    Map(Box<FieldKind>),
    /// `Null` when absent, otherwise the inner kind.
    Optional(Box<FieldKind>),
    /// Any GenericValue, stored as-is.
    Any,
    /// Native-only data with no value mapping (handles, callbacks, ...).
    /// Descriptors containing it are rejected when built.
    Opaque(&'static str),
}

impl FieldKind {
    pub fn array_of(inner: FieldKind) -> Self {
        FieldKind::Array(Box::new(inner))
    }

    pub fn map_of(inner: FieldKind) -> Self {
        FieldKind::Map(Box::new(inner))
    }

    pub fn optional(inner: FieldKind) -> Self {
        FieldKind::Optional(Box::new(inner))
    }

    /// Whether a value of kind `found` can be converted into this field kind.
    pub fn accepts(&self, found: ValueKind) -> bool {
        match self {
            FieldKind::Number | FieldKind::Enum => found == ValueKind::Number,
            FieldKind::Boolean => found == ValueKind::Boolean,
            FieldKind::String => found == ValueKind::String,
            FieldKind::Record(_) | FieldKind::Map(_) => found == ValueKind::Object,
            FieldKind::Array(_) => found == ValueKind::Array,
            FieldKind::Optional(inner) => found == ValueKind::Null || inner.accepts(found),
            FieldKind::Any => true,
            FieldKind::Opaque(_) => false,
        }
    }

    /// First opaque type name reachable from this kind, if any.
    pub fn unsupported_type(&self) -> Option<&'static str> {
        match self {
            FieldKind::Opaque(name) => Some(*name),
            FieldKind::Array(inner) | FieldKind::Map(inner) | FieldKind::Optional(inner) => {
                inner.unsupported_type()
            }
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Number => f.write_str("number"),
            FieldKind::Boolean => f.write_str("boolean"),
            FieldKind::String => f.write_str("string"),
            FieldKind::Enum => f.write_str("enum"),
            FieldKind::Record(name) => write!(f, "record {name}"),
            FieldKind::Array(inner) => write!(f, "array of {inner}"),
            FieldKind::Map(inner) => write!(f, "map of {inner}"),
            FieldKind::Optional(inner) => write!(f, "optional {inner}"),
            FieldKind::Any => f.write_str("any"),
            FieldKind::Opaque(name) => write!(f, "opaque {name}"),
        }
    }
}
