//! Native types that can be stored in record fields.
//!
//! Each impl maps one native representation onto a [`FieldKind`]. Reads are
//! best-effort: a value of the wrong kind is recorded as an issue and the
//! target keeps whatever it held before.

use std::collections::{BTreeMap, HashMap};

use wirevalue_core::{GenericValue, Object};

use crate::kind::FieldKind;
use crate::report::{IssueKind, MarshalContext};

pub trait Marshal {
    /// Declared kind for fields of this type.
    fn field_kind() -> FieldKind
    where
        Self: Sized;

    fn to_value(&self) -> GenericValue;

    /// Overwrite `self` from `value`. Only called once the value's kind has
    /// been checked against [`Marshal::field_kind`]; see [`read_into`].
    fn read_value(&mut self, value: &GenericValue, ctx: &mut MarshalContext<'_>);
}

/// Checked entry point for every field read: rejects kind mismatches and
/// input nested past the configured depth before touching `target`.
/// Returns whether `target` was handed the value.
pub fn read_into<T: Marshal>(
    target: &mut T,
    value: &GenericValue,
    ctx: &mut MarshalContext<'_>,
) -> bool {
    let kind = T::field_kind();
    if !kind.accepts(value.kind()) {
        ctx.mismatch(kind, value.kind());
        return false;
    }
    if ctx.depth() > ctx.config().max_depth {
        ctx.record(IssueKind::DepthExceeded);
        return false;
    }
    target.read_value(value, ctx);
    true
}

/// Enumerations marshalled as their integer index.
pub trait IntEnum: Sized + Copy {
    fn to_index(self) -> i64;
    fn from_index(index: i64) -> Option<Self>;
}

pub(crate) fn enum_to_value<E: IntEnum>(e: E) -> GenericValue {
    GenericValue::Number(e.to_index() as f64)
}

pub(crate) fn read_enum<E: IntEnum>(
    target: &mut E,
    value: &GenericValue,
    ctx: &mut MarshalContext<'_>,
) {
    let GenericValue::Number(n) = value else {
        ctx.mismatch(FieldKind::Enum, value.kind());
        return;
    };
    // Indices are whole numbers; 1.7 is not variant 1.
    if !n.is_finite() || n.fract() != 0.0 {
        ctx.mismatch(FieldKind::Enum, value.kind());
        return;
    }
    let index = *n as i64;
    match E::from_index(index) {
        Some(e) => *target = e,
        None => ctx.record(IssueKind::UnknownVariant(index)),
    }
}

macro_rules! marshal_float {
    ($($t:ty),*) => {$(
        impl Marshal for $t {
            fn field_kind() -> FieldKind {
                FieldKind::Number
            }

            fn to_value(&self) -> GenericValue {
                GenericValue::Number(*self as f64)
            }

            fn read_value(&mut self, value: &GenericValue, _ctx: &mut MarshalContext<'_>) {
                if let GenericValue::Number(n) = value {
                    *self = *n as $t;
                }
            }
        }
    )*};
}

// Integers truncate toward zero and saturate at their bounds.
macro_rules! marshal_int {
    ($($t:ty),*) => {$(
        impl Marshal for $t {
            fn field_kind() -> FieldKind {
                FieldKind::Number
            }

            fn to_value(&self) -> GenericValue {
                GenericValue::Number(*self as f64)
            }

            fn read_value(&mut self, value: &GenericValue, ctx: &mut MarshalContext<'_>) {
                if let GenericValue::Number(n) = value {
                    if n.is_finite() {
                        *self = *n as $t;
                    } else {
                        ctx.mismatch(FieldKind::Number, value.kind());
                    }
                }
            }
        }
    )*};
}

marshal_float!(f32, f64);
marshal_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Marshal for bool {
    fn field_kind() -> FieldKind {
        FieldKind::Boolean
    }

    fn to_value(&self) -> GenericValue {
        GenericValue::Boolean(*self)
    }

    fn read_value(&mut self, value: &GenericValue, _ctx: &mut MarshalContext<'_>) {
        if let GenericValue::Boolean(b) = value {
            *self = *b;
        }
    }
}

impl Marshal for String {
    fn field_kind() -> FieldKind {
        FieldKind::String
    }

    fn to_value(&self) -> GenericValue {
        GenericValue::String(self.clone())
    }

    fn read_value(&mut self, value: &GenericValue, _ctx: &mut MarshalContext<'_>) {
        if let GenericValue::String(s) = value {
            self.clone_from(s);
        }
    }
}

impl Marshal for GenericValue {
    fn field_kind() -> FieldKind {
        FieldKind::Any
    }

    fn to_value(&self) -> GenericValue {
        self.clone()
    }

    fn read_value(&mut self, value: &GenericValue, _ctx: &mut MarshalContext<'_>) {
        self.clone_from(value);
    }
}

/// Elements that cannot be read are skipped; the field is replaced by the
/// elements that converted.
impl<T: Marshal + Default> Marshal for Vec<T> {
    fn field_kind() -> FieldKind {
        FieldKind::array_of(T::field_kind())
    }

    fn to_value(&self) -> GenericValue {
        GenericValue::Array(self.iter().map(Marshal::to_value).collect())
    }

    fn read_value(&mut self, value: &GenericValue, ctx: &mut MarshalContext<'_>) {
        let GenericValue::Array(items) = value else {
            return;
        };
        let mut out = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            ctx.in_index(i, |ctx| {
                let mut elem = T::default();
                if read_into(&mut elem, item, ctx) {
                    out.push(elem);
                }
            });
        }
        *self = out;
    }
}

impl<T: Marshal + Default> Marshal for Option<T> {
    fn field_kind() -> FieldKind {
        FieldKind::optional(T::field_kind())
    }

    fn to_value(&self) -> GenericValue {
        match self {
            Some(inner) => inner.to_value(),
            None => GenericValue::Null,
        }
    }

    fn read_value(&mut self, value: &GenericValue, ctx: &mut MarshalContext<'_>) {
        if value.is_null() {
            *self = None;
            return;
        }
        match self {
            Some(inner) => {
                read_into(inner, value, ctx);
            }
            None => {
                let mut inner = T::default();
                if read_into(&mut inner, value, ctx) {
                    *self = Some(inner);
                }
            }
        }
    }
}

fn map_to_value<'a, T: Marshal + 'a>(
    entries: impl Iterator<Item = (&'a String, &'a T)>,
) -> GenericValue {
    let mut out = Object::new();
    for (key, val) in entries {
        out.insert(key.clone(), val.to_value());
    }
    GenericValue::Object(out)
}

/// Convert each entry of `value`, skipping entries of the wrong kind.
fn read_map_entries<T: Marshal + Default>(
    value: &GenericValue,
    ctx: &mut MarshalContext<'_>,
    mut insert: impl FnMut(String, T),
) {
    let GenericValue::Object(map) = value else {
        return;
    };
    for (key, item) in map {
        ctx.in_field(key, |ctx| {
            let mut elem = T::default();
            if read_into(&mut elem, item, ctx) {
                insert(key.clone(), elem);
            }
        });
    }
}

macro_rules! marshal_map {
    ($($map:ident),*) => {$(
        impl<T: Marshal + Default> Marshal for $map<String, T> {
            fn field_kind() -> FieldKind {
                FieldKind::map_of(T::field_kind())
            }

            fn to_value(&self) -> GenericValue {
                map_to_value(self.iter())
            }

            fn read_value(&mut self, value: &GenericValue, ctx: &mut MarshalContext<'_>) {
                let mut out = $map::new();
                read_map_entries(value, ctx, |key, elem: T| {
                    out.insert(key, elem);
                });
                *self = out;
            }
        }
    )*};
}

type HashbrownMap<K, V> = hashbrown::HashMap<K, V>;

marshal_map!(HashMap, BTreeMap, HashbrownMap);
