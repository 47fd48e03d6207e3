//! Field and record descriptors.
//!
//! A [`RecordDescriptor`] is built once per record type and shared read-only
//! afterwards. Each [`FieldDescriptor`] pairs a name and declared kind with
//! accessors bound to a record instance at call time.

use std::fmt;

use hashbrown::HashSet;
use wirevalue_core::GenericValue;

use crate::error::DescriptorError;
use crate::kind::FieldKind;
use crate::marshal::{enum_to_value, read_enum, read_into, IntEnum, Marshal};
use crate::report::{IssueKind, MarshalContext};

type Getter<R> = Box<dyn Fn(&R) -> GenericValue + Send + Sync>;
type Setter<R> = Box<dyn Fn(&mut R, &GenericValue, &mut MarshalContext<'_>) + Send + Sync>;

pub struct FieldDescriptor<R> {
    name: String,
    kind: FieldKind,
    get: Getter<R>,
    set: Setter<R>,
}

impl<R> FieldDescriptor<R> {
    /// Field backed by any [`Marshal`] type, addressed through a pair of
    /// projections into the record.
    pub fn new<T, G, M>(name: impl Into<String>, get: G, get_mut: M) -> Self
    where
        T: Marshal + 'static,
        G: for<'a> Fn(&'a R) -> &'a T + Send + Sync + 'static,
        M: for<'a> Fn(&'a mut R) -> &'a mut T + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind: T::field_kind(),
            get: Box::new(move |record| get(record).to_value()),
            set: Box::new(move |record, value, ctx| {
                read_into(get_mut(record), value, ctx);
            }),
        }
    }

    /// Enumeration field stored as its integer index.
    pub fn enumeration<E, G, M>(name: impl Into<String>, get: G, get_mut: M) -> Self
    where
        E: IntEnum + 'static,
        G: for<'a> Fn(&'a R) -> &'a E + Send + Sync + 'static,
        M: for<'a> Fn(&'a mut R) -> &'a mut E + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind: FieldKind::Enum,
            get: Box::new(move |record| enum_to_value(*get(record))),
            set: Box::new(move |record, value, ctx| read_enum(get_mut(record), value, ctx)),
        }
    }

    /// Field with hand-written conversions. `from` runs only when the value's
    /// kind is accepted by `kind`; an `Err` is recorded against the field.
    pub fn custom<G, S>(name: impl Into<String>, kind: FieldKind, to: G, from: S) -> Self
    where
        G: Fn(&R) -> GenericValue + Send + Sync + 'static,
        S: Fn(&mut R, &GenericValue) -> Result<(), IssueKind> + Send + Sync + 'static,
    {
        let declared = kind.clone();
        Self {
            name: name.into(),
            kind,
            get: Box::new(to),
            set: Box::new(move |record, value, ctx| {
                if !declared.accepts(value.kind()) {
                    ctx.mismatch(declared.clone(), value.kind());
                    return;
                }
                if let Err(issue) = from(record, value) {
                    ctx.record(issue);
                }
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Current value of this field on `record`.
    pub fn read(&self, record: &R) -> GenericValue {
        (self.get)(record)
    }

    /// Write `value` into this field on `record`, recording any issue in `ctx`.
    pub fn write(&self, record: &mut R, value: &GenericValue, ctx: &mut MarshalContext<'_>) {
        (self.set)(record, value, ctx)
    }
}

impl<R> fmt::Debug for FieldDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Ordered field table for one record type.
pub struct RecordDescriptor<R> {
    name: &'static str,
    fields: Vec<FieldDescriptor<R>>,
}

impl<R> RecordDescriptor<R> {
    pub fn builder(name: &'static str) -> RecordDescriptorBuilder<R> {
        RecordDescriptorBuilder {
            name,
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor<R>] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor<R>> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<R> fmt::Debug for RecordDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordDescriptor")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish()
    }
}

pub struct RecordDescriptorBuilder<R> {
    name: &'static str,
    fields: Vec<FieldDescriptor<R>>,
}

impl<R> RecordDescriptorBuilder<R> {
    pub fn field<T, G, M>(self, name: impl Into<String>, get: G, get_mut: M) -> Self
    where
        T: Marshal + 'static,
        G: for<'a> Fn(&'a R) -> &'a T + Send + Sync + 'static,
        M: for<'a> Fn(&'a mut R) -> &'a mut T + Send + Sync + 'static,
    {
        self.push(FieldDescriptor::new(name, get, get_mut))
    }

    pub fn enumeration<E, G, M>(self, name: impl Into<String>, get: G, get_mut: M) -> Self
    where
        E: IntEnum + 'static,
        G: for<'a> Fn(&'a R) -> &'a E + Send + Sync + 'static,
        M: for<'a> Fn(&'a mut R) -> &'a mut E + Send + Sync + 'static,
    {
        self.push(FieldDescriptor::enumeration(name, get, get_mut))
    }

    pub fn custom<G, S>(self, name: impl Into<String>, kind: FieldKind, to: G, from: S) -> Self
    where
        G: Fn(&R) -> GenericValue + Send + Sync + 'static,
        S: Fn(&mut R, &GenericValue) -> Result<(), IssueKind> + Send + Sync + 'static,
    {
        self.push(FieldDescriptor::custom(name, kind, to, from))
    }

    pub fn push(mut self, field: FieldDescriptor<R>) -> Self {
        self.fields.push(field);
        self
    }

    /// Validate and freeze the field table.
    pub fn build(self) -> Result<RecordDescriptor<R>, DescriptorError> {
        self.validate()?;
        Ok(RecordDescriptor {
            name: self.name,
            fields: self.fields,
        })
    }

    fn validate(&self) -> Result<(), DescriptorError> {
        let mut seen = HashSet::with_capacity(self.fields.len());
        for field in &self.fields {
            if field.name.is_empty() {
                return Err(DescriptorError::EmptyFieldName {
                    record: self.name.to_string(),
                });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(DescriptorError::DuplicateField {
                    record: self.name.to_string(),
                    field: field.name.clone(),
                });
            }
            if let Some(type_name) = field.kind.unsupported_type() {
                return Err(DescriptorError::UnsupportedType {
                    record: self.name.to_string(),
                    field: field.name.clone(),
                    type_name,
                });
            }
        }
        Ok(())
    }
}
