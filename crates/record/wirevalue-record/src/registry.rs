//! Process-wide descriptor cache for [`Record`] types.

use std::any::{Any, TypeId};
use std::sync::{PoisonError, RwLock};

use hashbrown::HashMap;
use once_cell::sync::Lazy;
use wirevalue_core::GenericValue;

use crate::descriptor::RecordDescriptor;
use crate::error::DescriptorError;
use crate::kind::FieldKind;
use crate::marshal::Marshal;
use crate::marshaller::{read_fields, to_value};
use crate::report::{IssueKind, MarshalContext};

/// A native type with a registered field table. Implementing it makes the
/// type usable as a nested field of other records.
pub trait Record: 'static {
    const NAME: &'static str;

    fn describe() -> Result<RecordDescriptor<Self>, DescriptorError>
    where
        Self: Sized;
}

type Entry = &'static (dyn Any + Send + Sync);

static DESCRIPTORS: Lazy<RwLock<HashMap<TypeId, Entry>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Descriptor for `R`, built on first use and cached for the life of the
/// process. A failing `describe` is not cached.
pub fn descriptor<R: Record>() -> Result<&'static RecordDescriptor<R>, DescriptorError> {
    let id = TypeId::of::<R>();
    let cached = DESCRIPTORS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&id)
        .copied();
    if let Some(entry) = cached {
        return downcast::<R>(entry);
    }

    let built = R::describe()?;
    let mut map = DESCRIPTORS.write().unwrap_or_else(PoisonError::into_inner);
    let entry = *map.entry(id).or_insert_with(|| {
        log::trace!("registered descriptor for record {}", R::NAME);
        let leaked: &'static RecordDescriptor<R> = Box::leak(Box::new(built));
        leaked as Entry
    });
    downcast::<R>(entry)
}

fn downcast<R: Record>(entry: Entry) -> Result<&'static RecordDescriptor<R>, DescriptorError> {
    entry
        .downcast_ref::<RecordDescriptor<R>>()
        .ok_or_else(|| DescriptorError::Registry {
            record: R::NAME.to_string(),
        })
}

impl<R: Record> Marshal for R {
    fn field_kind() -> FieldKind {
        FieldKind::Record(R::NAME)
    }

    fn to_value(&self) -> GenericValue {
        match descriptor::<R>() {
            Ok(d) => to_value(self, d),
            Err(err) => {
                log::warn!("cannot convert record {}: {err}", R::NAME);
                GenericValue::Null
            }
        }
    }

    fn read_value(&mut self, value: &GenericValue, ctx: &mut MarshalContext<'_>) {
        match descriptor::<R>() {
            Ok(d) => read_fields(value, d, self, ctx),
            Err(err) => {
                log::warn!("cannot populate record {}: {err}", R::NAME);
                ctx.record(IssueKind::InvalidDescriptor(R::NAME));
            }
        }
    }
}
