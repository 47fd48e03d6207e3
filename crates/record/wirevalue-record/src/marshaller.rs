//! Descriptor-driven conversion between records and generic values.
//!
//! `to_value` is total. `from_value` is best-effort: every declared field
//! present with an acceptable kind is written, everything else is left as it
//! was and noted in the returned [`MarshalReport`]. Keys the descriptor does
//! not declare are ignored.

use wirevalue_core::{GenericValue, Object};

use crate::config::MarshalConfig;
use crate::descriptor::RecordDescriptor;
use crate::error::DescriptorError;
use crate::registry::{descriptor, Record};
use crate::report::{IssueKind, MarshalContext, MarshalReport};

/// Object with one entry per declared field, in declaration order.
pub fn to_value<R>(record: &R, descriptor: &RecordDescriptor<R>) -> GenericValue {
    let mut out = Object::with_capacity(descriptor.len());
    for field in descriptor.fields() {
        out.insert(field.name().to_string(), field.read(record));
    }
    GenericValue::Object(out)
}

/// Populate `record` from `value`. Returns `true` only when every declared
/// field was present and converted.
pub fn from_value<R>(
    value: &GenericValue,
    descriptor: &RecordDescriptor<R>,
    record: &mut R,
) -> bool {
    from_value_report(value, descriptor, record).is_complete()
}

/// Like [`from_value`], returning the per-field outcome.
pub fn from_value_report<R>(
    value: &GenericValue,
    descriptor: &RecordDescriptor<R>,
    record: &mut R,
) -> MarshalReport {
    from_value_with(value, descriptor, record, &MarshalConfig::default())
}

pub fn from_value_with<R>(
    value: &GenericValue,
    descriptor: &RecordDescriptor<R>,
    record: &mut R,
    config: &MarshalConfig,
) -> MarshalReport {
    let mut ctx = MarshalContext::new(config);
    read_fields(value, descriptor, record, &mut ctx);
    let report = ctx.into_report();
    if !report.is_complete() {
        log::debug!(
            "record {} partially populated: {} issue(s)",
            descriptor.name(),
            report.issues.len()
        );
    }
    report
}

pub(crate) fn read_fields<R>(
    value: &GenericValue,
    descriptor: &RecordDescriptor<R>,
    record: &mut R,
    ctx: &mut MarshalContext<'_>,
) {
    let GenericValue::Object(map) = value else {
        ctx.record(IssueKind::NotAnObject(value.kind()));
        return;
    };
    for field in descriptor.fields() {
        match map.get(field.name()) {
            Some(v) => ctx.in_field(field.name(), |ctx| field.write(record, v, ctx)),
            None => ctx.missing(field.name()),
        }
    }
}

/// [`to_value`] using the registered descriptor of `R`.
pub fn try_to_value<R: Record>(record: &R) -> Result<GenericValue, DescriptorError> {
    Ok(to_value(record, descriptor::<R>()?))
}

/// [`from_value_with`] using the registered descriptor of `R`.
pub fn try_from_value<R: Record>(
    value: &GenericValue,
    record: &mut R,
    config: &MarshalConfig,
) -> Result<MarshalReport, DescriptorError> {
    Ok(from_value_with(value, descriptor::<R>()?, record, config))
}
