//! Text and file persistence for registered records.

use std::fs;
use std::path::Path;

use wirevalue_core::{parse_object, serialize_with, GenericValue, TextStyle};

use crate::config::MarshalConfig;
use crate::error::PersistError;
use crate::marshaller::{try_from_value, try_to_value};
use crate::registry::Record;
use crate::report::MarshalReport;

/// Compact text form of `record`.
pub fn record_to_text<R: Record>(record: &R) -> Result<String, PersistError> {
    record_to_text_with(record, TextStyle::Compact)
}

pub fn record_to_text_with<R: Record>(
    record: &R,
    style: TextStyle,
) -> Result<String, PersistError> {
    let value = try_to_value(record)?;
    Ok(serialize_with(&value, style))
}

/// Parse `text` and populate `record` from it. The text must hold an object;
/// field-level problems are returned in the report.
pub fn record_from_text<R: Record>(
    text: &str,
    record: &mut R,
    config: &MarshalConfig,
) -> Result<MarshalReport, PersistError> {
    let object = parse_object(text)?;
    try_from_value(&GenericValue::Object(object), record, config).map_err(PersistError::from)
}

/// Write `record` to `path` in compact form, replacing any existing file.
pub fn save_record<R: Record>(record: &R, path: impl AsRef<Path>) -> Result<(), PersistError> {
    save_record_with(record, path, TextStyle::Compact)
}

pub fn save_record_with<R: Record>(
    record: &R,
    path: impl AsRef<Path>,
    style: TextStyle,
) -> Result<(), PersistError> {
    let path = path.as_ref();
    let text = record_to_text_with(record, style)?;
    fs::write(path, text).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("saved record {} to {}", R::NAME, path.display());
    Ok(())
}

/// Read `path` into `record`, tolerating missing and mismatched fields.
pub fn load_record<R: Record>(
    path: impl AsRef<Path>,
    record: &mut R,
    config: &MarshalConfig,
) -> Result<MarshalReport, PersistError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    record_from_text(&text, record, config)
}

/// Like [`load_record`], but any field issue is an error. `record` may still
/// have been partially written when `Incomplete` is returned.
pub fn load_record_strict<R: Record>(
    path: impl AsRef<Path>,
    record: &mut R,
) -> Result<(), PersistError> {
    let report = load_record(path, record, &MarshalConfig::default())?;
    if report.is_complete() {
        Ok(())
    } else {
        Err(PersistError::Incomplete(report))
    }
}
