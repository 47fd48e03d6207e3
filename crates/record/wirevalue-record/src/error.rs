use std::path::PathBuf;

use thiserror::Error;
use wirevalue_core::ParseError;

use crate::report::MarshalReport;

/// Problems found while building a [`crate::RecordDescriptor`]. These are
/// registration-time failures; a descriptor that builds never fails a
/// conversion call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("record {record}: field '{field}' has unsupported type {type_name}")]
    UnsupportedType {
        record: String,
        field: String,
        type_name: &'static str,
    },
    #[error("record {record}: field '{field}' is declared more than once")]
    DuplicateField { record: String, field: String },
    #[error("record {record}: field name must not be empty")]
    EmptyFieldName { record: String },
    #[error("record {record}: registry entry holds a descriptor of another type")]
    Registry { record: String },
}

/// Errors from the text and file persistence helpers.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
    #[error("record only partially populated: {0}")]
    Incomplete(MarshalReport),
}
