//! wirevalue-record: best-effort marshalling between native records and
//! [`GenericValue`](wirevalue_core::GenericValue) trees, driven by per-type
//! field descriptors.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod kind;
pub mod marshal;
pub mod marshaller;
pub mod persist;
pub mod registry;
pub mod report;

pub use config::{MarshalConfig, MissingFieldPolicy};
pub use descriptor::{FieldDescriptor, RecordDescriptor, RecordDescriptorBuilder};
pub use error::{DescriptorError, PersistError};
pub use kind::FieldKind;
pub use marshal::{read_into, IntEnum, Marshal};
pub use marshaller::{
    from_value, from_value_report, from_value_with, to_value, try_from_value, try_to_value,
};
pub use persist::{
    load_record, load_record_strict, record_from_text, record_to_text, record_to_text_with,
    save_record, save_record_with,
};
pub use registry::{descriptor, Record};
pub use report::{FieldIssue, IssueKind, MarshalContext, MarshalReport};
