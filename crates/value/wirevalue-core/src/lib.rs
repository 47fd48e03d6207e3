//! wirevalue-core: dynamically typed value tree and its compact text codec.

pub mod coercion;
pub mod error;
pub mod json;
pub mod text;
pub mod value;

pub use error::{ParseError, ValueError};
pub use text::{parse, parse_array, parse_object, serialize, serialize_with, TextStyle};
pub use value::{GenericValue, Object, ValueKind};
