//! wirevalue-wire: GenericValue <-> transport wire message codec.

pub mod codec;
pub mod event;
pub mod message;

pub use codec::{from_wire, to_wire, to_wire_opt, BINARY_PLACEHOLDER, MAX_WIRE_DEPTH};
pub use event::WireEvent;
pub use message::{WireKind, WireMessage, WireObject};
