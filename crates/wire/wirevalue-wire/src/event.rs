//! Named event payloads handed to, or received from, the transport.
//!
//! The transport owns connections and dispatch; this type only carries the
//! event name, its namespace and the argument list in wire form.

use wirevalue_core::GenericValue;

use crate::codec::{from_wire, to_wire};
use crate::message::WireMessage;

pub const DEFAULT_NAMESPACE: &str = "/";

#[derive(Clone, Debug, PartialEq)]
pub struct WireEvent {
    pub name: String,
    pub namespace: String,
    pub args: Vec<WireMessage>,
}

impl WireEvent {
    pub fn new(name: impl Into<String>, args: Vec<WireMessage>) -> Self {
        Self {
            name: name.into(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            args,
        }
    }

    /// Event carrying a single generic value.
    pub fn from_value(name: impl Into<String>, value: &GenericValue) -> Self {
        Self::new(name, vec![to_wire(value)])
    }

    /// Event carrying a single string argument.
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, vec![WireMessage::String(text.into())])
    }

    /// Event carrying a raw binary argument.
    pub fn from_binary(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(name, vec![WireMessage::Binary(bytes.into())])
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Decode every argument into a generic value.
    pub fn values(&self) -> Vec<GenericValue> {
        self.args.iter().map(from_wire).collect()
    }

    /// First argument as a generic value, or `Null` when there are none.
    pub fn first_value(&self) -> GenericValue {
        self.args.first().map(from_wire).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::BINARY_PLACEHOLDER;

    #[test]
    fn defaults_to_root_namespace() {
        let ev = WireEvent::from_text("chat", "hello");
        assert_eq!(ev.namespace, "/");
        assert_eq!(ev.first_value(), GenericValue::from("hello"));
        let ev = ev.in_namespace("/rooms");
        assert_eq!(ev.namespace, "/rooms");
    }

    #[test]
    fn value_payload_goes_through_the_codec() {
        let value = GenericValue::object([("n", GenericValue::from(2))]);
        let ev = WireEvent::from_value("update", &value);
        assert_eq!(
            ev.args,
            vec![WireMessage::object([("n", WireMessage::Double(2.0))])]
        );
        assert_eq!(ev.values(), vec![value]);
    }

    #[test]
    fn binary_payload_stays_raw_on_the_wire() {
        let ev = WireEvent::from_binary("blob", vec![1u8, 2, 3]);
        assert_eq!(ev.args[0], WireMessage::Binary(vec![1, 2, 3]));
        assert_eq!(ev.first_value(), GenericValue::from(BINARY_PLACEHOLDER));
    }

    #[test]
    fn empty_event_decodes_to_null() {
        assert!(WireEvent::new("ping", Vec::new()).first_value().is_null());
    }
}
