use wirevalue_core::{parse, serialize, GenericValue};
use wirevalue_wire::{from_wire, to_wire, WireKind, WireMessage, BINARY_PLACEHOLDER};

/// Replace every integer leaf with the double of the same value.
fn widen_integers(msg: &WireMessage) -> WireMessage {
    match msg {
        WireMessage::Integer(n) => WireMessage::Double(*n as f64),
        WireMessage::Array(items) => WireMessage::Array(items.iter().map(widen_integers).collect()),
        WireMessage::Object(map) => WireMessage::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), widen_integers(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn sample() -> WireMessage {
    WireMessage::object([
        ("n", WireMessage::Integer(5)),
        ("s", WireMessage::string("x")),
        (
            "a",
            WireMessage::array([WireMessage::Boolean(true), WireMessage::Null]),
        ),
    ])
}

#[test]
fn wire_roundtrip_preserves_values_but_not_integer_tags() {
    let w = sample();
    let back = to_wire(&from_wire(&w));
    assert_eq!(back, widen_integers(&w));
    assert_ne!(back, w, "integer leaf should come back as a double");

    let n = match &back {
        WireMessage::Object(map) => map.get("n").cloned(),
        _ => None,
    };
    assert_eq!(n.map(|m| m.kind()), Some(WireKind::Double));
}

#[test]
fn binary_blobs_always_become_the_placeholder() {
    for bytes in [vec![], vec![0u8], vec![0xde, 0xad, 0xbe, 0xef], vec![b'a'; 4096]] {
        assert_eq!(
            from_wire(&WireMessage::Binary(bytes)),
            GenericValue::from(BINARY_PLACEHOLDER)
        );
    }
}

#[test]
fn nested_binary_degrades_without_aborting_siblings() {
    let w = WireMessage::object([
        ("blob", WireMessage::Binary(vec![1, 2, 3])),
        ("ok", WireMessage::Integer(7)),
    ]);
    let v = from_wire(&w);
    assert_eq!(v.get("blob"), Some(&GenericValue::from(BINARY_PLACEHOLDER)));
    assert_eq!(v.get("ok"), Some(&GenericValue::Number(7.0)));
}

#[test]
fn deep_structures_survive_wire_and_text() {
    let w = WireMessage::object([(
        "l1",
        WireMessage::array([WireMessage::object([(
            "l3",
            WireMessage::array([WireMessage::object([(
                "l5",
                WireMessage::array([WireMessage::Double(0.5), WireMessage::Integer(-2)]),
            )])]),
        )])]),
    )]);
    let value = from_wire(&w);
    let text = serialize(&value);
    assert_eq!(text, r#"{"l1":[{"l3":[{"l5":[0.5,-2]}]}]}"#);
    let reparsed = parse(&text).expect("reparse");
    assert_eq!(to_wire(&reparsed), widen_integers(&w));
}

#[test]
fn every_generic_kind_maps_to_a_wire_kind() {
    let cases = [
        (GenericValue::Null, WireKind::Null),
        (GenericValue::from(false), WireKind::Boolean),
        (GenericValue::from(1.25), WireKind::Double),
        (GenericValue::from("t"), WireKind::String),
        (GenericValue::array([]), WireKind::Array),
        (GenericValue::object([("k", GenericValue::Null)]), WireKind::Object),
    ];
    for (value, kind) in cases {
        assert_eq!(to_wire(&value).kind(), kind, "{value:?}");
    }
}
