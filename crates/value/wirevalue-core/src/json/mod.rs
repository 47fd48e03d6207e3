use serde_json::{Map, Number, Value as JsonValue};

use crate::value::{GenericValue, Object};

/// Convert a `serde_json::Value` into a [`GenericValue`]. Total: every JSON
/// number is widened to `f64`.
pub fn from_json(value: JsonValue) -> GenericValue {
    match value {
        JsonValue::Null => GenericValue::Null,
        JsonValue::Bool(b) => GenericValue::Boolean(b),
        JsonValue::Number(n) => GenericValue::Number(n.as_f64().unwrap_or(0.0)),
        JsonValue::String(s) => GenericValue::String(s),
        JsonValue::Array(arr) => GenericValue::Array(arr.into_iter().map(from_json).collect()),
        JsonValue::Object(obj) => {
            let mut map = Object::with_capacity(obj.len());
            for (key, val) in obj {
                map.insert(key, from_json(val));
            }
            GenericValue::Object(map)
        }
    }
}

/// Convert a [`GenericValue`] into a `serde_json::Value`. Non-finite numbers
/// have no JSON form and become `null`.
pub fn to_json(value: &GenericValue) -> JsonValue {
    match value {
        GenericValue::Null => JsonValue::Null,
        GenericValue::Boolean(b) => JsonValue::Bool(*b),
        GenericValue::Number(n) => Number::from_f64(*n)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        GenericValue::String(s) => JsonValue::String(s.clone()),
        GenericValue::Array(items) => JsonValue::Array(items.iter().map(to_json).collect()),
        GenericValue::Object(map) => {
            let mut obj = Map::new();
            for (key, val) in map.iter() {
                obj.insert(key.clone(), to_json(val));
            }
            JsonValue::Object(obj)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_numbers_collapse_to_f64() {
        let v = from_json(json!({ "i": 5, "f": 2.5, "neg": -1 }));
        assert_eq!(v.get("i"), Some(&GenericValue::Number(5.0)));
        assert_eq!(v.get("f"), Some(&GenericValue::Number(2.5)));
        assert_eq!(v.get("neg"), Some(&GenericValue::Number(-1.0)));
    }

    #[test]
    fn nested_json_roundtrip() {
        let source = json!({
            "name": "sensor",
            "tags": ["a", "b"],
            "child": { "flag": true, "none": null }
        });
        let v = from_json(source.clone());
        let back = to_json(&v);
        assert_eq!(back["name"], "sensor");
        assert_eq!(back["tags"][1], "b");
        assert_eq!(back["child"]["flag"], true);
        assert!(back["child"]["none"].is_null());
    }

    #[test]
    fn non_finite_becomes_null() {
        assert!(to_json(&GenericValue::Number(f64::NAN)).is_null());
    }
}
