//! Conversions between engine values and JSON.

use crate::value::{Map, Value};

/// Converts an engine value to JSON.
///
/// JSON is less expressive, so the conversion is lossy where it has to
/// be: tuples and sets become arrays, binary strings decode lossily to
/// text, non-string mapping keys are rendered with their display repr,
/// and non-finite floats become null.
pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::from(*i),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Bytes(b) => serde_json::Value::String(String::from_utf8_lossy(b).into_owned()),
        Value::Str(s) => serde_json::Value::String(s.clone()),
        Value::List(items) | Value::Tuple(items) => {
            serde_json::Value::Array(items.iter().map(to_json).collect())
        }
        Value::Set(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Map(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| {
                    let key = match k {
                        Value::Str(s) => s.clone(),
                        other => other.to_string(),
                    };
                    (key, to_json(v))
                })
                .collect(),
        ),
    }
}

/// Converts a JSON document into an engine value.
///
/// Numbers become integers when they are exact integers in range,
/// fractional numbers otherwise; objects become mappings with string keys.
pub fn from_json(value: &serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Value::Str(s.clone()),
        serde_json::Value::Array(items) => Value::List(items.iter().map(from_json).collect()),
        serde_json::Value::Object(map) => {
            let mut out = Map::new();
            for (k, v) in map {
                out.insert(Value::Str(k.clone()), from_json(v));
            }
            Value::Map(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::val;

    #[test]
    fn test_round_trip_plain_data() {
        let value = val!({ "name" => "A", "age" => 18, "tags" => ["x", "y"], "extra" => null });
        let json = to_json(&value);
        assert_eq!(from_json(&json), value);
    }

    #[test]
    fn test_lossy_kinds_flatten() {
        let value = Value::tuple_of([Value::Int(1), Value::Int(2)]);
        assert_eq!(to_json(&value), serde_json::json!([1, 2]));

        let mut map = Map::new();
        map.insert(Value::Int(100), Value::Bool(true));
        assert_eq!(
            to_json(&Value::Map(map)),
            serde_json::json!({ "100": true })
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(from_json(&serde_json::json!(1)), Value::Int(1));
        assert_eq!(from_json(&serde_json::json!(1.5)), Value::Float(1.5));
        assert_eq!(to_json(&Value::Float(1.5)), serde_json::json!(1.5));
    }
}
