//! Type membership and coercion.

use crate::error::Invalid;
use crate::registry::type_name;
use crate::schema::{Callable, CallableError, INVALID_VALUE, WRONG_TYPE};
use crate::value::{Value, ValueType};

/// Instance-of check against one or more types.
///
/// Unlike a bare type tag in a schema, this accepts any of several types
/// in one validator.
pub fn type_of(types: impl IntoIterator<Item = ValueType>) -> Callable {
    let types: Vec<ValueType> = types.into_iter().collect();
    let name = types
        .iter()
        .map(|t| type_name(*t))
        .collect::<Vec<_>>()
        .join("|");
    let expected = name.clone();
    Callable::new(name, move |value| {
        if types.contains(&value.value_type()) {
            Ok(value)
        } else {
            Err(CallableError::Invalid(
                Invalid::new(WRONG_TYPE)
                    .with_expected(expected.clone())
                    .with_provided(value.type_name()),
            ))
        }
    })
}

/// Converts the input to the target type where a sensible conversion
/// exists. Named `*<Type>` to signal the coercion.
pub fn coerce(target: ValueType) -> Callable {
    let name = format!("*{}", type_name(target));
    Callable::new(name, move |value| match convert(&value, target) {
        Some(converted) => Ok(converted),
        None => Err(CallableError::Invalid(
            Invalid::new(INVALID_VALUE).with_provided(value.to_string()),
        )),
    })
}

fn convert(value: &Value, target: ValueType) -> Option<Value> {
    if value.value_type() == target {
        return Some(value.clone());
    }
    match target {
        ValueType::Int => match value {
            Value::Bool(b) => Some(Value::Int(*b as i64)),
            Value::Float(f) if f.is_finite() => Some(Value::Int(*f as i64)),
            Value::Str(s) => s.trim().parse::<i64>().ok().map(Value::Int),
            Value::Bytes(b) => std::str::from_utf8(b)
                .ok()?
                .trim()
                .parse::<i64>()
                .ok()
                .map(Value::Int),
            _ => None,
        },
        ValueType::Float => match value {
            Value::Bool(b) => Some(Value::Float(if *b { 1.0 } else { 0.0 })),
            Value::Int(i) => Some(Value::Float(*i as f64)),
            Value::Str(s) => s.trim().parse::<f64>().ok().map(Value::Float),
            _ => None,
        },
        ValueType::Str => Some(Value::Str(value.to_string())),
        ValueType::Bytes => match value {
            Value::Str(s) => Some(Value::Bytes(s.clone().into_bytes())),
            _ => None,
        },
        ValueType::Bool => Some(Value::Bool(value.is_truthy())),
        _ => None,
    }
}
