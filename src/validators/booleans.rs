//! Truthiness checks and boolean coercion.

use crate::error::Invalid;
use crate::schema::{Callable, CallableError};
use crate::value::Value;

/// The input must be truthy; it passes through untouched.
pub fn truthy() -> Callable {
    Callable::new("Truthy", |value| {
        if value.is_truthy() {
            Ok(value)
        } else {
            Err(CallableError::Invalid(
                Invalid::new("Empty value")
                    .with_expected("Truthy")
                    .with_provided(value.to_string()),
            ))
        }
    })
}

/// The input must be falsy; it passes through untouched.
pub fn falsy() -> Callable {
    Callable::new("Falsy", |value| {
        if !value.is_truthy() {
            Ok(value)
        } else {
            Err(CallableError::Invalid(
                Invalid::new("Non-empty value")
                    .with_expected("Falsy")
                    .with_provided(value.to_string()),
            ))
        }
    })
}

/// Coerces human boolean spellings to a real boolean.
///
/// Booleans pass through; null is false; integers are compared to zero;
/// the strings `y`/`yes`/`true`/`on` and `n`/`no`/`false`/`off` convert
/// case-insensitively. Everything else is an error.
pub fn boolean() -> Callable {
    Callable::new("Boolean", |value| match &value {
        Value::Bool(_) => Ok(value),
        Value::Null => Ok(Value::Bool(false)),
        Value::Int(i) => Ok(Value::Bool(*i != 0)),
        Value::Str(s) => match s.to_lowercase().as_str() {
            "y" | "yes" | "true" | "on" => Ok(Value::Bool(true)),
            "n" | "no" | "false" | "off" => Ok(Value::Bool(false)),
            _ => Err(CallableError::Invalid(
                Invalid::new("Wrong boolean value")
                    .with_expected("Boolean")
                    .with_provided(s.clone()),
            )),
        },
        other => Err(CallableError::Invalid(
            Invalid::new("Wrong boolean value type")
                .with_expected("Boolean")
                .with_provided(other.type_name()),
        )),
    })
}
