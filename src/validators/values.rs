//! Membership and size checks.

use crate::error::Invalid;
use crate::schema::{Callable, CallableError};
use crate::value::Value;

/// The input must equal one of the allowed values.
pub fn one_of(allowed: impl IntoIterator<Item = Value>) -> Callable {
    let allowed: Vec<Value> = allowed.into_iter().collect();
    let name = format!(
        "In({})",
        allowed
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",")
    );
    Callable::new(name, move |value| {
        if allowed.contains(&value) {
            Ok(value)
        } else {
            Err(CallableError::Invalid(
                Invalid::new("Unsupported value").with_provided(value.to_string()),
            ))
        }
    })
}

/// Bounds the element count of any sized value (strings, binary strings,
/// sequences, mappings). Pass `None` to leave a side open.
pub fn length(min: impl Into<Option<usize>>, max: impl Into<Option<usize>>) -> Callable {
    let min = min.into();
    let max = max.into();
    let name = format!(
        "Length({}..{})",
        min.map(|m| m.to_string()).unwrap_or_default(),
        max.map(|m| m.to_string()).unwrap_or_default(),
    );
    Callable::new(name, move |value| {
        let Some(len) = value.len() else {
            return Err(CallableError::Invalid(
                Invalid::new("Input is not a collection")
                    .with_expected("Collection")
                    .with_provided(value.type_name()),
            ));
        };
        if let Some(min) = min {
            if len < min {
                return Err(CallableError::Invalid(
                    Invalid::new(format!("Too short ({} is the least)", min))
                        .with_expected(min.to_string())
                        .with_provided(len.to_string()),
                ));
            }
        }
        if let Some(max) = max {
            if len > max {
                return Err(CallableError::Invalid(
                    Invalid::new(format!("Too long ({} is the most)", max))
                        .with_expected(max.to_string())
                        .with_provided(len.to_string()),
                ));
            }
        }
        Ok(value)
    })
}
