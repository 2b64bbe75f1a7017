//! Numeric range checks and clamping.

use crate::error::Invalid;
use crate::schema::{Callable, CallableError};
use crate::value::Value;

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Int(i) => Some(*i as f64),
        Value::Float(f) => Some(*f),
        _ => None,
    }
}

fn not_a_number(value: &Value) -> CallableError {
    CallableError::Invalid(
        Invalid::new("Value should be a number")
            .with_expected("Number")
            .with_provided(value.type_name()),
    )
}

fn bound_repr(bound: &Option<Value>) -> String {
    bound.as_ref().map(|b| b.to_string()).unwrap_or_default()
}

/// The input must lie within `min..=max`.
pub fn range(min: impl Into<Value>, max: impl Into<Value>) -> Callable {
    bounded(Some(min.into()), Some(max.into()))
}

/// The input must be at least `min`.
pub fn at_least(min: impl Into<Value>) -> Callable {
    bounded(Some(min.into()), None)
}

/// The input must be at most `max`.
pub fn at_most(max: impl Into<Value>) -> Callable {
    bounded(None, Some(max.into()))
}

fn bounded(min: Option<Value>, max: Option<Value>) -> Callable {
    let name = format!("Range({}..{})", bound_repr(&min), bound_repr(&max));
    let min_bound = min.as_ref().and_then(as_number).zip(min.clone());
    let max_bound = max.as_ref().and_then(as_number).zip(max.clone());
    Callable::new(name, move |value| {
        let Some(number) = as_number(&value) else {
            return Err(not_a_number(&value));
        };
        if let Some((bound, repr)) = &min_bound {
            if number < *bound {
                return Err(CallableError::Invalid(
                    Invalid::new(format!("Value must be at least {}", repr))
                        .with_expected(repr.to_string())
                        .with_provided(value.to_string()),
                ));
            }
        }
        if let Some((bound, repr)) = &max_bound {
            if number > *bound {
                return Err(CallableError::Invalid(
                    Invalid::new(format!("Value must be at most {}", repr))
                        .with_expected(repr.to_string())
                        .with_provided(value.to_string()),
                ));
            }
        }
        Ok(value)
    })
}

/// Pulls out-of-range inputs back to the nearest bound instead of failing.
pub fn clamp(min: impl Into<Value>, max: impl Into<Value>) -> Callable {
    let min = min.into();
    let max = max.into();
    let name = format!("Clamp({}..{})", min, max);
    let min_bound = as_number(&min).zip(Some(min));
    let max_bound = as_number(&max).zip(Some(max));
    Callable::new(name, move |value| {
        let Some(number) = as_number(&value) else {
            return Err(not_a_number(&value));
        };
        if let Some((bound, replacement)) = &min_bound {
            if number < *bound {
                return Ok(replacement.clone());
            }
        }
        if let Some((bound, replacement)) = &max_bound {
            if number > *bound {
                return Ok(replacement.clone());
            }
        }
        Ok(value)
    })
}
