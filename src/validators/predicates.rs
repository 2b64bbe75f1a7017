//! Combinators and key-group predicates.

use crate::error::{Error, Invalid, MultipleInvalid};
use crate::path::Path;
use crate::schema::{Callable, CallableError, Schema, INVALID_VALUE, NO_VALUE, REQUIRED_KEY};
use crate::validator::Validator;
use crate::value::Value;

/// At least one alternative must match; the first match's cleaned value
/// wins. Named `Any(a|b|..)` after its alternatives.
pub fn any_of(alternatives: impl IntoIterator<Item = Schema>) -> Callable {
    let validators: Vec<Validator> = alternatives.into_iter().map(Validator::new).collect();
    let name = format!(
        "Any({})",
        validators
            .iter()
            .map(|v| v.name())
            .collect::<Vec<_>>()
            .join("|")
    );
    Callable::new(name, move |value| {
        for validator in &validators {
            if let Ok(cleaned) = validator.apply(&value) {
                return Ok(cleaned);
            }
        }
        Err(CallableError::Invalid(
            Invalid::new(INVALID_VALUE).with_provided(value.to_string()),
        ))
    })
}

/// Every step must pass; cleaned values chain from one step into the
/// next. The first failing step's errors propagate unchanged.
pub fn all_of(steps: impl IntoIterator<Item = Schema>) -> Callable {
    let validators: Vec<Validator> = steps.into_iter().map(Validator::new).collect();
    let name = format!(
        "All({})",
        validators
            .iter()
            .map(|v| v.name())
            .collect::<Vec<_>>()
            .join(" & ")
    );
    Callable::new(name, move |value| {
        let mut current = value;
        for validator in &validators {
            current = validator.apply(&current).map_err(CallableError::from)?;
        }
        Ok(current)
    })
}

/// The value must match none of the forbidden schemas.
pub fn neither(forbidden: impl IntoIterator<Item = Schema>) -> Callable {
    let validators: Vec<Validator> = forbidden.into_iter().map(Validator::new).collect();
    let name = format!(
        "Neither({})",
        validators
            .iter()
            .map(|v| v.name())
            .collect::<Vec<_>>()
            .join(",")
    );
    Callable::new(name, move |value| {
        for validator in &validators {
            if validator.apply(&value).is_ok() {
                return Err(CallableError::Invalid(
                    Invalid::new("Value not allowed")
                        .with_expected(format!("Not({})", validator.name()))
                        .with_provided(value.to_string()),
                ));
            }
        }
        Ok(value)
    })
}

/// Null passes; anything else validates against the inner schema. Named
/// after the inner schema with a `?` suffix.
pub fn maybe(schema: impl Into<Schema>) -> Callable {
    let validator = Validator::new(schema);
    let name = format!("{}?", validator.name());
    Callable::new(name, move |value| {
        if matches!(value, Value::Null) {
            return Ok(Value::Null);
        }
        validator.apply(&value).map_err(CallableError::from)
    })
}

/// All-or-nothing key group, for `Entire` position: either every listed
/// key is present in the mapping or none is.
pub fn inclusive(keys: impl IntoIterator<Item = impl Into<String>>) -> Callable {
    let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
    let name = format!("Inclusive({})", keys.join(","));
    Callable::new(name, move |value| {
        let map = match &value {
            Value::Map(map) => map,
            _ => return Err(CallableError::Message("Input is not a mapping".to_string())),
        };

        let present = keys
            .iter()
            .filter(|k| map.contains_key(&Value::Str((*k).clone())))
            .count();
        if present == 0 || present == keys.len() {
            return Ok(value);
        }

        let errors: Vec<Invalid> = keys
            .iter()
            .filter(|k| !map.contains_key(&Value::Str((*k).clone())))
            .map(|k| {
                Invalid::new(REQUIRED_KEY)
                    .with_expected(k.as_str())
                    .with_provided(NO_VALUE)
                    .with_path(Path::from_key(k.as_str()))
            })
            .collect();
        Err(Error::from_errors(MultipleInvalid::from_vec(errors)).into())
    })
}

/// Mutually exclusive key group, for `Entire` position: exactly one of
/// the listed keys must be present.
pub fn exclusive(keys: impl IntoIterator<Item = impl Into<String>>) -> Callable {
    exclusive_group(keys, true)
}

/// Like [`exclusive`], but the whole group may also be absent.
pub fn exclusive_optional(keys: impl IntoIterator<Item = impl Into<String>>) -> Callable {
    exclusive_group(keys, false)
}

fn exclusive_group(keys: impl IntoIterator<Item = impl Into<String>>, required: bool) -> Callable {
    let mut keys: Vec<String> = keys.into_iter().map(Into::into).collect();
    keys.sort();
    let name = format!("Exclusive({})", keys.join(","));
    let expected = name.clone();
    Callable::new(name, move |value| {
        let map = match &value {
            Value::Map(map) => map,
            _ => return Err(CallableError::Message("Input is not a mapping".to_string())),
        };

        let present: Vec<&String> = keys
            .iter()
            .filter(|k| map.contains_key(&Value::Str((*k).clone())))
            .collect();
        match present.len() {
            0 if required => Err(CallableError::Invalid(
                Invalid::new("Choose one of the options")
                    .with_expected(expected.clone())
                    .with_provided(NO_VALUE),
            )),
            0 | 1 => Ok(value),
            _ => Err(CallableError::Invalid(
                Invalid::new("Choose one of the options, not multiple")
                    .with_expected(expected.clone())
                    .with_provided(
                        present
                            .iter()
                            .map(|k| k.as_str())
                            .collect::<Vec<_>>()
                            .join(","),
                    ),
            )),
        }
    })
}
