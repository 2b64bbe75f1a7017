//! String transforms and format checks.

use regex::Regex;

use crate::error::Invalid;
use crate::schema::{Callable, CallableError, WRONG_VALUE_TYPE};
use crate::value::Value;

fn wrong_type(value: &Value) -> CallableError {
    CallableError::Invalid(
        Invalid::new(WRONG_VALUE_TYPE)
            .with_expected("String")
            .with_provided(value.type_name()),
    )
}

fn transform(name: &'static str, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Callable {
    Callable::new(name, move |value| match &value {
        Value::Str(s) => Ok(Value::Str(f(s))),
        other => Err(wrong_type(other)),
    })
}

/// Lowercases the input string.
pub fn lower() -> Callable {
    transform("Lower", |s| s.to_lowercase())
}

/// Uppercases the input string.
pub fn upper() -> Callable {
    transform("Upper", |s| s.to_uppercase())
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Capitalizes the first character, lowercases the rest.
pub fn capitalize() -> Callable {
    transform("Capitalize", capitalize_word)
}

/// Capitalizes every space-separated word.
pub fn title() -> Callable {
    transform("Title", |s| {
        s.split(' ')
            .map(capitalize_word)
            .collect::<Vec<_>>()
            .join(" ")
    })
}

/// The input must be a non-empty string. Whitespace counts as content.
pub fn not_empty() -> Callable {
    Callable::new("not empty", |value| match &value {
        Value::Str(s) if s.is_empty() => Err(CallableError::Invalid(
            Invalid::new("Can't be empty")
                .with_expected("not empty")
                .with_provided(""),
        )),
        Value::Str(_) => Ok(value),
        other => Err(CallableError::Invalid(
            Invalid::new("Not a string")
                .with_expected("String")
                .with_provided(other.type_name()),
        )),
    })
}

/// The input string must match the pattern. `expected` is the
/// human-readable description used in names and errors.
pub fn matches(pattern: &str, expected: impl Into<String>) -> Result<Callable, regex::Error> {
    let re = Regex::new(pattern)?;
    let expected = expected.into();
    let name = expected.clone();
    Ok(Callable::new(name, move |value| match &value {
        Value::Str(s) => {
            if re.is_match(s) {
                Ok(value.clone())
            } else {
                Err(CallableError::Invalid(
                    Invalid::new("Wrong format")
                        .with_expected(expected.clone())
                        .with_provided(s.clone()),
                ))
            }
        }
        other => Err(wrong_type(other)),
    }))
}

/// Rewrites matching input through the replacement template (`$1`-style
/// group references); non-matching input fails with `"Wrong format"`.
pub fn replace(
    pattern: &str,
    replacement: impl Into<String>,
    expected: impl Into<String>,
) -> Result<Callable, regex::Error> {
    let re = Regex::new(pattern)?;
    let replacement = replacement.into();
    let expected = expected.into();
    let name = expected.clone();
    Ok(Callable::new(name, move |value| match &value {
        Value::Str(s) => {
            if re.is_match(s) {
                Ok(Value::Str(re.replace(s, replacement.as_str()).into_owned()))
            } else {
                Err(CallableError::Invalid(
                    Invalid::new("Wrong format")
                        .with_expected(expected.clone())
                        .with_provided(s.clone()),
                ))
            }
        }
        other => Err(wrong_type(other)),
    }))
}
