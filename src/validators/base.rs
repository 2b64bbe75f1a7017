//! Message overrides and predicate wrappers.

use crate::error::{Error, Invalid};
use crate::schema::{Callable, CallableError, Schema};
use crate::validator::Validator;
use crate::value::Value;

/// Wraps a schema and replaces the message of every error it reports.
///
/// The rest of each error — path, expected, provided — is left intact, so
/// reports stay precise while reading the way the application wants.
pub fn msg(schema: impl Into<Schema>, message: impl Into<String>) -> Callable {
    let message = message.into();
    let validator = Validator::new(schema);
    let name = validator.name().to_string();
    Callable::new(name, move |value| match validator.apply(&value) {
        Ok(cleaned) => Ok(cleaned),
        Err(Error::Invalid(e)) => Err(CallableError::Invalid(e.with_message(message.as_str()))),
        Err(Error::Multiple(m)) => Err(CallableError::Multiple(m.with_message(message.as_str()))),
    })
}

/// Validates with a boolean predicate; the input passes through untouched.
pub fn check(
    predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    message: impl Into<String>,
    expected: impl Into<String>,
) -> Callable {
    let message = message.into();
    let expected = expected.into();
    let name = expected.clone();
    Callable::new(name, move |value| {
        if predicate(&value) {
            Ok(value)
        } else {
            Err(CallableError::Invalid(
                Invalid::new(message.clone()).with_expected(expected.clone()),
            ))
        }
    })
}

/// Like [`check`], but the error's expected field comes from the name, the
/// way a bare named function reports.
pub fn truth(
    name: impl Into<String>,
    predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    message: impl Into<String>,
) -> Callable {
    let message = message.into();
    Callable::new(name, move |value| {
        if predicate(&value) {
            Ok(value)
        } else {
            Err(CallableError::Invalid(Invalid::new(message.clone())))
        }
    })
}
