//! Scalar validators: literal equality, type checks, user callables.

use stillwater::Validation;

use crate::error::Invalid;
use crate::path::Path;
use crate::registry::type_name;
use crate::value::{Value, ValueType};
use crate::ValidationResult;

use super::compile::Compiled;
use super::{Callable, CallableError, INVALID_VALUE, WRONG_TYPE, WRONG_VALUE_TYPE};

/// Literal equality. The input must have the literal's type *and* equal
/// it; the two failures are reported distinctly.
pub(crate) fn apply_literal(
    node: &Compiled,
    literal: &Value,
    path: &Path,
    value: &Value,
) -> ValidationResult<Value> {
    if value.value_type() != literal.value_type() {
        return Validation::Failure(
            Invalid::new(WRONG_VALUE_TYPE)
                .with_expected(type_name(literal.value_type()))
                .with_provided(value.type_name())
                .with_path(path.clone())
                .with_validator(node.source().clone())
                .into(),
        );
    }
    if value != literal {
        return Validation::Failure(
            Invalid::new(INVALID_VALUE)
                .with_expected(literal.to_string())
                .with_provided(value.to_string())
                .with_path(path.clone())
                .with_validator(node.source().clone())
                .into(),
        );
    }
    Validation::Success(value.clone())
}

/// Instance-of check. Types are strict: booleans never satisfy the
/// integer type, binary strings never satisfy the unicode string type.
pub(crate) fn apply_type(
    node: &Compiled,
    expected: ValueType,
    path: &Path,
    value: &Value,
) -> ValidationResult<Value> {
    if value.value_type() != expected {
        return Validation::Failure(
            Invalid::new(WRONG_TYPE)
                .with_expected(type_name(expected))
                .with_provided(value.type_name())
                .with_path(path.clone())
                .with_validator(node.source().clone())
                .into(),
        );
    }
    Validation::Success(value.clone())
}

/// Invokes a user callable.
///
/// Structured errors coming back are enriched — empty fields get the
/// callable's name and the input's rendering, and inner paths (relative to
/// the callable's own root) are re-rooted under the current path. Plain
/// message failures are wrapped into a fresh error here. Panics are not
/// caught.
pub(crate) fn apply_callable(
    node: &Compiled,
    callable: &Callable,
    path: &Path,
    value: &Value,
) -> ValidationResult<Value> {
    match callable.invoke(value.clone()) {
        Ok(cleaned) => Validation::Success(cleaned),
        Err(CallableError::Invalid(error)) => Validation::Failure(
            error
                .or_expected(callable.name())
                .or_provided(&value.to_string())
                .or_validator(node.source())
                .prefixed(path)
                .into(),
        ),
        Err(CallableError::Multiple(errors)) => Validation::Failure(
            errors
                .or_expected(callable.name())
                .or_provided(&value.to_string())
                .or_validator(node.source())
                .prefixed(path),
        ),
        Err(CallableError::Message(message)) => Validation::Failure(
            Invalid::new(message)
                .with_expected(callable.name())
                .with_provided(value.to_string())
                .with_path(path.clone())
                .with_validator(node.source().clone())
                .into(),
        ),
    }
}
