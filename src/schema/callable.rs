//! User callables: opaque validation functions.
//!
//! A callable is the engine's escape hatch — any function that takes a
//! value and either returns a cleaned value or signals a failure. The
//! engine treats callables as black boxes: it invokes them, enriches
//! whatever errors come back with the callable's name and the input's
//! rendering, and re-roots inner paths under the current location.

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Invalid, MultipleInvalid};
use crate::value::Value;

/// How a callable signals failure.
///
/// Anything else a callable does — panicking included — is a programmer
/// bug and is deliberately not caught.
#[derive(Debug, Clone)]
pub enum CallableError {
    /// A structured engine error. Propagated after enrichment: empty
    /// fields are filled with the callable's name and the input's repr,
    /// and the error's path is prefixed with the current location.
    Invalid(Invalid),
    /// Several structured errors, e.g. from a nested validator.
    Multiple(MultipleInvalid),
    /// A plain conversion/value failure. Wrapped into an [`Invalid`] whose
    /// message is the given text.
    Message(String),
}

impl From<Invalid> for CallableError {
    fn from(error: Invalid) -> Self {
        CallableError::Invalid(error)
    }
}

impl From<MultipleInvalid> for CallableError {
    fn from(errors: MultipleInvalid) -> Self {
        CallableError::Multiple(errors)
    }
}

impl From<Error> for CallableError {
    fn from(error: Error) -> Self {
        match error {
            Error::Invalid(e) => CallableError::Invalid(e),
            Error::Multiple(m) => CallableError::Multiple(m),
        }
    }
}

impl From<String> for CallableError {
    fn from(message: String) -> Self {
        CallableError::Message(message)
    }
}

impl From<&str> for CallableError {
    fn from(message: &str) -> Self {
        CallableError::Message(message.to_string())
    }
}

/// A named validation function.
///
/// The name shows up in generated validator names and, via enrichment, in
/// the `expected` field of errors the callable raises without one.
///
/// # Example
///
/// ```rust
/// use gauntlet::{Callable, Validator, Value, val};
///
/// let intify = Callable::new("intify()", |v| match v {
///     Value::Int(i) => Ok(Value::Int(i)),
///     Value::Str(s) => s
///         .parse::<i64>()
///         .map(Value::Int)
///         .map_err(|e| e.to_string().into()),
///     other => Err(format!("invalid literal for int(): {}", other).into()),
/// });
///
/// let validator = Validator::new(intify);
/// assert_eq!(validator.apply(&val!("12")).unwrap(), val!(12));
/// ```
#[derive(Clone)]
pub struct Callable {
    name: String,
    func: Arc<dyn Fn(Value) -> Result<Value, CallableError> + Send + Sync>,
}

impl Callable {
    /// Wraps a function under the given name.
    pub fn new(
        name: impl Into<String>,
        func: impl Fn(Value) -> Result<Value, CallableError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// The callable's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the same function under a different name.
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Invokes the wrapped function.
    pub fn invoke(&self, value: Value) -> Result<Value, CallableError> {
        (self.func)(value)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Callable {
    /// Function identity plus name: two callables are equal when they wrap
    /// the same function object under the same name.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && std::ptr::eq(
                Arc::as_ptr(&self.func) as *const (),
                Arc::as_ptr(&other.func) as *const (),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoke_and_rename() {
        let double = Callable::new("double()", |v| match v {
            Value::Int(i) => Ok(Value::Int(i * 2)),
            _ => Err("not a number".into()),
        });

        assert_eq!(double.invoke(Value::Int(2)).unwrap(), Value::Int(4));
        assert!(matches!(
            double.invoke(Value::Null),
            Err(CallableError::Message(_))
        ));

        let renamed = double.clone().renamed("twice()");
        assert_eq!(renamed.name(), "twice()");
    }

    #[test]
    fn test_equality_is_identity() {
        let a = Callable::new("f()", |v| Ok(v));
        let b = a.clone();
        let c = Callable::new("f()", |v| Ok(v));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
