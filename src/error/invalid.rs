//! Validation error types.
//!
//! [`Invalid`] is a single validation failure with full context;
//! [`MultipleInvalid`] is a non-empty, flat aggregate of concurrent
//! failures. Both are enriched as they propagate up the validator tree:
//! parents fill in fields the deeper error left empty, and never overwrite
//! populated ones.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use stillwater::prelude::*;

use crate::path::Path;
use crate::schema::Schema;
use crate::value::Value;

/// A single validation error with full context.
///
/// `Invalid` captures everything relevant about one failure:
/// - **path**: where in the input the failure occurred
/// - **message**: the human-readable description (canonical strings such as
///   `"Wrong type"` are stable and safe to match on)
/// - **expected**: what the schema wanted, rendered to text
/// - **provided**: what the input actually held, rendered to text
/// - **validator**: the schema expression that failed, for debugging
/// - **info**: free-form extension data
///
/// # Example
///
/// ```rust
/// use gauntlet::{Invalid, Path};
///
/// let error = Invalid::new("Invalid value")
///     .with_path(Path::root().push_key("age"))
///     .with_expected("18")
///     .with_provided("17");
///
/// assert_eq!(error.message, "Invalid value");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Invalid {
    /// The path to the value that failed validation.
    pub path: Path,
    /// Human-readable error message.
    pub message: String,
    /// Description of what was expected.
    pub expected: Option<String>,
    /// The value that was actually provided (rendered as text).
    pub provided: Option<String>,
    /// The schema expression that failed.
    pub validator: Option<Schema>,
    /// Extension data attached by validators.
    pub info: IndexMap<String, Value>,
}

impl Invalid {
    /// Creates a new error with the given message, rooted at the top of
    /// the input. Use the `with_*` builders to add context.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            path: Path::root(),
            message: message.into(),
            expected: None,
            provided: None,
            validator: None,
            info: IndexMap::new(),
        }
    }

    /// Sets the path and returns self for chaining.
    pub fn with_path(mut self, path: Path) -> Self {
        self.path = path;
        self
    }

    /// Sets the expected description and returns self for chaining.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Sets the provided rendering and returns self for chaining.
    pub fn with_provided(mut self, provided: impl Into<String>) -> Self {
        self.provided = Some(provided.into());
        self
    }

    /// Sets the failed schema expression and returns self for chaining.
    pub fn with_validator(mut self, validator: Schema) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Attaches an info entry and returns self for chaining.
    pub fn with_info(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.info.insert(key.into(), value.into());
        self
    }

    /// Replaces the message unconditionally.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Fills the expected description only if it is currently empty.
    pub fn or_expected(mut self, expected: &str) -> Self {
        if self.expected.is_none() {
            self.expected = Some(expected.to_string());
        }
        self
    }

    /// Fills the provided rendering only if it is currently empty.
    pub fn or_provided(mut self, provided: &str) -> Self {
        if self.provided.is_none() {
            self.provided = Some(provided.to_string());
        }
        self
    }

    /// Fills the failed schema only if it is currently empty.
    pub fn or_validator(mut self, validator: &Schema) -> Self {
        if self.validator.is_none() {
            self.validator = Some(validator.clone());
        }
        self
    }

    /// Returns the error re-rooted under `prefix`.
    ///
    /// Propagation never discards deeper path information; the prefix is
    /// prepended in front of whatever the error already recorded.
    pub fn prefixed(mut self, prefix: &Path) -> Self {
        self.path = self.path.prefixed(prefix);
        self
    }

    /// Renders the error as a JSON report object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "message": self.message,
            "expected": self.expected,
            "provided": self.provided,
            "path": self.path.to_json(),
        })
    }
}

impl Display for Invalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_root() {
            "(root)".to_string()
        } else {
            self.path.to_string()
        };

        write!(f, "{}: {}", path, self.message)?;

        if let Some(ref expected) = self.expected {
            write!(f, " (expected: {})", expected)?;
        }
        if let Some(ref provided) = self.provided {
            write!(f, " (provided: {})", provided)?;
        }

        Ok(())
    }
}

impl std::error::Error for Invalid {}

// Invalid must stay shareable across threads: all fields are owned types
// and callables are Arc'd Send + Sync closures.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Invalid>();
    assert_sync::<Invalid>();
};

/// A non-empty, flat collection of validation errors.
///
/// `MultipleInvalid` wraps a `NonEmptyVec<Invalid>`, guaranteeing at least
/// one member. Members are always single errors — aggregates cannot nest,
/// so flattening is structural, not a runtime convention.
///
/// # Combining Errors
///
/// `MultipleInvalid` implements `Semigroup`, which is what lets sequence
/// and mapping validators accumulate failures across children instead of
/// short-circuiting:
///
/// ```rust
/// use gauntlet::{Invalid, MultipleInvalid};
/// use stillwater::prelude::*;
///
/// let a = MultipleInvalid::single(Invalid::new("Invalid value"));
/// let b = MultipleInvalid::single(Invalid::new("Wrong type"));
/// assert_eq!(a.combine(b).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MultipleInvalid(NonEmptyVec<Invalid>);

impl MultipleInvalid {
    /// Creates an aggregate containing a single error.
    pub fn single(error: Invalid) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates an aggregate from a non-empty vec of errors.
    pub fn from_non_empty(errors: NonEmptyVec<Invalid>) -> Self {
        Self(errors)
    }

    /// Creates an aggregate from a `Vec<Invalid>`.
    ///
    /// # Panics
    ///
    /// Panics if the provided vec is empty.
    pub fn from_vec(errors: Vec<Invalid>) -> Self {
        Self(NonEmptyVec::from_vec(errors).expect("MultipleInvalid requires at least one error"))
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false since this collection is guaranteed non-empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &Invalid> {
        self.0.iter()
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &Invalid {
        self.0.head()
    }

    /// Converts this collection into a `Vec<Invalid>`.
    pub fn into_vec(self) -> Vec<Invalid> {
        self.0.into_vec()
    }

    /// Returns all errors at the specified path.
    pub fn at_path(&self, path: &Path) -> Vec<&Invalid> {
        self.0.iter().filter(|e| &e.path == path).collect()
    }

    /// Re-roots every member under `prefix`.
    pub fn prefixed(self, prefix: &Path) -> Self {
        self.map(|e| e.prefixed(prefix))
    }

    /// Fills each member's expected description where empty.
    pub fn or_expected(self, expected: &str) -> Self {
        self.map(|e| e.or_expected(expected))
    }

    /// Fills each member's provided rendering where empty.
    pub fn or_provided(self, provided: &str) -> Self {
        self.map(|e| e.or_provided(provided))
    }

    /// Fills each member's failed schema where empty.
    pub fn or_validator(self, validator: &Schema) -> Self {
        self.map(|e| e.or_validator(validator))
    }

    /// Replaces each member's message unconditionally.
    pub fn with_message(self, message: &str) -> Self {
        self.map(|e| e.with_message(message))
    }

    fn map(self, f: impl FnMut(Invalid) -> Invalid) -> Self {
        Self::from_vec(self.0.into_vec().into_iter().map(f).collect())
    }

    /// Renders the errors as a JSON array of report objects.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(self.iter().map(Invalid::to_json).collect())
    }
}

impl Semigroup for MultipleInvalid {
    fn combine(self, other: Self) -> Self {
        MultipleInvalid(self.0.combine(other.0))
    }
}

impl Display for MultipleInvalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for MultipleInvalid {}

impl IntoIterator for MultipleInvalid {
    type Item = Invalid;
    type IntoIter = std::vec::IntoIter<Invalid>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl From<Invalid> for MultipleInvalid {
    fn from(error: Invalid) -> Self {
        MultipleInvalid::single(error)
    }
}

/// The failure type returned to callers of
/// [`Validator::apply`](crate::Validator::apply).
///
/// A lone fault surfaces as [`Error::Invalid`]; two or more concurrent
/// faults surface as [`Error::Multiple`]. An aggregate of one never
/// escapes — it is unwrapped at the boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A single validation fault.
    #[error(transparent)]
    Invalid(#[from] Invalid),

    /// Two or more concurrent validation faults.
    #[error(transparent)]
    Multiple(MultipleInvalid),
}

impl Error {
    /// Wraps an accumulated error set, unwrapping one-element aggregates.
    pub fn from_errors(errors: MultipleInvalid) -> Self {
        if errors.len() == 1 {
            Error::Invalid(errors.into_vec().into_iter().next().expect("non-empty"))
        } else {
            Error::Multiple(errors)
        }
    }

    /// A flat view of the contained errors.
    pub fn errors(&self) -> Vec<&Invalid> {
        match self {
            Error::Invalid(e) => vec![e],
            Error::Multiple(m) => m.iter().collect(),
        }
    }

    /// The number of contained errors.
    pub fn len(&self) -> usize {
        match self {
            Error::Invalid(_) => 1,
            Error::Multiple(m) => m.len(),
        }
    }

    /// Always false: there is at least one error.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Renders the error(s) as a JSON array of report objects.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Error::Invalid(e) => serde_json::Value::Array(vec![e.to_json()]),
            Error::Multiple(m) => m.to_json(),
        }
    }
}
