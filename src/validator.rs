//! The public validation surface.
//!
//! [`Validator`] compiles a schema expression once and applies it to any
//! number of inputs. Compiled validators are immutable and shareable
//! across threads; each application allocates its own output and errors.

use std::fmt::{self, Display};

use stillwater::Validation;

use crate::error::Error;
use crate::path::Path;
use crate::schema::{Compiled, Marker, MarkerKind, Schema};
use crate::value::Value;

/// The marker applied to mapping keys declared without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultKeys {
    /// Bare keys must be present (the default).
    #[default]
    Required,
    /// Bare keys may be absent.
    Optional,
}

impl DefaultKeys {
    pub(crate) fn marker_kind(self) -> MarkerKind {
        match self {
            DefaultKeys::Required => MarkerKind::Required,
            DefaultKeys::Optional => MarkerKind::Optional,
        }
    }
}

/// Compile-time options, applied to every mapping in the schema tree.
///
/// `extra_keys` is the value schema of the implicit catch-all entry used
/// when a mapping template declares no `Extra` entry of its own: the
/// default rejects unknown keys; [`Marker::remove_value`] drops them
/// silently; [`Marker::allow`] passes them through; any other schema
/// validates their values.
#[derive(Debug, Clone)]
pub struct Options {
    pub default_keys: DefaultKeys,
    pub extra_keys: Schema,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_keys: DefaultKeys::Required,
            extra_keys: Schema::Marker(Box::new(Marker::reject_value())),
        }
    }
}

/// A compiled, reusable validator.
///
/// # Example
///
/// ```rust
/// use gauntlet::{Validator, ValueType, Schema, val};
///
/// let validator = Validator::new(
///     Schema::mapping()
///         .entry("name", ValueType::Str)
///         .entry("sex", "f")
///         .build(),
/// );
///
/// let cleaned = validator
///     .apply(&val!({ "name" => "A", "sex" => "f" }))
///     .unwrap();
/// assert_eq!(cleaned, val!({ "name" => "A", "sex" => "f" }));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Validator {
    compiled: Compiled,
}

impl Validator {
    /// Compiles a schema expression with default options.
    pub fn new(schema: impl Into<Schema>) -> Self {
        Self::with_options(schema, Options::default())
    }

    /// Compiles a schema expression with explicit options.
    pub fn with_options(schema: impl Into<Schema>, options: Options) -> Self {
        let schema = schema.into();
        Self {
            compiled: Compiled::build(&schema, &options),
        }
    }

    /// Validates an input, returning the cleaned value or the error(s).
    ///
    /// The cleaned value may differ from the input through coercions by
    /// user callables, `Remove`d elements and keys, and key rewrites.
    /// When two input keys clean to the same output key, the later one in
    /// input order wins.
    pub fn apply(&self, value: &Value) -> Result<Value, Error> {
        match self.compiled.apply(&Path::root(), value) {
            Validation::Success(cleaned) => Ok(cleaned),
            Validation::Failure(errors) => Err(Error::from_errors(errors)),
        }
    }

    /// The validator's generated name, e.g. `List[1|2|String]`.
    pub fn name(&self) -> &str {
        self.compiled.name()
    }

    /// This validator as a schema expression, for embedding in other
    /// schemas. Recompiling it is a no-op.
    pub fn schema(&self) -> Schema {
        Schema::Compiled(Box::new(self.compiled.clone()))
    }
}

impl From<Validator> for Schema {
    fn from(validator: Validator) -> Schema {
        Schema::Compiled(Box::new(validator.compiled))
    }
}

impl From<&Validator> for Schema {
    fn from(validator: &Validator) -> Schema {
        validator.schema()
    }
}

impl Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.compiled.name())
    }
}

/// Compiles a schema expression with default options. Alias for
/// [`Validator::new`].
pub fn compile(schema: impl Into<Schema>) -> Validator {
    Validator::new(schema)
}
