//! Schema expressions.
//!
//! A schema expression is the user-authored description of expected data:
//! a tree of literals, type tags, callables, container templates, and
//! markers. Expressions are inert until compiled (see
//! [`Validator`](crate::Validator)); compilation classifies every node
//! into one of a closed set of validator kinds.
//!
//! # Example
//!
//! ```rust
//! use gauntlet::{Marker, Schema, Validator, ValueType, val};
//!
//! let schema = Schema::mapping()
//!     .entry("name", ValueType::Str)
//!     .entry("age", ValueType::Int)
//!     .entry(Marker::optional("nickname"), ValueType::Str)
//!     .build();
//!
//! let validator = Validator::new(schema);
//! assert!(validator.apply(&val!({ "name" => "A", "age" => 18 })).is_ok());
//! ```

mod callable;
mod compile;
mod mapping;
mod markers;
mod scalar;
mod sequence;

pub use callable::{Callable, CallableError};
pub use compile::Compiled;
pub use markers::{Marker, MarkerKind};

use std::fmt::{self, Display};

use crate::value::{SequenceKind, Value};

// Canonical error message strings. These are stable identifiers that
// callers and tests match on; never localize them.
pub(crate) const WRONG_TYPE: &str = "Wrong type";
pub(crate) const WRONG_VALUE_TYPE: &str = "Wrong value type";
pub(crate) const INVALID_VALUE: &str = "Invalid value";
pub(crate) const REQUIRED_KEY: &str = "Required key not provided";
pub(crate) const EXTRA_KEYS: &str = "Extra keys not allowed";
pub(crate) const VALUE_REJECTED: &str = "Value rejected";

/// Sentinel rendering for a value that was not provided at all.
pub(crate) const NO_VALUE: &str = "-none-";

/// A schema expression: the closed set of node kinds the compiler
/// understands.
///
/// Most code never names the variants directly — expressions are built
/// from plain values (`1`, `"f"`), [`ValueType`](crate::ValueType) tags,
/// [`Callable`]s, [`Marker`]s, and the [`Schema::list`]/[`Schema::mapping`]
/// constructors, all of which convert via `Into<Schema>`.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// A primitive compared by equality.
    Literal(Value),
    /// An instance-of check against a value type.
    Type(crate::value::ValueType),
    /// An opaque user function (see [`Callable`]).
    Callable(Callable),
    /// An ordered container of alternative element schemas. The declared
    /// kind is the kind inputs must have.
    Sequence(SequenceKind, Vec<Schema>),
    /// A mapping template: priority-matched key/value schema pairs.
    Mapping(MappingTemplate),
    /// A marker annotating the wrapped schema with key/value behavior.
    Marker(Box<Marker>),
    /// An already-compiled schema, passed through unchanged.
    Compiled(Box<Compiled>),
}

impl Schema {
    /// Builds a list template from element alternatives.
    pub fn list(items: impl IntoIterator<Item = Schema>) -> Schema {
        Schema::Sequence(SequenceKind::List, items.into_iter().collect())
    }

    /// Builds a tuple template from element alternatives.
    pub fn tuple(items: impl IntoIterator<Item = Schema>) -> Schema {
        Schema::Sequence(SequenceKind::Tuple, items.into_iter().collect())
    }

    /// Builds a set template from element alternatives.
    pub fn set(items: impl IntoIterator<Item = Schema>) -> Schema {
        Schema::Sequence(SequenceKind::Set, items.into_iter().collect())
    }

    /// Starts a mapping template builder.
    pub fn mapping() -> MappingBuilder {
        MappingBuilder {
            entries: Vec::new(),
        }
    }
}

/// A mapping template: the ordered `(key schema, value schema)` pairs as
/// declared. Priority sorting happens at compile time, so declaration
/// order only breaks ties between entries of the same priority.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MappingTemplate {
    pub(crate) entries: Vec<(Schema, Schema)>,
}

/// Builder for mapping templates.
///
/// Keys without a marker get the compile-time default marker
/// (`Required` unless configured otherwise via
/// [`Options`](crate::Options)).
#[derive(Debug, Clone, Default)]
pub struct MappingBuilder {
    entries: Vec<(Schema, Schema)>,
}

impl MappingBuilder {
    /// Adds a key/value schema pair.
    pub fn entry(mut self, key: impl Into<Schema>, value: impl Into<Schema>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Finishes the template.
    pub fn build(self) -> Schema {
        Schema::Mapping(MappingTemplate {
            entries: self.entries,
        })
    }
}

impl From<MappingBuilder> for Schema {
    fn from(builder: MappingBuilder) -> Schema {
        builder.build()
    }
}

impl From<Value> for Schema {
    /// Converts a plain value into the schema it describes: containers
    /// become templates whose elements are themselves converted, and
    /// scalars become literals.
    fn from(value: Value) -> Schema {
        match value {
            Value::List(items) => {
                Schema::Sequence(SequenceKind::List, items.into_iter().map(Into::into).collect())
            }
            Value::Tuple(items) => {
                Schema::Sequence(SequenceKind::Tuple, items.into_iter().map(Into::into).collect())
            }
            Value::Set(items) => {
                Schema::Sequence(SequenceKind::Set, items.into_iter().map(Into::into).collect())
            }
            Value::Map(map) => Schema::Mapping(MappingTemplate {
                entries: map
                    .into_iter()
                    .map(|(k, v)| (Schema::from(k), Schema::from(v)))
                    .collect(),
            }),
            scalar => Schema::Literal(scalar),
        }
    }
}

impl From<crate::value::ValueType> for Schema {
    fn from(value_type: crate::value::ValueType) -> Schema {
        Schema::Type(value_type)
    }
}

impl From<Callable> for Schema {
    fn from(callable: Callable) -> Schema {
        Schema::Callable(callable)
    }
}

impl From<Marker> for Schema {
    fn from(marker: Marker) -> Schema {
        Schema::Marker(Box::new(marker))
    }
}

impl From<bool> for Schema {
    fn from(v: bool) -> Schema {
        Schema::Literal(Value::Bool(v))
    }
}

impl From<i64> for Schema {
    fn from(v: i64) -> Schema {
        Schema::Literal(Value::Int(v))
    }
}

impl From<i32> for Schema {
    fn from(v: i32) -> Schema {
        Schema::Literal(Value::Int(v as i64))
    }
}

impl From<f64> for Schema {
    fn from(v: f64) -> Schema {
        Schema::Literal(Value::Float(v))
    }
}

impl From<&str> for Schema {
    fn from(v: &str) -> Schema {
        Schema::Literal(Value::Str(v.to_string()))
    }
}

impl From<String> for Schema {
    fn from(v: String) -> Schema {
        Schema::Literal(Value::Str(v))
    }
}

impl Display for Schema {
    /// Structural rendering, used as the generated name of mapping
    /// validators and in debug output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Literal(v) => write!(f, "{}", v),
            Schema::Type(t) => write!(f, "{}", crate::registry::type_name(*t)),
            Schema::Callable(c) => write!(f, "{}", c.name()),
            Schema::Sequence(kind, items) => {
                write!(f, "{}[", crate::registry::type_name(kind.value_type()))?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, "|")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Schema::Mapping(template) => {
                write!(f, "{{")?;
                for (i, (k, v)) in template.entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
            Schema::Marker(m) => write!(f, "{}", m),
            Schema::Compiled(c) => write!(f, "{}", c.name()),
        }
    }
}
