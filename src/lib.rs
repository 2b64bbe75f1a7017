//! # Gauntlet
//!
//! A declarative data-validation and sanitization engine that accumulates
//! ALL validation errors, providing comprehensive feedback rather than
//! short-circuiting on the first failure.
//!
//! ## Overview
//!
//! A schema expression describes the expected shape of hierarchical data:
//! literals match by equality, type tags by instance-of, callables run
//! arbitrary cleaning logic, sequence templates list element alternatives,
//! and mapping templates pair key schemas with value schemas, optionally
//! annotated with markers (`Required`, `Optional`, `Remove`, `Reject`,
//! `Extra`, `Entire`). Compiling an expression yields a [`Validator`] that
//! either returns a cleaned value or an error tree with a precise path to
//! every fault. Error accumulation rides on stillwater's `Validation` type.
//!
//! ## Core Types
//!
//! - [`Value`]: the engine's own value model (non-string mapping keys,
//!   tuples, sets, binary strings)
//! - [`Schema`]: a schema expression; [`Marker`] annotates mapping keys
//! - [`Validator`]: a compiled, reusable validator
//! - [`Invalid`] / [`MultipleInvalid`] / [`Error`]: single and aggregated
//!   validation failures with [`Path`]s into the input
//!
//! ## Example
//!
//! ```rust
//! use gauntlet::{Marker, Schema, Validator, ValueType, val};
//!
//! let validator = Validator::new(
//!     Schema::mapping()
//!         .entry("name", ValueType::Str)
//!         .entry("age", ValueType::Int)
//!         .entry(Marker::optional("nickname"), ValueType::Str)
//!         .build(),
//! );
//!
//! // A valid input comes back cleaned (here: unchanged).
//! let input = val!({ "name" => "Alice", "age" => 30 });
//! assert_eq!(validator.apply(&input).unwrap(), input);
//!
//! // Every fault is reported, each at its own path.
//! let bad = val!({ "age" => "thirty" });
//! let error = validator.apply(&bad).unwrap_err();
//! assert_eq!(error.len(), 2); // missing "name", wrong "age" type
//! ```

pub mod error;
pub mod interop;
pub mod path;
pub mod registry;
pub mod schema;
pub mod validator;
pub mod validators;
pub mod value;

pub use error::{Error, Invalid, MultipleInvalid};
pub use path::{Path, PathSegment};
pub use registry::{type_name, RegistryError, TypeNames};
pub use schema::{Callable, CallableError, Compiled, MappingBuilder, Marker, MarkerKind, Schema};
pub use validator::{compile, DefaultKeys, Options, Validator};
pub use value::{Map, SequenceKind, Set, Value, ValueType};

/// Type alias for internal validation results: a cleaned value or the
/// accumulated errors.
pub type ValidationResult<T> = stillwater::Validation<T, MultipleInvalid>;
