//! Pre-built validators.
//!
//! Everything here is an ordinary [`Callable`](crate::Callable) satisfying
//! the same contract as user functions — the engine core never
//! special-cases these. They cover the common cleaning and constraint
//! chores: message overrides, predicates and combinators, type coercion,
//! membership and length checks, numeric ranges, string transforms, and
//! boolean coercion.
//!
//! # Example
//!
//! ```rust
//! use gauntlet::{Schema, Validator, ValueType, val};
//! use gauntlet::validators::{all_of, range};
//!
//! let percent = all_of([Schema::Type(ValueType::Int), range(0, 100).into()]);
//! let validator = Validator::new(percent);
//!
//! assert!(validator.apply(&val!(90)).is_ok());
//! assert!(validator.apply(&val!(190)).is_err());
//! ```

pub mod base;
pub mod booleans;
pub mod numbers;
pub mod predicates;
pub mod strings;
pub mod types;
pub mod values;

pub use base::{check, msg, truth};
pub use booleans::{boolean, falsy, truthy};
pub use numbers::{at_least, at_most, clamp, range};
pub use predicates::{all_of, any_of, exclusive, exclusive_optional, inclusive, maybe, neither};
pub use strings::{capitalize, lower, matches, not_empty, replace, title, upper};
pub use types::{coerce, type_of};
pub use values::{length, one_of};
