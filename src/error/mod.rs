//! Error types for validation failures.
//!
//! This module provides types for representing validation errors with rich
//! context: paths into the input, the canonical message, and the
//! expected/provided renderings.

mod invalid;

pub use invalid::{Error, Invalid, MultipleInvalid};
