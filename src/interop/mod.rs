//! Interoperability with other data formats.
//!
//! This module converts between the engine's [`Value`](crate::Value) and
//! `serde_json::Value`, so JSON documents can be validated directly and
//! error reports can be serialized.

mod json;

pub use json::{from_json, to_json};
