//! Markers: annotations on mapping keys and values.
//!
//! A marker wraps a sub-schema with a behavior — whether a key must be
//! present, whether matches are dropped or rejected, which entry catches
//! otherwise-unmatched keys, and the whole-mapping post-validator. Each
//! marker kind carries a priority that decides which schema entry claims
//! an input key first.

use std::fmt::{self, Display};

use super::Schema;

/// The closed set of marker behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// Matched keys/elements are dropped from the output unconditionally.
    Remove,
    /// The key must match at least one input key.
    Required,
    /// Zero matches is fine.
    Optional,
    /// Matches produce a `"Value rejected"` error.
    Reject,
    /// Unmatched keys pass through untouched (extra-keys policy).
    Allow,
    /// Catch-all entry for keys nothing else matched.
    Extra,
    /// Whole-mapping post-validator, run after all keys.
    Entire,
}

impl MarkerKind {
    /// Matching priority: lower binds first. `Required`/`Optional` share a
    /// band and are further ordered by their key schema's kind (literal
    /// before type before callable).
    pub(crate) fn priority(self) -> i32 {
        match self {
            MarkerKind::Remove => -100,
            MarkerKind::Required | MarkerKind::Optional | MarkerKind::Allow => 0,
            MarkerKind::Reject => 100,
            MarkerKind::Extra => 200,
            MarkerKind::Entire => 300,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            MarkerKind::Remove => "Remove",
            MarkerKind::Required => "Required",
            MarkerKind::Optional => "Optional",
            MarkerKind::Reject => "Reject",
            MarkerKind::Allow => "Allow",
            MarkerKind::Extra => "Extra",
            MarkerKind::Entire => "Entire",
        }
    }
}

/// A marker wrapping an optional sub-schema.
///
/// In key position the sub-schema is the key schema (`Marker::required
/// (ValueType::Int)` requires an integer-typed key). In value position the
/// bare forms [`Marker::remove_value`] and [`Marker::reject_value`] drop or
/// reject the matched entry without looking at its value.
///
/// # Example
///
/// ```rust
/// use gauntlet::{Marker, Schema, ValueType};
///
/// let schema = Schema::mapping()
///     .entry(Marker::required("a"), 1)
///     .entry(Marker::optional(ValueType::Int), ValueType::Bool)
///     .entry(Marker::extra(), Marker::reject_value())
///     .build();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    kind: MarkerKind,
    inner: Option<Schema>,
    message: Option<String>,
}

impl Marker {
    fn new(kind: MarkerKind, inner: Option<Schema>) -> Self {
        Self {
            kind,
            inner,
            message: None,
        }
    }

    pub(crate) fn from_parts(
        kind: MarkerKind,
        inner: Option<Schema>,
        message: Option<String>,
    ) -> Self {
        Self {
            kind,
            inner,
            message,
        }
    }

    /// The key must match at least one input key.
    pub fn required(inner: impl Into<Schema>) -> Self {
        Self::new(MarkerKind::Required, Some(inner.into()))
    }

    /// The key may match zero input keys.
    pub fn optional(inner: impl Into<Schema>) -> Self {
        Self::new(MarkerKind::Optional, Some(inner.into()))
    }

    /// Keys matching the inner schema are dropped, values unseen.
    pub fn remove(inner: impl Into<Schema>) -> Self {
        Self::new(MarkerKind::Remove, Some(inner.into()))
    }

    /// Keys matching the inner schema are rejected.
    pub fn reject(inner: impl Into<Schema>) -> Self {
        Self::new(MarkerKind::Reject, Some(inner.into()))
    }

    /// Value position: drop the matched entry regardless of its value.
    pub fn remove_value() -> Self {
        Self::new(MarkerKind::Remove, None)
    }

    /// Value position: reject the matched entry regardless of its value.
    pub fn reject_value() -> Self {
        Self::new(MarkerKind::Reject, None)
    }

    /// Catch-all key: its value schema applies to every input key nothing
    /// else claimed.
    pub fn extra() -> Self {
        Self::new(MarkerKind::Extra, None)
    }

    /// Whole-mapping post-validator key: its value schema receives the
    /// cleaned mapping after all key entries ran.
    pub fn entire() -> Self {
        Self::new(MarkerKind::Entire, None)
    }

    /// Extra-keys policy: pass unmatched keys through untouched.
    pub fn allow() -> Self {
        Self::new(MarkerKind::Allow, None)
    }

    /// Overrides the error message emitted when this marker's key is
    /// missing or rejected.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// This marker's behavior kind.
    pub fn kind(&self) -> MarkerKind {
        self.kind
    }

    /// The wrapped sub-schema, if any.
    pub fn inner(&self) -> Option<&Schema> {
        self.inner.as_ref()
    }

    pub(crate) fn error_message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(inner) => write!(f, "{}({})", self.kind.label(), inner),
            None => write!(f, "{}", self.kind.label()),
        }
    }
}
