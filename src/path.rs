//! Paths locating values in nested structures.
//!
//! This module provides [`Path`] and [`PathSegment`] for building and
//! representing the location of an error's subject inside the input, e.g.
//! `users[0].email`. Segments hold literal keys or indices only — a marker
//! or a compiled schema can never enter a path.

use std::fmt::{self, Display};

use crate::value::Value;

/// A segment of a path.
///
/// Paths are built from segments that represent either mapping-key access
/// or sequence indexing. Keys are literal [`Value`]s: strings, integers,
/// booleans — whatever keyed the input mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A mapping key (e.g. `email`, `100`).
    Key(Value),
    /// A sequence index (e.g. `[0]`, `[42]`).
    Index(usize),
}

impl PathSegment {
    /// Creates a new key segment.
    pub fn key(key: impl Into<Value>) -> Self {
        PathSegment::Key(key.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// A path to a value in a nested structure.
///
/// `Path` represents locations like `users[0].email` and provides methods
/// for building paths incrementally. Every builder returns a new path; the
/// original is never modified.
///
/// # Example
///
/// ```rust
/// use gauntlet::Path;
///
/// let path = Path::root()
///     .push_key("users")
///     .push_index(0)
///     .push_key("email");
///
/// assert_eq!(path.to_string(), "users[0].email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a single key segment.
    pub fn from_key(key: impl Into<Value>) -> Self {
        Self {
            segments: vec![PathSegment::Key(key.into())],
        }
    }

    /// Creates a path from a single index segment.
    pub fn from_index(idx: usize) -> Self {
        Self {
            segments: vec![PathSegment::Index(idx)],
        }
    }

    /// Returns a new path with a key segment appended.
    pub fn push_key(&self, key: impl Into<Value>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(key.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns a new path with `prefix` prepended to this path.
    ///
    /// Used when errors produced against a nested validator's root are
    /// lifted into an enclosing structure.
    pub fn prefixed(&self, prefix: &Path) -> Self {
        let mut segments = prefix.segments.clone();
        segments.extend(self.segments.iter().cloned());
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the parent path (all segments except the last), or None if
    /// this is root.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            None
        } else {
            Some(Self {
                segments: self.segments[..self.segments.len() - 1].to_vec(),
            })
        }
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Renders the path as a JSON array of literal components.
    ///
    /// Keys become their JSON equivalent (strings, numbers, booleans);
    /// indices become numbers. The result survives a serialize/deserialize
    /// round trip without loss.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.segments
                .iter()
                .map(|segment| match segment {
                    PathSegment::Key(key) => crate::interop::to_json(key),
                    PathSegment::Index(idx) => serde_json::Value::from(*idx),
                })
                .collect(),
        )
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(Value::Str(name)) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Key(other) => write!(f, "[{}]", other)?,
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}
