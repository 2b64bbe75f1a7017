//! Process-wide registry of stable type names.
//!
//! Error messages refer to value types by stable, human-readable names
//! (`"Integer number"`, `"Dictionary"`, …). The names live in a single
//! process-wide registry that is seeded with the canonical set, may be
//! customized during startup, and is read-only once frozen.

use std::collections::HashMap;
use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::value::ValueType;

/// The canonical display name for a built-in type.
///
/// These strings are stable identifiers: validators embed them in error
/// messages and callers are entitled to match on them.
fn default_name(value_type: ValueType) -> &'static str {
    match value_type {
        ValueType::Null => "None",
        ValueType::Bool => "Boolean",
        ValueType::Int => "Integer number",
        ValueType::Float => "Fractional number",
        ValueType::Bytes => "Binary String",
        ValueType::Str => "String",
        ValueType::List => "List",
        ValueType::Tuple => "Tuple",
        ValueType::Set => "Set",
        ValueType::Map => "Dictionary",
    }
}

struct Inner {
    overrides: HashMap<ValueType, String>,
    frozen: bool,
}

/// The registry of type display names.
///
/// There is exactly one instance per process, reachable through
/// [`TypeNames::global`]. Lookups go through the free function
/// [`type_name`]; registration is only useful for applications that want
/// to localize or re-brand the built-in names, and must happen before the
/// registry is [frozen](TypeNames::freeze).
///
/// # Thread Safety
///
/// Reads take a shared lock and may run concurrently from any number of
/// validation threads; registration is serialized behind a write lock.
pub struct TypeNames {
    inner: RwLock<Inner>,
}

impl TypeNames {
    fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                overrides: HashMap::new(),
                frozen: false,
            }),
        }
    }

    /// Returns the process-wide registry.
    pub fn global() -> &'static TypeNames {
        static GLOBAL: OnceLock<TypeNames> = OnceLock::new();
        GLOBAL.get_or_init(TypeNames::new)
    }

    /// Registers a custom display name for a type.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Frozen`] after [`freeze`](Self::freeze) has
    /// been called, and [`RegistryError::DuplicateName`] if the type was
    /// already given a custom name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gauntlet::{TypeNames, ValueType};
    ///
    /// // Localized or re-branded names must be installed at startup.
    /// let _ = TypeNames::global().register(ValueType::Map, "Object");
    /// ```
    pub fn register(
        &self,
        value_type: ValueType,
        name: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let mut inner = self.inner.write();
        if inner.frozen {
            return Err(RegistryError::Frozen);
        }
        if let Some(existing) = inner.overrides.get(&value_type) {
            return Err(RegistryError::DuplicateName(existing.clone()));
        }
        inner.overrides.insert(value_type, name.into());
        Ok(())
    }

    /// Makes the registry read-only. Subsequent registrations fail.
    pub fn freeze(&self) {
        self.inner.write().frozen = true;
    }

    /// Looks up the display name for a type.
    pub fn name(&self, value_type: ValueType) -> String {
        self.inner
            .read()
            .overrides
            .get(&value_type)
            .cloned()
            .unwrap_or_else(|| default_name(value_type).to_string())
    }
}

/// Looks up the display name of a type in the global registry.
pub fn type_name(value_type: ValueType) -> String {
    TypeNames::global().name(value_type)
}

/// Errors that can occur during type-name registration.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The registry has been frozen and no longer accepts registrations.
    #[error("type-name registry is frozen")]
    Frozen,

    /// The type already carries a custom name.
    #[error("type already named '{0}'")]
    DuplicateName(String),
}
