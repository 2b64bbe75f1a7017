//! The schema compiler.
//!
//! Compilation classifies every schema expression into one of a closed set
//! of validator kinds and produces an immutable [`Compiled`] node: a name
//! fixed at compile time, a priority the mapping validator sorts by, and
//! the apply behavior.

use stillwater::Validation;

use crate::path::Path;
use crate::registry::type_name;
use crate::validator::Options;
use crate::value::{Value, ValueType};
use crate::ValidationResult;

use super::{mapping, scalar, sequence, Callable, Schema};

// Kind priorities: a literal key binds before a type key, which binds
// before a callable key. Containers only matter as keys in degenerate
// schemas and bind last.
pub(crate) const PRIORITY_LITERAL: i32 = 0;
pub(crate) const PRIORITY_TYPE: i32 = 10;
pub(crate) const PRIORITY_CALLABLE: i32 = 20;
pub(crate) const PRIORITY_CONTAINER: i32 = 30;

#[derive(Debug, Clone)]
pub(crate) enum CompiledKind {
    Literal(Value),
    Type(ValueType),
    Callable(Callable),
    Sequence(sequence::CompiledSequence),
    Mapping(mapping::CompiledMapping),
}

/// A compiled validator node.
///
/// Owns its sub-validators, knows its human-readable name (derived
/// recursively at compile time, e.g. `List[1|2|String]`), and is immutable
/// — a compiled schema can be shared freely across threads and reused in
/// other schema expressions via [`Schema::Compiled`].
#[derive(Debug, Clone)]
pub struct Compiled {
    name: String,
    priority: i32,
    kind: CompiledKind,
    source: Schema,
}

impl Compiled {
    /// The validator's generated name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The schema expression this validator was compiled from.
    pub fn source(&self) -> &Schema {
        &self.source
    }

    pub(crate) fn priority(&self) -> i32 {
        self.priority
    }

    pub(crate) fn is_literal(&self) -> bool {
        matches!(self.kind, CompiledKind::Literal(_))
    }

    pub(crate) fn literal_value(&self) -> Option<&Value> {
        match &self.kind {
            CompiledKind::Literal(v) => Some(v),
            _ => None,
        }
    }

    /// Compiles a schema expression. Already-compiled schemas pass through
    /// unchanged, which is what makes compilation idempotent.
    pub(crate) fn build(schema: &Schema, options: &Options) -> Compiled {
        match schema {
            Schema::Compiled(compiled) => (**compiled).clone(),

            // Markers only carry meaning inside mapping templates and
            // sequence elements, where the respective compilers strip them
            // first. Anywhere else the inner schema is compiled as-is; a
            // bare marker degenerates to a match-anything identity.
            Schema::Marker(marker) => match marker.inner() {
                Some(inner) => Compiled::build(inner, options),
                None => {
                    let label = marker.kind().label();
                    Compiled {
                        name: label.to_string(),
                        priority: PRIORITY_CALLABLE,
                        kind: CompiledKind::Callable(Callable::new(label, Ok)),
                        source: schema.clone(),
                    }
                }
            },

            Schema::Type(value_type) => Compiled {
                name: type_name(*value_type),
                priority: PRIORITY_TYPE,
                kind: CompiledKind::Type(*value_type),
                source: schema.clone(),
            },

            Schema::Mapping(template) => Compiled {
                name: schema.to_string(),
                priority: PRIORITY_CONTAINER,
                kind: CompiledKind::Mapping(mapping::compile_mapping(template, options)),
                source: schema.clone(),
            },

            Schema::Sequence(kind, items) => {
                let compiled = sequence::compile_sequence(*kind, items, options);
                let name = format!(
                    "{}[{}]",
                    type_name(kind.value_type()),
                    compiled
                        .alternative_names()
                        .collect::<Vec<_>>()
                        .join("|")
                );
                Compiled {
                    name,
                    priority: PRIORITY_CONTAINER,
                    kind: CompiledKind::Sequence(compiled),
                    source: schema.clone(),
                }
            }

            Schema::Callable(callable) => Compiled {
                name: callable.name().to_string(),
                priority: PRIORITY_CALLABLE,
                kind: CompiledKind::Callable(callable.clone()),
                source: schema.clone(),
            },

            Schema::Literal(value) => Compiled {
                name: value.to_string(),
                priority: PRIORITY_LITERAL,
                kind: CompiledKind::Literal(value.clone()),
                source: schema.clone(),
            },
        }
    }

    /// Validates `value` at `path`, producing the cleaned value or the
    /// accumulated errors. Pure with respect to the schema; only user
    /// callables may have side effects.
    pub(crate) fn apply(&self, path: &Path, value: &Value) -> ValidationResult<Value> {
        match &self.kind {
            CompiledKind::Literal(literal) => scalar::apply_literal(self, literal, path, value),
            CompiledKind::Type(value_type) => scalar::apply_type(self, *value_type, path, value),
            CompiledKind::Callable(callable) => scalar::apply_callable(self, callable, path, value),
            CompiledKind::Sequence(seq) => sequence::apply_sequence(self, seq, path, value),
            CompiledKind::Mapping(map) => mapping::apply_mapping(self, map, path, value),
        }
    }

    /// Type-mismatch error shared by container validators.
    pub(crate) fn wrong_value_type(
        &self,
        expected: ValueType,
        path: &Path,
        value: &Value,
    ) -> ValidationResult<Value> {
        Validation::Failure(
            crate::error::Invalid::new(super::WRONG_VALUE_TYPE)
                .with_expected(type_name(expected))
                .with_provided(value.type_name())
                .with_path(path.clone())
                .with_validator(self.source.clone())
                .into(),
        )
    }
}

impl PartialEq for Compiled {
    /// Compiled nodes compare by their source expression; the compiled
    /// form is fully determined by it and the compile options.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.source == other.source
    }
}
