//! Sequence validator: ordered containers whose template lists the
//! alternative element schemas.

use stillwater::Validation;

use crate::error::{Invalid, MultipleInvalid};
use crate::path::Path;
use crate::validator::Options;
use crate::value::{SequenceKind, Value};
use crate::ValidationResult;

use super::compile::Compiled;
use super::{MarkerKind, Schema, INVALID_VALUE};

/// One element alternative. `removing` alternatives drop the matched
/// element from the output instead of emitting it.
#[derive(Debug, Clone)]
pub(crate) struct Alternative {
    validator: Compiled,
    removing: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct CompiledSequence {
    kind: SequenceKind,
    alternatives: Vec<Alternative>,
}

impl CompiledSequence {
    pub(crate) fn alternative_names(&self) -> impl Iterator<Item = &str> {
        self.alternatives.iter().map(|alt| alt.validator.name())
    }
}

pub(crate) fn compile_sequence(
    kind: SequenceKind,
    items: &[Schema],
    options: &Options,
) -> CompiledSequence {
    let alternatives = items
        .iter()
        .map(|item| match item {
            Schema::Marker(marker) if marker.kind() == MarkerKind::Remove => {
                // A bare Remove compiles to a match-anything identity and
                // so removes every element nothing earlier claimed.
                let validator = match marker.inner() {
                    Some(inner) => Compiled::build(inner, options),
                    None => Compiled::build(item, options),
                };
                Alternative {
                    validator,
                    removing: true,
                }
            }
            other => Alternative {
                validator: Compiled::build(other, options),
                removing: false,
            },
        })
        .collect();

    CompiledSequence { kind, alternatives }
}

/// Validates each element against the alternatives in declaration order;
/// the first match wins. Per-element failures accumulate instead of
/// short-circuiting, and the output container keeps the input's kind.
pub(crate) fn apply_sequence(
    node: &Compiled,
    seq: &CompiledSequence,
    path: &Path,
    value: &Value,
) -> ValidationResult<Value> {
    let items: Vec<&Value> = match (seq.kind, value) {
        (SequenceKind::List, Value::List(items)) => items.iter().collect(),
        (SequenceKind::Tuple, Value::Tuple(items)) => items.iter().collect(),
        (SequenceKind::Set, Value::Set(items)) => items.iter().collect(),
        _ => return node.wrong_value_type(seq.kind.value_type(), path, value),
    };

    let mut cleaned = Vec::with_capacity(items.len());
    let mut errors: Vec<Invalid> = Vec::new();

    for (index, item) in items.into_iter().enumerate() {
        let item_path = path.push_index(index);
        let mut matched = false;
        let mut sole_failure: Option<MultipleInvalid> = None;

        for alternative in &seq.alternatives {
            match alternative.validator.apply(&item_path, item) {
                Validation::Success(value) => {
                    if !alternative.removing {
                        cleaned.push(value);
                    }
                    matched = true;
                    break;
                }
                Validation::Failure(failure) => {
                    if seq.alternatives.len() == 1 {
                        sole_failure = Some(failure);
                    }
                }
            }
        }

        if !matched {
            match sole_failure {
                // A single-alternative template reports the member's own
                // errors; they are more specific than the generic one.
                Some(failure) => errors.extend(failure.into_vec()),
                None => errors.push(
                    Invalid::new(INVALID_VALUE)
                        .with_expected(node.name())
                        .with_provided(item.to_string())
                        .with_path(item_path)
                        .with_validator(node.source().clone()),
                ),
            }
        }
    }

    if !errors.is_empty() {
        return Validation::Failure(MultipleInvalid::from_vec(errors));
    }

    Validation::Success(match seq.kind {
        SequenceKind::List => Value::List(cleaned),
        SequenceKind::Tuple => Value::Tuple(cleaned),
        SequenceKind::Set => Value::Set(cleaned.into_iter().collect()),
    })
}
