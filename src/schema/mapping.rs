//! Mapping validator: priority-ordered key matching with marker-driven
//! semantics.
//!
//! Compilation strips markers off the template keys, compiles both sides
//! of every entry, and sorts entries by effective priority: the marker's
//! band first (`Remove` before `Required`/`Optional` before `Reject`),
//! then the key schema's kind (literal before type before callable), then
//! declaration order. The ordering is what keeps a type or callable key
//! from stealing input keys that a literal key names exactly.

use stillwater::Validation;

use crate::error::{Invalid, MultipleInvalid};
use crate::path::Path;
use crate::validator::Options;
use crate::value::{Map, Value, ValueType};
use crate::ValidationResult;

use super::compile::Compiled;
use super::{
    MappingTemplate, Marker, MarkerKind, Schema, EXTRA_KEYS, NO_VALUE, REQUIRED_KEY, VALUE_REJECTED,
};

/// What happens to the value of a claimed key.
#[derive(Debug, Clone)]
enum Disposition {
    /// Validate against the compiled value schema and emit the result.
    Validate(Compiled),
    /// Drop the entry; the value is never looked at.
    Remove,
    /// Reject the entry; the value is never validated. Carries the marker
    /// expression for error reporting.
    Reject(Schema),
}

#[derive(Debug, Clone)]
struct Entry {
    marker: MarkerKind,
    /// The key as a marker expression (implicit default markers included),
    /// reported as the failing validator on missing/rejected keys.
    marker_source: Schema,
    message: Option<String>,
    key: Compiled,
    value: Disposition,
}

/// Policy for input keys no entry claimed.
#[derive(Debug, Clone)]
enum ExtraPolicy {
    Reject,
    Remove,
    Allow,
    Validate(Box<Compiled>),
}

#[derive(Debug, Clone)]
pub(crate) struct CompiledMapping {
    entries: Vec<Entry>,
    extra: ExtraPolicy,
    entire: Vec<Compiled>,
}

pub(crate) fn compile_mapping(template: &MappingTemplate, options: &Options) -> CompiledMapping {
    let mut entries: Vec<Entry> = Vec::new();
    let mut extra: Option<ExtraPolicy> = None;
    let mut entire: Vec<Compiled> = Vec::new();

    for (key_schema, value_schema) in &template.entries {
        // Strip the key marker; bare keys get the compile-time default.
        let (kind, message, inner) = match key_schema {
            Schema::Marker(marker) => (
                marker.kind(),
                marker.error_message().map(str::to_string),
                marker.inner(),
            ),
            other => (options.default_keys.marker_kind(), None, Some(other)),
        };

        match kind {
            MarkerKind::Extra => {
                extra = Some(extra_policy(value_schema, options));
                continue;
            }
            MarkerKind::Entire => {
                entire.push(Compiled::build(value_schema, options));
                continue;
            }
            _ => {}
        }

        // Allow in key position degenerates to Optional.
        let marker = if kind == MarkerKind::Allow {
            MarkerKind::Optional
        } else {
            kind
        };

        // A bare marker key compiles to a match-anything identity.
        let key = match inner {
            Some(schema) => Compiled::build(schema, options),
            None => Compiled::build(key_schema, options),
        };

        let marker_source = Schema::Marker(Box::new(Marker::from_parts(
            marker,
            inner.cloned(),
            message.clone(),
        )));

        let value = match value_schema {
            Schema::Marker(m) if m.kind() == MarkerKind::Remove => Disposition::Remove,
            Schema::Marker(m) if m.kind() == MarkerKind::Reject => {
                Disposition::Reject(value_schema.clone())
            }
            other => Disposition::Validate(Compiled::build(other, options)),
        };

        entries.push(Entry {
            marker,
            marker_source,
            message,
            key,
            value,
        });
    }

    // Stable sort: declaration order breaks the remaining ties.
    entries.sort_by_key(|entry| (entry.marker.priority(), entry.key.priority()));

    CompiledMapping {
        entries,
        extra: extra.unwrap_or_else(|| extra_policy(&options.extra_keys, options)),
        entire,
    }
}

fn extra_policy(value_schema: &Schema, options: &Options) -> ExtraPolicy {
    match value_schema {
        Schema::Marker(m) if m.kind() == MarkerKind::Reject => ExtraPolicy::Reject,
        Schema::Marker(m) if m.kind() == MarkerKind::Remove => ExtraPolicy::Remove,
        Schema::Marker(m) if m.kind() == MarkerKind::Allow => ExtraPolicy::Allow,
        other => ExtraPolicy::Validate(Box::new(Compiled::build(other, options))),
    }
}

struct Pair {
    key: Value,
    value: Value,
    claimed: bool,
}

/// Validates a mapping input.
///
/// Entries claim input keys in priority order; each claimed value runs
/// through its disposition; keys nothing claimed fall to the extra-keys
/// policy; `Entire` validators run last against the assembled output at
/// the parent path. Errors from every stage accumulate.
pub(crate) fn apply_mapping(
    node: &Compiled,
    mapping: &CompiledMapping,
    path: &Path,
    value: &Value,
) -> ValidationResult<Value> {
    let input = match value {
        Value::Map(map) => map,
        _ => return node.wrong_value_type(ValueType::Map, path, value),
    };

    let mut pairs: Vec<Pair> = input
        .iter()
        .map(|(k, v)| Pair {
            key: k.clone(),
            value: v.clone(),
            claimed: false,
        })
        .collect();
    let mut cleaned = Map::new();
    let mut errors: Vec<Invalid> = Vec::new();

    for entry in &mapping.entries {
        let mut matched = false;

        for pair in pairs.iter_mut() {
            if pair.claimed {
                continue;
            }
            // A key-schema failure just means "not this entry's key".
            let cleaned_key = match entry.key.apply(path, &pair.key) {
                Validation::Success(key) => key,
                Validation::Failure(_) => continue,
            };
            pair.claimed = true;
            matched = true;

            match entry.marker {
                MarkerKind::Remove => {}
                MarkerKind::Reject => errors.push(
                    Invalid::new(entry.message.as_deref().unwrap_or(VALUE_REJECTED))
                        .with_expected(NO_VALUE)
                        .with_provided(pair.key.to_string())
                        .with_path(path.push_key(pair.key.clone()))
                        .with_validator(entry.marker_source.clone()),
                ),
                _ => match &entry.value {
                    Disposition::Remove => {}
                    Disposition::Reject(source) => {
                        let message = match source {
                            Schema::Marker(m) => m.error_message(),
                            _ => None,
                        };
                        errors.push(
                            Invalid::new(message.unwrap_or(VALUE_REJECTED))
                                .with_expected(NO_VALUE)
                                .with_provided(pair.value.to_string())
                                .with_path(path.push_key(pair.key.clone()))
                                .with_validator(source.clone()),
                        );
                    }
                    Disposition::Validate(validator) => {
                        let value_path = path.push_key(pair.key.clone());
                        match validator.apply(&value_path, &pair.value) {
                            Validation::Success(value) => {
                                // Callable keys may rewrite the key; a
                                // collision on the cleaned key resolves
                                // last-write-wins.
                                cleaned.insert(cleaned_key, value);
                            }
                            Validation::Failure(failure) => errors.extend(failure.into_vec()),
                        }
                    }
                },
            }

            // A literal key equals at most one input key; every other key
            // kind keeps scanning and may claim several.
            if entry.key.is_literal() {
                break;
            }
        }

        if !matched && entry.marker == MarkerKind::Required {
            // Only a literal key names a concrete path component.
            let error_path = match entry.key.literal_value() {
                Some(key) => path.push_key(key.clone()),
                None => path.clone(),
            };
            errors.push(
                Invalid::new(entry.message.as_deref().unwrap_or(REQUIRED_KEY))
                    .with_expected(entry.key.name())
                    .with_provided(NO_VALUE)
                    .with_path(error_path)
                    .with_validator(entry.marker_source.clone()),
            );
        }
    }

    for pair in pairs.iter().filter(|pair| !pair.claimed) {
        match &mapping.extra {
            ExtraPolicy::Reject => errors.push(
                Invalid::new(EXTRA_KEYS)
                    .with_expected(NO_VALUE)
                    .with_provided(pair.key.to_string())
                    .with_path(path.push_key(pair.key.clone()))
                    .with_validator(Schema::Marker(Box::new(Marker::extra()))),
            ),
            ExtraPolicy::Remove => {}
            ExtraPolicy::Allow => {
                cleaned.insert(pair.key.clone(), pair.value.clone());
            }
            ExtraPolicy::Validate(validator) => {
                let value_path = path.push_key(pair.key.clone());
                match validator.apply(&value_path, &pair.value) {
                    Validation::Success(value) => {
                        cleaned.insert(pair.key.clone(), value);
                    }
                    Validation::Failure(failure) => errors.extend(failure.into_vec()),
                }
            }
        }
    }

    // Entire validators see the output so far even when key-level errors
    // exist; their errors accumulate alongside.
    let mut result = Value::Map(cleaned);
    for entire in &mapping.entire {
        match entire.apply(path, &result) {
            Validation::Success(replacement) => result = replacement,
            Validation::Failure(failure) => errors.extend(failure.into_vec()),
        }
    }

    if !errors.is_empty() {
        return Validation::Failure(MultipleInvalid::from_vec(errors));
    }
    Validation::Success(result)
}
