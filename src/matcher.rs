//! Recursive matching of source values against definition trees.
//!
//! Two traversals share one dispatch on [`DefKind`]:
//!
//! - [`matches`] is a silent predicate. Alternatives are tried with it, so a
//!   failing alternative never leaves errors behind.
//! - [`collect_errors`] walks source and definition together, extending the
//!   path as it descends, and records one [`ShapeError`] per leaf failure.
//!   Containers that are themselves the right shape add no error of their
//!   own; only their failing children do.

use rayon::prelude::*;
use serde_json::Value;
use stillwater::Validation;
use tracing::{debug, trace};

use crate::definition::{DefKind, Definition};
use crate::describe::describe;
use crate::error::{ShapeError, ShapeErrors};
use crate::path::SourcePath;
use crate::value::{is_loose_number, ValueKind};
use crate::ValidationResult;

/// Returns true if `source` satisfies `def`. Records nothing.
///
/// `None` stands for an absent value.
pub fn matches(def: &Definition, source: Option<&Value>) -> bool {
    satisfies(def, def.kind(), source)
}

fn satisfies(def: &Definition, kind: DefKind, source: Option<&Value>) -> bool {
    match kind {
        DefKind::ArrayOf => match source {
            Some(Value::Array(items)) => {
                let element = def.element();
                items.iter().all(|item| matches(element, Some(item)))
            }
            _ => false,
        },
        DefKind::Options => {
            let alternatives = def.alternatives();
            alternatives
                .iter()
                .any(|alternative| matches(alternative, source))
                || (source.is_none()
                    && alternatives
                        .iter()
                        .any(|alternative| matches!(alternative, Definition::Absent)))
        }
        DefKind::Ommitable => source.is_none(),
        DefKind::Object => match source {
            Some(Value::Object(map)) => {
                def.fields().all(|(key, field)| matches(field, map.get(key)))
            }
            _ => false,
        },
        DefKind::Number => is_loose_number(source),
        DefKind::String => ValueKind::of(source) == ValueKind::String,
        DefKind::Boolean => matches!(source, Some(Value::Bool(_))),
        DefKind::Null => ValueKind::of(source) == ValueKind::Null,
        DefKind::Unknown => match def {
            Definition::Literal(literal) => literal.equals(source),
            _ => false,
        },
    }
}

/// Walks `source` against `def`, appending one error per mismatch found.
///
/// Arrays recurse per element with `[k]` appended to `path`, objects recurse
/// per declared key with `.key` appended. Everything else (alternatives
/// included) is decided by [`matches`] and reported as a single error at
/// `path`.
pub fn collect_errors(
    def: &Definition,
    source: Option<&Value>,
    path: &SourcePath,
    errors: &mut Vec<ShapeError>,
) {
    let kind = def.kind();

    match (kind, ValueKind::of(source), source) {
        (DefKind::ArrayOf, ValueKind::Array, Some(Value::Array(items))) => {
            let element = def.element();
            for (index, item) in items.iter().enumerate() {
                collect_errors(element, Some(item), &path.push_index(index), errors);
            }
        }
        (DefKind::Object, ValueKind::Object, Some(Value::Object(map))) => {
            for (key, field) in def.fields() {
                collect_errors(field, map.get(key), &path.push_key(key), errors);
            }
        }
        (DefKind::ArrayOf | DefKind::Object, _, _) => report(def, kind, path, errors),
        _ => {
            if !satisfies(def, kind, source) {
                report(def, kind, path, errors);
            }
        }
    }
}

fn report(def: &Definition, kind: DefKind, path: &SourcePath, errors: &mut Vec<ShapeError>) {
    let error = ShapeError::new(path.clone(), describe(def, Some(kind)), kind);
    trace!(path = %error.path, kind = %kind, "shape mismatch");
    errors.push(error);
}

/// Validates a present source value against a definition.
///
/// Returns `Validation::Success(())` when nothing mismatched, otherwise every
/// error in traversal order.
///
/// # Example
///
/// ```rust
/// use shapecheck::{validate, Definition};
/// use serde_json::json;
/// use stillwater::Validation;
///
/// let def = Definition::object([
///     ("a", Definition::string()),
///     ("b", Definition::object([("b1", Definition::string())])),
/// ]);
///
/// assert!(validate(&def, &json!({"a": "x", "b": {"b1": "y"}})).is_success());
///
/// match validate(&def, &json!({})) {
///     Validation::Failure(errors) => assert_eq!(
///         errors.messages(),
///         vec!["expected String at a", "expected Object {b1<String>} at b"]
///     ),
///     Validation::Success(()) => unreachable!(),
/// }
/// ```
pub fn validate(def: &Definition, source: &Value) -> ValidationResult {
    validate_source(def, Some(source))
}

/// Validates a possibly absent source value against a definition.
pub fn validate_source(def: &Definition, source: Option<&Value>) -> ValidationResult {
    let mut errors = Vec::new();
    collect_errors(def, source, &SourcePath::root(), &mut errors);

    match ShapeErrors::from_vec(errors) {
        None => Validation::Success(()),
        Some(errors) => {
            debug!(errors = errors.len(), "validation failed");
            Validation::Failure(errors)
        }
    }
}

/// Validates independent payloads against one definition in parallel.
///
/// Results are returned in the order of `sources`.
pub fn validate_batch(def: &Definition, sources: &[Value]) -> Vec<ValidationResult> {
    sources
        .par_iter()
        .map(|source| validate(def, source))
        .collect()
}

impl Definition {
    /// Validates `source` against this definition. See [`validate`].
    pub fn validate(&self, source: &Value) -> ValidationResult {
        validate(self, source)
    }

    /// Returns true if `source` satisfies this definition. See [`matches`].
    pub fn matches(&self, source: &Value) -> bool {
        matches(self, Some(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn messages(def: &Definition, source: Option<&Value>) -> Vec<String> {
        let mut errors = Vec::new();
        collect_errors(def, source, &SourcePath::root(), &mut errors);
        errors.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_silent_check_of_object_alternative() {
        let alternative =
            Definition::object([("a", Definition::number()), ("b", Definition::string())]);
        assert!(matches(&alternative, Some(&json!({"a": 1, "b": "b1"}))));
        assert!(!matches(&alternative, Some(&json!({"a": 1}))));
        assert!(!matches(&alternative, Some(&json!([]))));
    }

    #[test]
    fn test_silent_check_of_array_alternative() {
        let def = Definition::one_of([
            Definition::array_of(Definition::number()),
            Definition::string(),
        ]);
        assert!(matches(&def, Some(&json!([1, "2"]))));
        assert!(!matches(&def, Some(&json!([1, "x"]))));
        assert_eq!(
            messages(&def, Some(&json!([1, "x"]))),
            vec!["expected any from [Array<Number>, String]"]
        );
    }

    #[test]
    fn test_options_report_once() {
        let def = Definition::object([(
            "ff",
            Definition::one_of([
                Definition::string(),
                Definition::object([
                    ("ff1", Definition::boolean()),
                    ("ff2", Definition::string()),
                ]),
            ]),
        )]);
        let errors = messages(&def, Some(&json!({"ff": {"ff1": "no", "ff2": 3}})));
        assert_eq!(
            errors,
            vec!["expected any from [String, Object {ff1<Boolean>, ff2<String>}] at ff"]
        );
    }

    #[test]
    fn test_ommitable_alternative_accepts_absence() {
        let def = Definition::one_of([Definition::from("a"), Definition::absent()]);
        assert!(matches(&def, None));
        assert!(matches(&def, Some(&json!("a"))));
        assert!(!matches(&def, Some(&json!(null))));
    }

    #[test]
    fn test_empty_options_never_match() {
        let def = Definition::one_of(Vec::<Definition>::new());
        assert!(!matches(&def, None));
        assert_eq!(messages(&def, Some(&json!(1))), vec!["expected any from []"]);
    }

    #[test]
    fn test_ommitable_field() {
        let def = Definition::object([("a", Definition::absent())]);
        assert!(messages(&def, Some(&json!({}))).is_empty());
        assert_eq!(
            messages(&def, Some(&json!({"a": 1}))),
            vec!["expected (ommitable) at a"]
        );
    }

    #[test]
    fn test_container_mismatch_reports_at_container() {
        let def = Definition::array_of(Definition::number());
        assert_eq!(
            messages(&def, Some(&json!({"0": 1}))),
            vec!["expected Array<Number>"]
        );
        assert_eq!(messages(&def, None), vec!["expected Array<Number>"]);
    }

    #[test]
    fn test_array_without_element_definition_only_accepts_empty() {
        let def = Definition::any_array();
        assert!(messages(&def, Some(&json!([]))).is_empty());
        assert!(matches(&def, Some(&json!([]))));
        assert!(!matches(&def, Some(&json!([1]))));
        assert_eq!(
            messages(&def, Some(&json!([1]))),
            vec!["expected (ommitable) at [0]"]
        );
        assert_eq!(messages(&def, Some(&json!("a"))), vec!["expected Array<(any)>"]);

        let ommitable_elements = Definition::array_of(Definition::absent());
        assert_eq!(
            messages(&ommitable_elements, Some(&json!([1, "x"]))),
            vec!["expected (ommitable) at [0]", "expected (ommitable) at [1]"]
        );
    }

    #[test]
    fn test_nested_array_paths() {
        let def = Definition::array_of(Definition::array_of(Definition::object([(
            "x",
            Definition::boolean(),
        )])));
        let errors = messages(&def, Some(&json!([[{"x": true}], [{"x": true}, {"x": 0}]])));
        assert_eq!(errors, vec!["expected Boolean at [1][1].x"]);
    }

    #[test]
    fn test_extra_source_keys_are_ignored() {
        let def = Definition::object([("a", Definition::number())]);
        assert!(messages(&def, Some(&json!({"a": 1, "z": "extra"}))).is_empty());
    }

    #[test]
    fn test_empty_key_reports_at_parent() {
        let def = Definition::object([("a", Definition::object([("", Definition::number())]))]);
        assert_eq!(messages(&def, Some(&json!({"a": {"": "x"}}))), vec!["expected Number at a"]);
    }
}
