//! Human-readable descriptions of definition nodes.
//!
//! Descriptions only ever appear in error messages (`expected <description>`);
//! matching never consults them.

use crate::definition::{DefKind, Definition};

/// Renders a definition node, classifying it first when `kind` is `None`.
///
/// Object fields are summarized shallowly: literal fields print their value
/// (`d: true`), every other field prints its kind tag (`b<Object>`).
///
/// # Example
///
/// ```rust
/// use shapecheck::{describe, Definition};
///
/// let def = Definition::one_of([
///     Definition::object([("a", Definition::number()), ("b", Definition::string())]),
///     Definition::object([("d", true)]),
/// ]);
///
/// assert_eq!(
///     describe(&def, None),
///     "any from [Object {a<Number>, b<String>}, Object {d: true}]"
/// );
/// ```
pub fn describe(def: &Definition, kind: Option<DefKind>) -> String {
    match kind.unwrap_or_else(|| def.kind()) {
        DefKind::Options => {
            let alternatives: Vec<String> = def
                .alternatives()
                .iter()
                .map(|alternative| describe(alternative, None))
                .collect();
            format!("any from [{}]", alternatives.join(", "))
        }
        DefKind::Object => {
            let fields: Vec<String> = def
                .fields()
                .map(|(key, field)| match field.kind() {
                    DefKind::Unknown => {
                        format!("{}: {}", key, describe(field, Some(DefKind::Unknown)))
                    }
                    kind => format!("{}<{}>", key, kind.tag()),
                })
                .collect();
            format!("Object {{{}}}", fields.join(", "))
        }
        DefKind::ArrayOf => match def.element() {
            Definition::Absent => "Array<(any)>".to_string(),
            element => format!("Array<{}>", describe(element, None)),
        },
        DefKind::Null => "null".to_string(),
        DefKind::Boolean => "Boolean".to_string(),
        DefKind::Number => "Number".to_string(),
        DefKind::String => "String".to_string(),
        DefKind::Ommitable => "(ommitable)".to_string(),
        DefKind::Unknown => match def {
            Definition::Literal(literal) => literal.to_string(),
            other => other.kind().tag().to_string(),
        },
    }
}
