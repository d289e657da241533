//! Definition trees describing the expected shape of a source value.
//!
//! A [`Definition`] is plain data: markers, literals, keyed objects and
//! sequences. What a node *means* is inferred from its shape by
//! [`Definition::kind`]:
//!
//! - a sequence with exactly one element is an array whose elements all match it
//! - any other sequence is a list of alternatives
//! - a keyed object declares nested definitions per key
//! - a literal must be matched exactly
//!
//! # Example
//!
//! ```rust
//! use shapecheck::{DefKind, Definition};
//!
//! let payload = Definition::object([
//!     ("id", Definition::number()),
//!     ("tags", Definition::array_of(Definition::string())),
//!     ("mode", Definition::one_of(["fast", "slow"])),
//!     ("note", Definition::one_of([Definition::string(), Definition::absent()])),
//! ]);
//!
//! assert_eq!(payload.kind(), DefKind::Object);
//! ```

mod kind;

pub use kind::DefKind;

use indexmap::IndexMap;
use serde_json::Value;

use crate::value::format_number;

/// Built-in type markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Number,
    String,
    Boolean,
    /// Any keyed object; behaves like an object definition with no keys.
    Object,
    /// An array definition with no element definition; only elements that are
    /// absent pass, so in practice only empty arrays.
    Array,
}

/// A concrete scalar a source must equal exactly.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    Number(f64),
    String(String),
}

impl Literal {
    /// Strict equality against a source value. No coercion: `1` never equals
    /// `"1"` and `true` never equals `1`.
    pub fn equals(&self, source: Option<&Value>) -> bool {
        match (self, source) {
            (Literal::Bool(expected), Some(Value::Bool(actual))) => expected == actual,
            (Literal::Number(expected), Some(Value::Number(actual))) => {
                actual.as_f64() == Some(*expected)
            }
            (Literal::String(expected), Some(Value::String(actual))) => expected == actual,
            _ => false,
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Number(n) => f.write_str(&format_number(*n)),
            Literal::String(s) => f.write_str(s),
        }
    }
}

/// One node of a definition tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    /// No definition; the value may be missing.
    Absent,
    /// The value must be null.
    Null,
    /// A built-in type marker.
    Marker(Marker),
    /// Declared keys, in declaration order.
    Object(IndexMap<String, Definition>),
    /// One element: array-of. Any other length: alternatives.
    Sequence(Vec<Definition>),
    /// A concrete value to match exactly.
    Literal(Literal),
}

impl Definition {
    pub fn number() -> Self {
        Definition::Marker(Marker::Number)
    }

    pub fn string() -> Self {
        Definition::Marker(Marker::String)
    }

    pub fn boolean() -> Self {
        Definition::Marker(Marker::Boolean)
    }

    pub fn null() -> Self {
        Definition::Null
    }

    /// The ommitable marker. Inside alternatives it lets a missing value pass.
    pub fn absent() -> Self {
        Definition::Absent
    }

    /// Any keyed object, without declared keys.
    pub fn any_object() -> Self {
        Definition::Marker(Marker::Object)
    }

    /// An array without an element definition, described as `Array<(any)>`.
    pub fn any_array() -> Self {
        Definition::Marker(Marker::Array)
    }

    pub fn literal(value: impl Into<Literal>) -> Self {
        Definition::Literal(value.into())
    }

    /// A keyed object definition. Keys keep the order given here, which is
    /// also the order errors are reported in.
    pub fn object<K, D>(fields: impl IntoIterator<Item = (K, D)>) -> Self
    where
        K: Into<String>,
        D: Into<Definition>,
    {
        Definition::Object(
            fields
                .into_iter()
                .map(|(key, def)| (key.into(), def.into()))
                .collect(),
        )
    }

    /// An array whose every element must match `element`.
    pub fn array_of(element: impl Into<Definition>) -> Self {
        Definition::Sequence(vec![element.into()])
    }

    /// Alternatives tried in order; the first match wins.
    ///
    /// A single alternative is indistinguishable from [`Definition::array_of`]
    /// by shape and is classified as such.
    pub fn one_of<D: Into<Definition>>(alternatives: impl IntoIterator<Item = D>) -> Self {
        Definition::Sequence(alternatives.into_iter().map(Into::into).collect())
    }

    /// Classifies this node.
    pub fn kind(&self) -> DefKind {
        DefKind::of(self)
    }

    /// Declared keys of an object-kind node. Empty for anything else.
    pub(crate) fn fields(&self) -> impl Iterator<Item = (&str, &Definition)> {
        let fields = match self {
            Definition::Object(fields) => Some(fields),
            _ => None,
        };
        fields
            .into_iter()
            .flat_map(|fields| fields.iter().map(|(key, def)| (key.as_str(), def)))
    }

    /// Element definition of an array-of node. A node without one (the
    /// `Array` marker) checks its elements against [`Definition::Absent`].
    pub(crate) fn element(&self) -> &Definition {
        match self {
            Definition::Sequence(items) if items.len() == 1 => &items[0],
            _ => &ABSENT,
        }
    }

    /// Alternatives of an options node. Empty for anything else.
    pub(crate) fn alternatives(&self) -> &[Definition] {
        match self {
            Definition::Sequence(items) => items,
            _ => &[],
        }
    }
}

static ABSENT: Definition = Definition::Absent;

impl From<Marker> for Definition {
    fn from(marker: Marker) -> Self {
        Definition::Marker(marker)
    }
}

impl From<Literal> for Definition {
    fn from(literal: Literal) -> Self {
        Definition::Literal(literal)
    }
}

impl From<Vec<Definition>> for Definition {
    fn from(items: Vec<Definition>) -> Self {
        Definition::Sequence(items)
    }
}

impl From<Option<Definition>> for Definition {
    fn from(def: Option<Definition>) -> Self {
        def.unwrap_or(Definition::Absent)
    }
}

macro_rules! impl_literal_from {
    ($($ty:ty => |$v:ident| $body:expr),* $(,)?) => {
        $(
            impl From<$ty> for Literal {
                fn from($v: $ty) -> Self {
                    $body
                }
            }

            impl From<$ty> for Definition {
                fn from(value: $ty) -> Self {
                    Definition::Literal(Literal::from(value))
                }
            }
        )*
    };
}

impl_literal_from! {
    bool => |v| Literal::Bool(v),
    f64 => |v| Literal::Number(v),
    i32 => |v| Literal::Number(f64::from(v)),
    &str => |v| Literal::String(v.to_string()),
    String => |v| Literal::String(v),
}

// Definitions are shared across threads by the registry.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Definition>();
    assert_sync::<Definition>();
};
