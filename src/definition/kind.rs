//! Structural classification of definition nodes.

use std::fmt::{self, Display};

use super::{Definition, Marker};

/// What a definition node expresses, inferred from its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefKind {
    Ommitable,
    Null,
    Number,
    String,
    Boolean,
    Object,
    ArrayOf,
    Options,
    Unknown,
}

impl DefKind {
    /// Classifies a definition node.
    ///
    /// Sequences are checked first: one element makes an array-of, any other
    /// length (including zero) makes alternatives.
    pub fn of(def: &Definition) -> Self {
        match def {
            Definition::Sequence(items) if items.len() == 1 => DefKind::ArrayOf,
            Definition::Sequence(_) => DefKind::Options,
            Definition::Absent => DefKind::Ommitable,
            Definition::Null => DefKind::Null,
            Definition::Marker(Marker::Number) => DefKind::Number,
            Definition::Marker(Marker::String) => DefKind::String,
            Definition::Marker(Marker::Boolean) => DefKind::Boolean,
            Definition::Marker(Marker::Array) => DefKind::ArrayOf,
            Definition::Marker(Marker::Object) | Definition::Object(_) => DefKind::Object,
            Definition::Literal(_) => DefKind::Unknown,
        }
    }

    /// Tag used in object field summaries, e.g. `b<Object>`.
    pub fn tag(self) -> &'static str {
        match self {
            DefKind::Ommitable => "Ommitable",
            DefKind::Null => "Null",
            DefKind::Number => "Number",
            DefKind::String => "String",
            DefKind::Boolean => "Boolean",
            DefKind::Object => "Object",
            DefKind::ArrayOf => "Array",
            DefKind::Options => "Options",
            DefKind::Unknown => "Unknown",
        }
    }
}

impl Display for DefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
