//! Shape mismatch error types.
//!
//! This module provides [`ShapeError`] for a single mismatch and
//! [`ShapeErrors`] for the ordered, non-empty collection a failed validation
//! returns.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::definition::DefKind;
use crate::path::SourcePath;

/// A single mismatch between a source value and its definition.
///
/// Displays as `expected <description>`, followed by ` at <path>` unless the
/// mismatch is at the root.
///
/// # Example
///
/// ```rust
/// use shapecheck::{DefKind, ShapeError, SourcePath};
///
/// let error = ShapeError::new(
///     SourcePath::root().push_key("cc").push_index(1).push_key("cc2"),
///     "Number",
///     DefKind::Number,
/// );
///
/// assert_eq!(error.to_string(), "expected Number at cc[1].cc2");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeError {
    /// Where in the source the mismatch occurred.
    pub path: SourcePath,
    /// Description of the definition node that was not satisfied.
    pub expected: String,
    /// Kind of the definition node that was not satisfied.
    pub kind: DefKind,
}

impl ShapeError {
    pub fn new(path: SourcePath, expected: impl Into<String>, kind: DefKind) -> Self {
        Self {
            path,
            expected: expected.into(),
            kind,
        }
    }
}

impl Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}", self.expected)?;
        if !self.path.is_root() {
            write!(f, " at {}", self.path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ShapeError {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ShapeError>();
    assert_sync::<ShapeError>();
};

/// A non-empty, traversal-ordered collection of shape errors.
///
/// Errors appear in the order the source was walked: object keys in
/// declaration order, array elements by increasing index.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeErrors(NonEmptyVec<ShapeError>);

impl ShapeErrors {
    /// Creates a `ShapeErrors` containing a single error.
    pub fn single(error: ShapeError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `ShapeErrors` from a `Vec`, or `None` if it is empty.
    pub fn from_vec(errors: Vec<ShapeError>) -> Option<Self> {
        let mut errors = errors.into_iter();
        let head = NonEmptyVec::singleton(errors.next()?);
        Some(Self(errors.fold(head, |acc, error| {
            acc.combine(NonEmptyVec::singleton(error))
        })))
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &ShapeError> {
        self.0.iter()
    }

    /// Returns the first error in traversal order.
    pub fn first(&self) -> &ShapeError {
        self.0.head()
    }

    /// Returns all errors at the specified path.
    pub fn at_path(&self, path: &SourcePath) -> Vec<&ShapeError> {
        self.0.iter().filter(|e| &e.path == path).collect()
    }

    /// Returns all errors raised by definition nodes of the given kind.
    pub fn of_kind(&self, kind: DefKind) -> Vec<&ShapeError> {
        self.0.iter().filter(|e| e.kind == kind).collect()
    }

    /// The plain message sequence, e.g. `["expected String at a"]`.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Converts this collection into a `Vec<ShapeError>`.
    pub fn into_vec(self) -> Vec<ShapeError> {
        self.0.into_vec()
    }
}

impl Semigroup for ShapeErrors {
    fn combine(self, other: Self) -> Self {
        ShapeErrors(self.0.combine(other.0))
    }
}

impl Display for ShapeErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "shape mismatch with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ShapeErrors {}

impl IntoIterator for ShapeErrors {
    type Item = ShapeError;
    type IntoIter = std::vec::IntoIter<ShapeError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ShapeErrors>();
    assert_sync::<ShapeErrors>();
};
