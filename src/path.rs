//! Locations inside a source value, as they appear in error messages.
//!
//! A [`SourcePath`] renders keys joined by `.` and indices as `[k]`, with no
//! leading separator: `a.b`, `cc[1].cc2`, `[2]`. The root renders as the empty
//! string, and errors at the root omit the ` at <path>` suffix entirely.

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Step {
    Key(String),
    Index(usize),
}

/// Where a mismatch was found, relative to the validated root.
///
/// Extending a path returns a new value; the matcher hands each child its own
/// copy, so `items[0]` and `items[1]` both grow from the same `items`.
///
/// # Example
///
/// ```rust
/// use shapecheck::SourcePath;
///
/// let path = SourcePath::root()
///     .push_key("cc")
///     .push_index(1)
///     .push_key("cc2");
///
/// assert_eq!(path.to_string(), "cc[1].cc2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SourcePath(Vec<Step>);

impl SourcePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Descends into an object field.
    ///
    /// Empty keys contribute nothing, so a field declared as `""` reports at
    /// its parent's location.
    pub fn push_key(&self, key: impl Into<String>) -> Self {
        let key = key.into();
        if key.is_empty() {
            return self.clone();
        }
        self.then(Step::Key(key))
    }

    /// Descends into an array element.
    pub fn push_index(&self, index: usize) -> Self {
        self.then(Step::Index(index))
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    fn then(&self, step: Step) -> Self {
        let mut steps = Vec::with_capacity(self.0.len() + 1);
        steps.extend_from_slice(&self.0);
        steps.push(step);
        Self(steps)
    }
}

impl Display for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for step in &self.0 {
            match step {
                Step::Key(key) if first => f.write_str(key)?,
                Step::Key(key) => write!(f, ".{}", key)?,
                Step::Index(index) => write!(f, "[{}]", index)?,
            }
            first = false;
        }
        Ok(())
    }
}
