//! # Shapecheck
//!
//! Validates arbitrary runtime values against declarative shape definitions
//! and reports every mismatch as a path-qualified message.
//!
//! ## Overview
//!
//! A [`Definition`] is built from ordinary data: type markers, literals, keyed
//! objects and sequences. Its meaning is inferred from its shape. A
//! one-element sequence is an array of that element, any other sequence is a
//! list of alternatives, and a literal must match exactly.
//!
//! Validation never stops at the first problem. Every mismatch in the tree
//! is collected, in traversal order, as a [`ShapeError`] that renders as
//! `expected <description> at <path>`. Success is the explicit
//! `Validation::Success(())`, never an empty error list.
//!
//! ## Core Types
//!
//! - [`Definition`]: a definition tree node
//! - [`DefKind`]: what a definition node expresses
//! - [`SourcePath`]: location of a value inside the source (`cc[1].cc2`)
//! - [`ShapeError`] / [`ShapeErrors`]: a mismatch / the non-empty list of them
//! - [`DefinitionRegistry`]: named definitions shared across threads
//!
//! ## Example
//!
//! ```rust
//! use shapecheck::{validate, Definition};
//! use serde_json::json;
//! use stillwater::Validation;
//!
//! let def = Definition::array_of(Definition::number());
//!
//! assert!(validate(&def, &json!([1, 2, "3"])).is_success());
//!
//! match validate(&def, &json!([1, 2, "a"])) {
//!     Validation::Failure(errors) => {
//!         assert_eq!(errors.messages(), vec!["expected Number at [2]"]);
//!     }
//!     Validation::Success(()) => unreachable!(),
//! }
//! ```

pub mod definition;
pub mod describe;
pub mod error;
pub mod matcher;
pub mod path;
pub mod registry;
pub mod value;

pub use definition::{DefKind, Definition, Literal, Marker};
pub use describe::describe;
pub use error::{ShapeError, ShapeErrors};
pub use matcher::{collect_errors, matches, validate, validate_batch, validate_source};
pub use path::SourcePath;
pub use registry::{DefinitionRegistry, RegistryError};
pub use value::ValueKind;

/// Outcome of a validation: `Success(())` or every mismatch found.
pub type ValidationResult = stillwater::Validation<(), ShapeErrors>;
