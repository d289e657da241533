//! Error types for shape mismatches.
//!
//! Mismatches are data: a failed validation returns [`ShapeErrors`], never a
//! panic.

mod shape_error;

pub use shape_error::{ShapeError, ShapeErrors};
