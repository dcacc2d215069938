//! Domain models for shape-area
//!
//! Contains the area computation without any I/O concerns.

mod shape;

pub use shape::{calculate_area, Shape, ShapeError, ShapeKind, TAG_FIELD};
