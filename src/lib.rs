//! shape-area - Area of a tagged two-dimensional shape
//!
//! A shape is either a circle or a rectangle, distinguished by its `shape`
//! tag. [`calculate_area`] dispatches on the variant and returns the area.

pub mod domain;
pub mod cli;

pub use domain::{calculate_area, Shape, ShapeError, ShapeKind};
