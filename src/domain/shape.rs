//! Shape domain model
//!
//! A shape is a tagged union: the `shape` field names the variant and
//! determines which dimensions are present.
//!
//! Serialized form:
//! - Circle: `{"shape": "circle", "radius": 2}`
//! - Rectangle: `{"shape": "rectangle", "width": 4, "height": 6}`
//!
//! Dimensions are not validated. Negative values flow through the area
//! formulas unchanged.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Name of the discriminant field in the serialized form.
/// Must match the `tag` in the serde attribute on [`Shape`].
pub const TAG_FIELD: &str = "shape";

#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("Unrecognized shape variant: '{0}' (expected 'circle' or 'rectangle')")]
    UnrecognizedVariant(String),

    #[error("Missing discriminant field '{}'", TAG_FIELD)]
    MissingDiscriminant,

    #[error("Invalid shape JSON: {0}")]
    InvalidJson(String),
}

/// The discriminant of a [`Shape`], without its dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "circle" => Ok(ShapeKind::Circle),
            "rectangle" => Ok(ShapeKind::Rectangle),
            _ => Err(ShapeError::UnrecognizedVariant(s.trim().to_string())),
        }
    }
}

/// A two-dimensional shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case", deny_unknown_fields)]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
}

impl Shape {
    pub fn circle(radius: f64) -> Self {
        Shape::Circle { radius }
    }

    pub fn rectangle(width: f64, height: f64) -> Self {
        Shape::Rectangle { width, height }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Rectangle { .. } => ShapeKind::Rectangle,
        }
    }

    /// Returns the area of the shape
    pub fn area(&self) -> f64 {
        match *self {
            Shape::Circle { radius } => PI * radius.powi(2),
            Shape::Rectangle { width, height } => width * height,
        }
    }

    /// Parses a shape from its tagged JSON form.
    ///
    /// The discriminant is checked before the dimensions so that an unknown
    /// tag is reported as [`ShapeError::UnrecognizedVariant`] rather than a
    /// generic parse failure. Fields belonging to the other variant are
    /// rejected.
    pub fn from_json(input: &str) -> Result<Self, ShapeError> {
        let value: serde_json::Value =
            serde_json::from_str(input).map_err(|e| ShapeError::InvalidJson(e.to_string()))?;

        let object = value
            .as_object()
            .ok_or_else(|| ShapeError::InvalidJson("expected a JSON object".to_string()))?;

        let tag = match object.get(TAG_FIELD) {
            None | Some(serde_json::Value::Null) => return Err(ShapeError::MissingDiscriminant),
            Some(serde_json::Value::String(tag)) => tag,
            Some(other) => return Err(ShapeError::UnrecognizedVariant(other.to_string())),
        };

        // Exact match here; FromStr is lenient about case, the wire format is not
        if tag != "circle" && tag != "rectangle" {
            return Err(ShapeError::UnrecognizedVariant(tag.clone()));
        }

        serde_json::from_value(value).map_err(|e| ShapeError::InvalidJson(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ShapeError> {
        serde_json::to_string(self).map_err(|e| ShapeError::InvalidJson(e.to_string()))
    }
}

/// Computes the area of a shape.
///
/// - Circle: `π × radius²`
/// - Rectangle: `width × height`
pub fn calculate_area(shape: &Shape) -> f64 {
    shape.area()
}
