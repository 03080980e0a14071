//! Vector sprite component and shape descriptors.
//!
//! A [`VectorSprite`] draws an outline [`Shape`] at the entity's position.
//! Shapes carry their own color as a string; the render surface decides how
//! to interpret it.

use serde::{Deserialize, Serialize};

use crate::ecs::component::{Component, ComponentKind};
use crate::error::{EngineError, Result};

pub const SHAPE: &str = "shape";

/// Geometric descriptor drawn by the basic renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Circle { radius: f64, color: String },
    Square { width: f64, color: String },
}

fn check_size(what: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EngineError::InvalidShape(format!(
            "{what} must be positive, got {value}"
        )))
    }
}

impl Shape {
    pub fn circle(radius: f64, color: impl Into<String>) -> Result<Self> {
        Ok(Shape::Circle {
            radius: check_size("radius", radius)?,
            color: color.into(),
        })
    }

    pub fn square(width: f64, color: impl Into<String>) -> Result<Self> {
        Ok(Shape::Square {
            width: check_size("width", width)?,
            color: color.into(),
        })
    }

    /// Build a shape from its tag name and a size (radius or width).
    pub fn from_tag(tag: &str, size: f64, color: impl Into<String>) -> Result<Self> {
        match tag {
            "circle" => Shape::circle(size, color),
            "square" => Shape::square(size, color),
            other => Err(EngineError::UnknownShape(other.to_string())),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::Square { .. } => "square",
        }
    }

    pub fn color(&self) -> &str {
        match self {
            Shape::Circle { color, .. } | Shape::Square { color, .. } => color,
        }
    }
}

#[derive(Clone, Debug)]
pub struct VectorSprite {
    pub shape: Shape,
}

impl VectorSprite {
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }
}

impl From<VectorSprite> for Component {
    fn from(s: VectorSprite) -> Self {
        Component::new(ComponentKind::VectorSprite).with(SHAPE, s.shape)
    }
}
