//! Shape definitions and render styles.

mod line;

pub use line::{
    CONTAINS_TOLERANCE, ImplicitEquation, Line, PARALLEL_EPSILON, TRANSLATE_HALF_LENGTH,
};

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn cyan() -> Self {
        Self::new(0, 255, 255, 255)
    }

    pub const fn red() -> Self {
        Self::new(255, 0, 0, 255)
    }

    pub const fn dark_gray() -> Self {
        Self::new(51, 51, 51, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// How lines are drawn by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Stroke color.
    pub color: SerializableColor,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: SerializableColor::cyan(),
            stroke_width: 3.0,
        }
    }
}

impl LineStyle {
    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Color {
        self.color.into()
    }
}

/// How points are drawn by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    /// Fill color.
    pub color: SerializableColor,
    /// Point diameter in pixels.
    pub size: f64,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            color: SerializableColor::red(),
            size: 10.0,
        }
    }
}

impl PointStyle {
    /// Get the fill color as a peniko Color.
    pub fn fill(&self) -> Color {
        self.color.into()
    }
}
