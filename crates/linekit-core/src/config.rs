//! Editor tuning parameters.

use crate::collections::CAPTURE_RADIUS;
use crate::shapes::{
    CONTAINS_TOLERANCE, LineStyle, PARALLEL_EPSILON, PointStyle, TRANSLATE_HALF_LENGTH,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid value for `{field}`: {value}")]
    Invalid { field: &'static str, value: f64 },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Hit-test tolerances, translation behaviour and render styles.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Perpendicular distance for a click to hit a line.
    pub line_tolerance: f64,
    /// Distance for a click to hit a point.
    pub capture_radius: f64,
    /// Determinant threshold below which two lines count as parallel.
    pub parallel_epsilon: f64,
    /// Distance from the anchor to each endpoint after moving a line.
    pub translate_half_length: f64,
    pub line_style: LineStyle,
    pub point_style: PointStyle,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            line_tolerance: CONTAINS_TOLERANCE,
            capture_radius: CAPTURE_RADIUS,
            parallel_epsilon: PARALLEL_EPSILON,
            translate_half_length: TRANSLATE_HALF_LENGTH,
            line_style: LineStyle::default(),
            point_style: PointStyle::default(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        log::info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// All tolerances and sizes must be finite and positive.
    pub fn validate(&self) -> ConfigResult<()> {
        let fields = [
            ("line_tolerance", self.line_tolerance),
            ("capture_radius", self.capture_radius),
            ("parallel_epsilon", self.parallel_epsilon),
            ("translate_half_length", self.translate_half_length),
            ("line_style.stroke_width", self.line_style.stroke_width),
            ("point_style.size", self.point_style.size),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid { field, value });
            }
        }
        Ok(())
    }
}
