//! Renderer errors and scene styling.

use bezpen_core::SerializableColor;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Failed to parse scene style: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid scene style: {0}")]
    InvalidStyle(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Appearance of the control overlay drawn over each selected curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneStyle {
    /// Color of the arms joining an anchor to its handles.
    pub handle_line_color: SerializableColor,
    /// Width of the handle arms.
    pub handle_line_width: f64,
    /// Radius of anchor and handle dots.
    pub dot_radius: f64,
    /// Dot fill.
    pub dot_fill: SerializableColor,
    /// Dot border.
    pub dot_stroke: SerializableColor,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            handle_line_color: SerializableColor::new(59, 130, 246, 255), // Blue
            handle_line_width: 1.0,
            dot_radius: 3.0,
            dot_fill: SerializableColor::new(255, 255, 255, 255),
            dot_stroke: SerializableColor::new(59, 130, 246, 255),
        }
    }
}

impl SceneStyle {
    /// Parse and validate a JSON scene style. Missing fields take defaults.
    pub fn from_json(json: &str) -> RenderResult<Self> {
        let style: Self = serde_json::from_str(json)?;
        style.validate()?;
        Ok(style)
    }

    /// Check value ranges.
    pub fn validate(&self) -> RenderResult<()> {
        if !(self.dot_radius > 0.0) {
            return Err(RendererError::InvalidStyle(format!(
                "dot_radius must be positive, got {}",
                self.dot_radius
            )));
        }
        if !(self.handle_line_width > 0.0) {
            return Err(RendererError::InvalidStyle(format!(
                "handle_line_width must be positive, got {}",
                self.handle_line_width
            )));
        }
        Ok(())
    }
}
