//! Editor configuration.

use crate::error::ConfigError;
use crate::style::CurveStyle;
use serde::{Deserialize, Serialize};

/// Default pick radius around anchors and handles.
pub const DEFAULT_PICK_RADIUS: f64 = 5.0;

/// Tunables shared by every curve in a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum distance at which a pointer hits an anchor or handle.
    pub pick_radius: f64,
    /// Style given to curves created without an explicit style.
    pub default_style: CurveStyle,
    /// Prefix for generated curve names ("Curve 1", "Curve 2", ...).
    pub curve_name_prefix: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            pick_radius: DEFAULT_PICK_RADIUS,
            default_style: CurveStyle::default(),
            curve_name_prefix: "Curve".to_string(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.pick_radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "pick_radius must be positive, got {}",
                self.pick_radius
            )));
        }
        if !(self.default_style.stroke_width > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "default_style.stroke_width must be positive, got {}",
                self.default_style.stroke_width
            )));
        }
        Ok(())
    }
}
