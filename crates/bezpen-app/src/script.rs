//! Gesture scripts: recorded host actions replayed against a collection.

use anyhow::Context;
use bezpen_core::{CurveStyle, EditMode, PointerEvent};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One host action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScriptStep {
    /// Create a curve and make it active. Uses the current style when absent.
    NewCurve(Option<CurveStyle>),
    /// Change the active curve's edit mode.
    SetMode(EditMode),
    /// Raw pointer event.
    Pointer(PointerEvent),
    /// Press and release at one position.
    Click(Point),
    /// Press, move through each position, release at the last one.
    Drag(Vec<Point>),
    /// Activate the curve at an index.
    Select(usize),
    /// Open or close the active curve.
    ToggleClosed,
    /// Remove every segment of the active curve.
    Clear,
    /// Delete the active curve.
    DeleteActive,
    /// Set the shared stroke width.
    SetStrokeWidth(f64),
}

impl ScriptStep {
    /// Expand the step into the pointer events it stands for.
    pub fn pointer_events(&self) -> Vec<PointerEvent> {
        match self {
            ScriptStep::Pointer(event) => vec![*event],
            ScriptStep::Click(position) => vec![
                PointerEvent::Down { position: *position },
                PointerEvent::Up { position: *position },
            ],
            ScriptStep::Drag(path) => {
                let (Some(first), Some(last)) = (path.first(), path.last()) else {
                    return Vec::new();
                };
                let mut events = vec![PointerEvent::Down { position: *first }];
                events.extend(path[1..].iter().map(|&position| PointerEvent::Move { position }));
                events.push(PointerEvent::Up { position: *last });
                events
            }
            _ => Vec::new(),
        }
    }
}

/// An ordered list of steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read a script file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid script {}", path.display()))
    }
}
