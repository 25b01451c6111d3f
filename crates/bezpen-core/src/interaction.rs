//! Edit modes and the per-gesture interaction state.

use crate::hit::{Feature, Hit};
use serde::{Deserialize, Serialize};

/// What a pointer gesture on a curve means. Set by the host between gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EditMode {
    /// Pointer events are ignored.
    #[default]
    None,
    /// Click appends a point; dragging shapes handles.
    Add,
    /// Reserved. Hits are recorded but nothing is edited.
    Insert,
    /// Dragging translates the whole curve.
    Move,
    /// Clicking an anchor deletes its segment.
    Delete,
}

impl EditMode {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            EditMode::None => "None",
            EditMode::Add => "Add",
            EditMode::Insert => "Insert",
            EditMode::Move => "Move",
            EditMode::Delete => "Delete",
        }
    }
}

/// What a drag in progress is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragTarget {
    Anchor,
    IncomingHandle,
    OutgoingHandle,
    /// Outgoing handle follows the pointer, incoming handle mirrors it.
    MirroredHandles,
}

impl From<Feature> for DragTarget {
    fn from(feature: Feature) -> Self {
        match feature {
            Feature::Anchor => DragTarget::Anchor,
            Feature::IncomingHandle => DragTarget::IncomingHandle,
            Feature::OutgoingHandle => DragTarget::OutgoingHandle,
        }
    }
}

/// State of a pointer interaction with a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging {
        target: DragTarget,
        index: usize,
    },
}

impl InteractionState {
    /// Returns true if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, InteractionState::Dragging { .. })
    }
}

impl From<Hit> for InteractionState {
    fn from(hit: Hit) -> Self {
        InteractionState::Dragging {
            target: hit.feature.into(),
            index: hit.index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode() {
        assert_eq!(EditMode::default(), EditMode::None);
    }

    #[test]
    fn test_mode_from_json() {
        let mode: EditMode = serde_json::from_str(r#""Move""#).unwrap();
        assert_eq!(mode, EditMode::Move);
        assert_eq!(mode.name(), "Move");
    }

    #[test]
    fn test_hit_starts_drag() {
        let state = InteractionState::from(Hit::new(Feature::OutgoingHandle, 3));
        assert_eq!(
            state,
            InteractionState::Dragging {
                target: DragTarget::OutgoingHandle,
                index: 3
            }
        );
        assert!(state.is_dragging());
        assert!(!InteractionState::default().is_dragging());
    }
}
