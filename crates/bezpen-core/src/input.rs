//! Pointer events delivered by the host.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event carrying a single position in curve coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

/// Tracks whether a gesture is in progress.
///
/// Hosts usually report motion whether or not a button is held; only motion
/// between a down and an up belongs to a gesture.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    /// Last reported pointer position.
    pub position: Point,
    /// Start position of the current gesture.
    pub drag_start: Option<Point>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a pointer event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => {
                self.position = position;
                self.drag_start = Some(position);
            }
            PointerEvent::Move { position } => {
                self.position = position;
            }
            PointerEvent::Up { position } => {
                self.position = position;
                self.drag_start = None;
            }
        }
    }

    /// Whether the pointer is currently pressed.
    pub fn is_pressed(&self) -> bool {
        self.drag_start.is_some()
    }
}
