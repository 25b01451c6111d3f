//! Rendering collaborator abstraction.
//!
//! The curve engine never paints anything itself. It creates opaque visual
//! primitives through a [`CurveRenderer`], keeps their ids, and pushes new
//! geometry to them after every edit.

use crate::segment::Segment;
use crate::style::CurveStyle;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Opaque handle to a visual primitive owned by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PrimitiveId(pub u64);

/// Trait for rendering backends.
///
/// Handle lines and points belong to an owning curve path so that the whole
/// control overlay of one curve can be shown or hidden at once.
pub trait CurveRenderer {
    /// Create the stroked path primitive of a curve.
    fn add_curve_path(&mut self) -> PrimitiveId;

    /// Create a handle arm from an anchor to a control point.
    fn add_handle_line(&mut self, owner: PrimitiveId, from: Point, to: Point) -> PrimitiveId;

    /// Create a dot marking an anchor or control point.
    fn add_handle_point(&mut self, owner: PrimitiveId, center: Point) -> PrimitiveId;

    /// Move both ends of a handle arm.
    fn update_line(&mut self, id: PrimitiveId, from: Point, to: Point);

    /// Move a dot.
    fn update_point_center(&mut self, id: PrimitiveId, center: Point);

    /// Replace the geometry and style of a curve path.
    fn update_path(&mut self, id: PrimitiveId, segments: &[Segment], closed: bool, style: &CurveStyle);

    /// Detach a primitive.
    fn remove(&mut self, id: PrimitiveId);

    /// Show or hide the control overlay (handle lines and points) of a curve.
    fn set_overlay_visible(&mut self, curve: PrimitiveId, visible: bool);
}

/// Renderer that hands out ids and draws nothing.
#[derive(Debug, Default)]
pub struct NullRenderer {
    next_id: u64,
}

impl NullRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&mut self) -> PrimitiveId {
        self.next_id += 1;
        PrimitiveId(self.next_id)
    }
}

impl CurveRenderer for NullRenderer {
    fn add_curve_path(&mut self) -> PrimitiveId {
        self.next()
    }

    fn add_handle_line(&mut self, _owner: PrimitiveId, _from: Point, _to: Point) -> PrimitiveId {
        self.next()
    }

    fn add_handle_point(&mut self, _owner: PrimitiveId, _center: Point) -> PrimitiveId {
        self.next()
    }

    fn update_line(&mut self, _id: PrimitiveId, _from: Point, _to: Point) {}

    fn update_point_center(&mut self, _id: PrimitiveId, _center: Point) {}

    fn update_path(&mut self, _id: PrimitiveId, _segments: &[Segment], _closed: bool, _style: &CurveStyle) {}

    fn remove(&mut self, _id: PrimitiveId) {}

    fn set_overlay_visible(&mut self, _curve: PrimitiveId, _visible: bool) {}
}

/// Renderer that keeps the latest state of every primitive, for tests.
#[cfg(test)]
pub(crate) mod recording {
    use super::*;
    use std::collections::HashMap;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Recorded {
        Path { segments: Vec<Segment>, closed: bool, style: Option<CurveStyle> },
        Line { owner: PrimitiveId, from: Point, to: Point },
        Dot { owner: PrimitiveId, center: Point },
    }

    #[derive(Debug, Default)]
    pub struct RecordingRenderer {
        next_id: u64,
        pub live: HashMap<PrimitiveId, Recorded>,
        pub hidden_overlays: Vec<PrimitiveId>,
    }

    impl RecordingRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        fn insert(&mut self, recorded: Recorded) -> PrimitiveId {
            self.next_id += 1;
            let id = PrimitiveId(self.next_id);
            self.live.insert(id, recorded);
            id
        }

        /// Number of handle lines and dots owned by `curve`.
        pub fn overlay_count(&self, curve: PrimitiveId) -> usize {
            self.live
                .values()
                .filter(|r| match r {
                    Recorded::Line { owner, .. } | Recorded::Dot { owner, .. } => *owner == curve,
                    Recorded::Path { .. } => false,
                })
                .count()
        }

        pub fn dot_centers(&self, curve: PrimitiveId) -> Vec<Point> {
            self.live
                .values()
                .filter_map(|r| match r {
                    Recorded::Dot { owner, center } if *owner == curve => Some(*center),
                    _ => None,
                })
                .collect()
        }

        pub fn path(&self, id: PrimitiveId) -> Option<(&[Segment], bool)> {
            match self.live.get(&id) {
                Some(Recorded::Path { segments, closed, .. }) => Some((segments, *closed)),
                _ => None,
            }
        }
    }

    impl CurveRenderer for RecordingRenderer {
        fn add_curve_path(&mut self) -> PrimitiveId {
            self.insert(Recorded::Path {
                segments: Vec::new(),
                closed: false,
                style: None,
            })
        }

        fn add_handle_line(&mut self, owner: PrimitiveId, from: Point, to: Point) -> PrimitiveId {
            self.insert(Recorded::Line { owner, from, to })
        }

        fn add_handle_point(&mut self, owner: PrimitiveId, center: Point) -> PrimitiveId {
            self.insert(Recorded::Dot { owner, center })
        }

        fn update_line(&mut self, id: PrimitiveId, new_from: Point, new_to: Point) {
            if let Some(Recorded::Line { from, to, .. }) = self.live.get_mut(&id) {
                *from = new_from;
                *to = new_to;
            }
        }

        fn update_point_center(&mut self, id: PrimitiveId, new_center: Point) {
            if let Some(Recorded::Dot { center, .. }) = self.live.get_mut(&id) {
                *center = new_center;
            }
        }

        fn update_path(&mut self, id: PrimitiveId, new_segments: &[Segment], new_closed: bool, new_style: &CurveStyle) {
            if let Some(Recorded::Path { segments, closed, style }) = self.live.get_mut(&id) {
                *segments = new_segments.to_vec();
                *closed = new_closed;
                *style = Some(*new_style);
            }
        }

        fn remove(&mut self, id: PrimitiveId) {
            self.live.remove(&id);
        }

        fn set_overlay_visible(&mut self, curve: PrimitiveId, visible: bool) {
            if visible {
                self.hidden_overlays.retain(|&c| c != curve);
            } else if !self.hidden_overlays.contains(&curve) {
                self.hidden_overlays.push(curve);
            }
        }
    }
}
