//! Retained scene of curve paths and control overlays.

use crate::renderer::SceneStyle;
use bezpen_core::render::{CurveRenderer, PrimitiveId};
use bezpen_core::segment::to_bez_path;
use bezpen_core::{CurveStyle, Segment};
use kurbo::{BezPath, Circle, Line, Point, Rect, Shape};
use peniko::Color;
use std::collections::{BTreeMap, HashSet};

/// A retained primitive.
#[derive(Debug, Clone)]
enum Primitive {
    Path {
        segments: Vec<Segment>,
        closed: bool,
        style: CurveStyle,
    },
    Line {
        owner: PrimitiveId,
        line: Line,
    },
    Dot {
        owner: PrimitiveId,
        center: Point,
    },
}

impl Primitive {
    fn owner(&self) -> Option<PrimitiveId> {
        match self {
            Primitive::Path { .. } => None,
            Primitive::Line { owner, .. } | Primitive::Dot { owner, .. } => Some(*owner),
        }
    }
}

/// One drawing command, ready for a vector backend.
#[derive(Debug, Clone)]
pub enum DrawItem {
    Stroke { path: BezPath, color: Color, width: f64 },
    Fill { path: BezPath, color: Color },
}

/// Counts reported after a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneStats {
    pub paths: usize,
    pub visible_overlays: usize,
    pub hidden_overlays: usize,
}

/// Renderer that keeps every primitive and turns them into a display list.
///
/// Primitive ids grow monotonically, so id order is creation order. Paths are
/// drawn first, overlays on top of them.
#[derive(Debug, Default)]
pub struct SceneRenderer {
    style: SceneStyle,
    next_id: u64,
    primitives: BTreeMap<PrimitiveId, Primitive>,
    hidden: HashSet<PrimitiveId>,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: SceneStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn style(&self) -> &SceneStyle {
        &self.style
    }

    /// Number of live primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Returns true if the overlay owned by `curve` is drawn.
    pub fn is_overlay_visible(&self, curve: PrimitiveId) -> bool {
        !self.hidden.contains(&curve)
    }

    pub fn stats(&self) -> SceneStats {
        let mut stats = SceneStats::default();
        for primitive in self.primitives.values() {
            match primitive.owner() {
                None => stats.paths += 1,
                Some(owner) if self.hidden.contains(&owner) => stats.hidden_overlays += 1,
                Some(_) => stats.visible_overlays += 1,
            }
        }
        stats
    }

    /// Bounding box of every non-empty curve path.
    pub fn bounds(&self) -> Option<Rect> {
        self.curve_paths()
            .map(|(path, _)| path.bounding_box())
            .reduce(|a, b| a.union(b))
    }

    /// Build the display list for the current frame.
    pub fn display_list(&self) -> Vec<DrawItem> {
        let mut items: Vec<DrawItem> = self
            .curve_paths()
            .map(|(path, style)| DrawItem::Stroke {
                path,
                color: style.stroke(),
                width: style.stroke_width,
            })
            .collect();

        let line_color: Color = self.style.handle_line_color.into();
        let dot_fill: Color = self.style.dot_fill.into();
        let dot_stroke: Color = self.style.dot_stroke.into();
        for primitive in self.primitives.values() {
            match primitive {
                Primitive::Line { owner, line } if self.is_overlay_visible(*owner) => {
                    items.push(DrawItem::Stroke {
                        path: line.to_path(0.1),
                        color: line_color,
                        width: self.style.handle_line_width,
                    });
                }
                Primitive::Dot { owner, center } if self.is_overlay_visible(*owner) => {
                    let path = Circle::new(*center, self.style.dot_radius).to_path(0.1);
                    items.push(DrawItem::Fill {
                        path: path.clone(),
                        color: dot_fill,
                    });
                    items.push(DrawItem::Stroke {
                        path,
                        color: dot_stroke,
                        width: self.style.handle_line_width,
                    });
                }
                _ => {}
            }
        }
        items
    }

    fn curve_paths(&self) -> impl Iterator<Item = (BezPath, &CurveStyle)> {
        self.primitives.values().filter_map(|primitive| match primitive {
            Primitive::Path {
                segments,
                closed,
                style,
            } if !segments.is_empty() => Some((to_bez_path(segments, *closed), style)),
            _ => None,
        })
    }

    fn insert(&mut self, primitive: Primitive) -> PrimitiveId {
        self.next_id += 1;
        let id = PrimitiveId(self.next_id);
        self.primitives.insert(id, primitive);
        id
    }
}

impl CurveRenderer for SceneRenderer {
    fn add_curve_path(&mut self) -> PrimitiveId {
        self.insert(Primitive::Path {
            segments: Vec::new(),
            closed: false,
            style: CurveStyle::default(),
        })
    }

    fn add_handle_line(&mut self, owner: PrimitiveId, from: Point, to: Point) -> PrimitiveId {
        self.insert(Primitive::Line {
            owner,
            line: Line::new(from, to),
        })
    }

    fn add_handle_point(&mut self, owner: PrimitiveId, center: Point) -> PrimitiveId {
        self.insert(Primitive::Dot { owner, center })
    }

    fn update_line(&mut self, id: PrimitiveId, from: Point, to: Point) {
        match self.primitives.get_mut(&id) {
            Some(Primitive::Line { line, .. }) => *line = Line::new(from, to),
            _ => log::warn!("update_line: no line primitive {id:?}"),
        }
    }

    fn update_point_center(&mut self, id: PrimitiveId, new_center: Point) {
        match self.primitives.get_mut(&id) {
            Some(Primitive::Dot { center, .. }) => *center = new_center,
            _ => log::warn!("update_point_center: no dot primitive {id:?}"),
        }
    }

    fn update_path(&mut self, id: PrimitiveId, new_segments: &[Segment], new_closed: bool, new_style: &CurveStyle) {
        match self.primitives.get_mut(&id) {
            Some(Primitive::Path {
                segments,
                closed,
                style,
            }) => {
                segments.clear();
                segments.extend_from_slice(new_segments);
                *closed = new_closed;
                *style = *new_style;
            }
            _ => log::warn!("update_path: no path primitive {id:?}"),
        }
    }

    fn remove(&mut self, id: PrimitiveId) {
        if self.primitives.remove(&id).is_none() {
            log::warn!("remove: unknown primitive {id:?}");
        }
        self.hidden.remove(&id);
    }

    fn set_overlay_visible(&mut self, curve: PrimitiveId, visible: bool) {
        if visible {
            self.hidden.remove(&curve);
        } else {
            self.hidden.insert(curve);
        }
    }
}
