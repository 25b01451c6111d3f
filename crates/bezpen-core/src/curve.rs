//! The curve engine: an editable chain of cubic Bezier segments.
//!
//! Segment `i`'s outgoing handle and segment `i + 1`'s incoming handle form a
//! single joint and are kept at the same position by every edit. Moving the
//! outgoing handle of the last segment also writes segment 0's incoming
//! handle, which seeds the closing piece.

use crate::config::DEFAULT_PICK_RADIUS;
use crate::error::{EditError, EditResult};
use crate::hit::{self, Feature, Hit};
use crate::interaction::{DragTarget, EditMode, InteractionState};
use crate::render::{CurveRenderer, PrimitiveId};
use crate::segment::{self, Segment, reflect};
use crate::style::CurveStyle;
use kurbo::{BezPath, CubicBez, Point};
use peniko::Color;
use uuid::Uuid;

/// Unique identifier for curves.
pub type CurveId = Uuid;

/// Visual primitives drawn for one segment.
#[derive(Debug, Clone, Copy)]
struct SegmentVisuals {
    incoming_line: PrimitiveId,
    outgoing_line: PrimitiveId,
    incoming_dot: PrimitiveId,
    outgoing_dot: PrimitiveId,
    anchor_dot: PrimitiveId,
}

impl SegmentVisuals {
    fn create(renderer: &mut dyn CurveRenderer, owner: PrimitiveId, segment: &Segment) -> Self {
        Self {
            incoming_line: renderer.add_handle_line(owner, segment.anchor, segment.incoming_control),
            outgoing_line: renderer.add_handle_line(owner, segment.anchor, segment.outgoing_control),
            incoming_dot: renderer.add_handle_point(owner, segment.incoming_control),
            outgoing_dot: renderer.add_handle_point(owner, segment.outgoing_control),
            anchor_dot: renderer.add_handle_point(owner, segment.anchor),
        }
    }

    fn update(&self, renderer: &mut dyn CurveRenderer, segment: &Segment) {
        renderer.update_line(self.incoming_line, segment.anchor, segment.incoming_control);
        renderer.update_line(self.outgoing_line, segment.anchor, segment.outgoing_control);
        renderer.update_point_center(self.incoming_dot, segment.incoming_control);
        renderer.update_point_center(self.outgoing_dot, segment.outgoing_control);
        renderer.update_point_center(self.anchor_dot, segment.anchor);
    }

    fn remove(self, renderer: &mut dyn CurveRenderer) {
        for id in [
            self.incoming_line,
            self.outgoing_line,
            self.incoming_dot,
            self.outgoing_dot,
            self.anchor_dot,
        ] {
            renderer.remove(id);
        }
    }
}

/// An editable piecewise cubic Bezier curve.
///
/// Every mutating method takes the renderer that owns the curve's visuals.
#[derive(Debug)]
pub struct Curve {
    id: CurveId,
    name: String,
    segments: Vec<Segment>,
    visuals: Vec<SegmentVisuals>,
    path: PrimitiveId,
    closed: bool,
    selected: bool,
    style: CurveStyle,
    mode: EditMode,
    interaction: InteractionState,
    last_pointer: Point,
    pick_radius: f64,
}

impl Curve {
    /// Create an empty, selected curve and its path primitive.
    pub fn new(name: impl Into<String>, style: CurveStyle, renderer: &mut dyn CurveRenderer) -> Self {
        let path = renderer.add_curve_path();
        let curve = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            segments: Vec::new(),
            visuals: Vec::new(),
            path,
            closed: false,
            selected: true,
            style,
            mode: EditMode::None,
            interaction: InteractionState::Idle,
            last_pointer: Point::ZERO,
            pick_radius: DEFAULT_PICK_RADIUS,
        };
        curve.refresh_path(renderer);
        curve
    }

    /// Set the pick radius used by hit testing.
    pub fn with_pick_radius(mut self, radius: f64) -> Self {
        self.pick_radius = radius;
        self
    }

    pub fn id(&self) -> CurveId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Id of the stroked path primitive; also the owner of every handle visual.
    pub fn path_id(&self) -> PrimitiveId {
        self.path
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of cubic pieces drawn.
    pub fn piece_count(&self) -> usize {
        segment::piece_count(self.segments.len(), self.is_closed())
    }

    /// The cubic pieces drawn, closing piece last.
    pub fn pieces(&self) -> Vec<CubicBez> {
        segment::pieces(&self.segments, self.is_closed())
    }

    /// The stroked path.
    pub fn to_bez_path(&self) -> BezPath {
        segment::to_bez_path(&self.segments, self.is_closed())
    }

    pub fn style(&self) -> &CurveStyle {
        &self.style
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    pub fn last_pointer(&self) -> Point {
        self.last_pointer
    }

    pub fn pick_radius(&self) -> f64 {
        self.pick_radius
    }

    /// Returns true if the closing piece is drawn. Never true below two segments.
    pub fn is_closed(&self) -> bool {
        self.closed && self.segments.len() > 1
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Anchor of the first segment.
    pub fn start_point(&self) -> Option<Point> {
        self.segments.first().map(|s| s.anchor)
    }

    /// Move the first anchor, carrying its handles along.
    pub fn set_start_point(&mut self, point: Point, renderer: &mut dyn CurveRenderer) -> EditResult<()> {
        self.check_index(0)?;
        self.adjust_anchor(0, point, renderer);
        self.refresh_path(renderer);
        Ok(())
    }

    /// Change the edit mode. Takes effect from the next gesture.
    pub fn set_mode(&mut self, mode: EditMode) {
        if self.mode != mode {
            log::debug!("{}: mode {} -> {}", self.name, self.mode.name(), mode.name());
            self.mode = mode;
        }
    }

    pub fn set_style(&mut self, style: CurveStyle, renderer: &mut dyn CurveRenderer) {
        self.style = style;
        self.refresh_path(renderer);
    }

    pub fn set_stroke_width(&mut self, width: f64, renderer: &mut dyn CurveRenderer) {
        self.style.stroke_width = width;
        self.refresh_path(renderer);
    }

    pub fn set_stroke_color(&mut self, color: Color, renderer: &mut dyn CurveRenderer) {
        self.style.set_stroke(color);
        self.refresh_path(renderer);
    }

    /// Show or hide the control overlay. Only a change of value reaches the renderer.
    pub fn set_selected(&mut self, selected: bool, renderer: &mut dyn CurveRenderer) {
        if self.selected == selected {
            return;
        }
        self.selected = selected;
        renderer.set_overlay_visible(self.path, selected);
    }

    /// Open or close the curve. Closing a curve with fewer than two segments is ignored.
    pub fn set_closed(&mut self, closed: bool, renderer: &mut dyn CurveRenderer) {
        if closed && self.segments.len() < 2 {
            log::warn!("{}: cannot close a curve with {} segment(s)", self.name, self.segments.len());
            return;
        }
        if self.closed != closed {
            log::debug!("{}: closed = {}", self.name, closed);
            self.closed = closed;
            self.refresh_path(renderer);
        }
    }

    pub fn toggle_closed(&mut self, renderer: &mut dyn CurveRenderer) {
        self.set_closed(!self.closed, renderer);
    }

    /// Append a segment. The previous segment's outgoing handle becomes `incoming`
    /// and segment 0's incoming handle becomes `outgoing`.
    pub fn append(&mut self, incoming: Point, outgoing: Point, anchor: Point, renderer: &mut dyn CurveRenderer) {
        if let Some(last) = self.segments.len().checked_sub(1) {
            self.segments[last].outgoing_control = incoming;
            self.sync_segment(last, renderer);
        }
        let segment = Segment::new(incoming, outgoing, anchor);
        self.visuals.push(SegmentVisuals::create(renderer, self.path, &segment));
        self.segments.push(segment);
        // the new last outgoing handle and segment 0's incoming handle form the closing joint
        if self.segments.len() > 1 {
            self.segments[0].incoming_control = outgoing;
            self.sync_segment(0, renderer);
        }
        log::debug!("{}: appended segment {} at {:?}", self.name, self.segments.len() - 1, anchor);
        self.refresh_path(renderer);
    }

    /// Insert a segment before `index`, linking both of its joints.
    ///
    /// `index == len()` appends.
    pub fn insert(
        &mut self,
        index: usize,
        incoming: Point,
        outgoing: Point,
        anchor: Point,
        renderer: &mut dyn CurveRenderer,
    ) -> EditResult<()> {
        let len = self.segments.len();
        if index > len {
            return Err(EditError::SegmentOutOfRange { index, len });
        }
        if index == len {
            self.append(incoming, outgoing, anchor, renderer);
            return Ok(());
        }
        let segment = Segment::new(incoming, outgoing, anchor);
        self.visuals.insert(index, SegmentVisuals::create(renderer, self.path, &segment));
        self.segments.insert(index, segment);
        self.interaction = InteractionState::Idle;
        self.adjust_incoming(index, incoming, renderer);
        self.adjust_outgoing(index, outgoing, renderer);
        log::debug!("{}: inserted segment {} at {:?}", self.name, index, anchor);
        self.refresh_path(renderer);
        Ok(())
    }

    /// Delete the segment at `index`.
    pub fn delete_segment(&mut self, index: usize, renderer: &mut dyn CurveRenderer) -> EditResult<()> {
        self.check_index(index)?;
        self.remove_segment(index, renderer);
        Ok(())
    }

    /// Remove every segment. The path primitive stays.
    pub fn clear(&mut self, renderer: &mut dyn CurveRenderer) {
        for visuals in self.visuals.drain(..) {
            visuals.remove(renderer);
        }
        self.segments.clear();
        self.closed = false;
        self.interaction = InteractionState::Idle;
        self.refresh_path(renderer);
    }

    /// Clear the curve and release its path primitive.
    pub fn delete(mut self, renderer: &mut dyn CurveRenderer) {
        log::debug!("{}: deleted", self.name);
        self.clear(renderer);
        renderer.remove(self.path);
    }

    /// Translate the whole curve by `reference - last_pointer()`.
    pub fn translate(&mut self, reference: Point, renderer: &mut dyn CurveRenderer) {
        if self.segments.is_empty() {
            return;
        }
        let delta = reference - self.last_pointer;
        for segment in &mut self.segments {
            segment.translate(delta);
        }
        for index in 0..self.segments.len() {
            self.sync_segment(index, renderer);
        }
        self.refresh_path(renderer);
    }

    /// First anchor or handle within the pick radius of `point`.
    pub fn hit_test(&self, point: Point) -> Option<Hit> {
        hit::hit_test(&self.segments, point, self.pick_radius)
    }

    /// Start a gesture.
    pub fn on_pointer_down(&mut self, point: Point, renderer: &mut dyn CurveRenderer) {
        log::trace!("{}: pointer down {:?} in {}", self.name, point, self.mode.name());
        self.last_pointer = point;
        let hit = self.hit_test(point);
        if let Some(hit) = hit {
            self.interaction = hit.into();
        }

        match self.mode {
            EditMode::Add if hit.is_none() && !self.is_closed() => {
                let incoming = self.segments.last().map_or(point, |s| s.outgoing_control);
                self.append(incoming, point, point, renderer);
                self.interaction = InteractionState::Dragging {
                    target: DragTarget::MirroredHandles,
                    index: self.segments.len() - 1,
                };
            }
            EditMode::Delete => {
                if let Some(Hit {
                    feature: Feature::Anchor,
                    index,
                }) = hit
                {
                    self.remove_segment(index, renderer);
                }
            }
            _ => {}
        }
    }

    /// Continue a gesture.
    pub fn on_pointer_move(&mut self, point: Point, renderer: &mut dyn CurveRenderer) {
        match self.mode {
            EditMode::Add => {
                if let InteractionState::Dragging { target, index } = self.interaction {
                    if index < self.segments.len() {
                        match target {
                            DragTarget::Anchor => self.adjust_anchor(index, point, renderer),
                            DragTarget::IncomingHandle => self.adjust_incoming(index, point, renderer),
                            DragTarget::OutgoingHandle => self.adjust_outgoing(index, point, renderer),
                            DragTarget::MirroredHandles => self.mirror_handles(index, point, renderer),
                        }
                        self.refresh_path(renderer);
                    }
                }
            }
            EditMode::Move => self.translate(point, renderer),
            EditMode::None | EditMode::Insert | EditMode::Delete => {}
        }
        self.last_pointer = point;
    }

    /// End a gesture.
    pub fn on_pointer_up(&mut self) {
        self.interaction = InteractionState::Idle;
    }

    /// Move the outgoing handle of `index` and its joint partner.
    pub fn adjust_outgoing(&mut self, index: usize, point: Point, renderer: &mut dyn CurveRenderer) {
        self.segments[index].outgoing_control = point;
        self.sync_segment(index, renderer);
        let next = if index + 1 < self.segments.len() { index + 1 } else { 0 };
        if next != index {
            self.segments[next].incoming_control = point;
            self.sync_segment(next, renderer);
        }
    }

    /// Move the incoming handle of `index` and its joint partner.
    pub fn adjust_incoming(&mut self, index: usize, point: Point, renderer: &mut dyn CurveRenderer) {
        self.segments[index].incoming_control = point;
        self.sync_segment(index, renderer);
        let prev = match index {
            0 if self.is_closed() => Some(self.segments.len() - 1),
            0 => None,
            i => Some(i - 1),
        };
        if let Some(prev) = prev {
            self.segments[prev].outgoing_control = point;
            self.sync_segment(prev, renderer);
        }
    }

    /// Move the anchor of `index`; both handles keep their offsets.
    pub fn adjust_anchor(&mut self, index: usize, point: Point, renderer: &mut dyn CurveRenderer) {
        let segment = self.segments[index];
        let delta = point - segment.anchor;
        self.adjust_outgoing(index, segment.outgoing_control + delta, renderer);
        self.adjust_incoming(index, segment.incoming_control + delta, renderer);
        self.segments[index].anchor = point;
        self.sync_segment(index, renderer);
    }

    /// Put the outgoing handle at `point` and the incoming handle opposite it.
    pub fn mirror_handles(&mut self, index: usize, point: Point, renderer: &mut dyn CurveRenderer) {
        let anchor = self.segments[index].anchor;
        self.adjust_outgoing(index, point, renderer);
        self.adjust_incoming(index, reflect(point, anchor), renderer);
    }

    fn remove_segment(&mut self, index: usize, renderer: &mut dyn CurveRenderer) {
        self.visuals.remove(index).remove(renderer);
        self.segments.remove(index);
        self.interaction = InteractionState::Idle;
        if self.segments.len() < 2 {
            self.closed = false;
        }

        if index > 0 {
            let prev = index - 1;
            let outgoing = self.segments[prev].outgoing_control;
            self.adjust_outgoing(prev, outgoing, renderer);
        } else if self.is_closed() {
            let last = self.segments.len() - 1;
            let outgoing = self.segments[last].outgoing_control;
            self.adjust_outgoing(last, outgoing, renderer);
        }
        log::debug!("{}: deleted segment {}, {} left", self.name, index, self.segments.len());
        self.refresh_path(renderer);
    }

    fn check_index(&self, index: usize) -> EditResult<()> {
        if index < self.segments.len() {
            Ok(())
        } else {
            Err(EditError::SegmentOutOfRange {
                index,
                len: self.segments.len(),
            })
        }
    }

    fn sync_segment(&self, index: usize, renderer: &mut dyn CurveRenderer) {
        self.visuals[index].update(renderer, &self.segments[index]);
    }

    fn refresh_path(&self, renderer: &mut dyn CurveRenderer) {
        renderer.update_path(self.path, &self.segments, self.is_closed(), &self.style);
    }
}
