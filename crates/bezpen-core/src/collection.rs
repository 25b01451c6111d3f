//! Ordered set of curves with a single active curve.

use crate::config::EditorConfig;
use crate::curve::Curve;
use crate::error::{EditError, EditResult};
use crate::input::{PointerEvent, PointerState};
use crate::interaction::EditMode;
use crate::render::CurveRenderer;
use crate::style::CurveStyle;
use kurbo::Point;

/// Owns every curve, the renderer they draw into and the active selection.
///
/// Pointer events go to the active curve only. Motion is forwarded only while
/// the pointer is pressed.
#[derive(Debug)]
pub struct CurveCollection<R: CurveRenderer> {
    renderer: R,
    curves: Vec<Curve>,
    active: Option<usize>,
    config: EditorConfig,
    pointer: PointerState,
    current_style: CurveStyle,
    created: usize,
}

impl<R: CurveRenderer> CurveCollection<R> {
    pub fn new(renderer: R) -> Self {
        Self::with_config(renderer, EditorConfig::default())
    }

    pub fn with_config(renderer: R, config: EditorConfig) -> Self {
        let current_style = config.default_style;
        Self {
            renderer,
            curves: Vec::new(),
            active: None,
            config,
            pointer: PointerState::new(),
            current_style,
            created: 0,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_curve(&self) -> Option<&Curve> {
        self.active.and_then(|i| self.curves.get(i))
    }

    /// Style applied by `set_stroke_width` and offered to new curves.
    pub fn current_style(&self) -> &CurveStyle {
        &self.current_style
    }

    /// Names in list order.
    pub fn curve_names(&self) -> Vec<&str> {
        self.curves.iter().map(Curve::name).collect()
    }

    /// Create an empty curve in Add mode and make it active. Returns its index.
    pub fn new_curve(&mut self, style: Option<CurveStyle>) -> usize {
        self.deselect_active();
        self.created += 1;
        let name = format!("{} {}", self.config.curve_name_prefix, self.created);
        let style = style.unwrap_or(self.current_style);
        let mut curve = Curve::new(name, style, &mut self.renderer).with_pick_radius(self.config.pick_radius);
        curve.set_mode(EditMode::Add);
        log::debug!("Created {}", curve.name());
        self.curves.push(curve);
        let index = self.curves.len() - 1;
        self.active = Some(index);
        index
    }

    /// Activate the curve at `index` and adopt its style.
    pub fn select(&mut self, index: usize) -> EditResult<()> {
        if index >= self.curves.len() {
            log::warn!("Cannot select curve {index}: only {} curves", self.curves.len());
            return Err(EditError::CurveOutOfRange {
                index,
                len: self.curves.len(),
            });
        }
        if self.active != Some(index) {
            self.deselect_active();
        }
        let curve = &mut self.curves[index];
        curve.set_selected(true, &mut self.renderer);
        self.current_style = *curve.style();
        self.active = Some(index);
        Ok(())
    }

    /// Delete the active curve. Nothing is active afterwards.
    ///
    /// Returns true if a curve was deleted.
    pub fn delete_active(&mut self) -> bool {
        let Some(index) = self.active.take() else {
            return false;
        };
        if index >= self.curves.len() {
            return false;
        }
        let curve = self.curves.remove(index);
        curve.delete(&mut self.renderer);
        true
    }

    pub fn set_mode(&mut self, mode: EditMode) -> EditResult<()> {
        self.active_mut()?.set_mode(mode);
        Ok(())
    }

    pub fn toggle_closed(&mut self) -> EditResult<()> {
        let (curve, renderer) = self.active_with_renderer()?;
        curve.toggle_closed(renderer);
        Ok(())
    }

    pub fn clear_active(&mut self) -> EditResult<()> {
        let (curve, renderer) = self.active_with_renderer()?;
        curve.clear(renderer);
        Ok(())
    }

    /// Update the shared stroke width and apply it to the active curve, if any.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.current_style.stroke_width = width;
        if let Ok((curve, renderer)) = self.active_with_renderer() {
            curve.set_stroke_width(width, renderer);
        }
    }

    pub fn pointer_down(&mut self, position: Point) {
        self.handle_pointer_event(PointerEvent::Down { position });
    }

    pub fn pointer_move(&mut self, position: Point) {
        self.handle_pointer_event(PointerEvent::Move { position });
    }

    pub fn pointer_up(&mut self, position: Point) {
        self.handle_pointer_event(PointerEvent::Up { position });
    }

    /// Route a pointer event to the active curve.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        let was_pressed = self.pointer.is_pressed();
        self.pointer.handle_pointer_event(event);
        let Ok((curve, renderer)) = self.active_with_renderer() else {
            return;
        };
        match event {
            PointerEvent::Down { position } => curve.on_pointer_down(position, renderer),
            PointerEvent::Move { position } if was_pressed => curve.on_pointer_move(position, renderer),
            PointerEvent::Move { .. } => {}
            PointerEvent::Up { .. } => curve.on_pointer_up(),
        }
    }

    fn deselect_active(&mut self) {
        if let Some(curve) = self.active.and_then(|i| self.curves.get_mut(i)) {
            curve.set_selected(false, &mut self.renderer);
        }
    }

    fn active_mut(&mut self) -> EditResult<&mut Curve> {
        self.active_with_renderer().map(|(curve, _)| curve)
    }

    fn active_with_renderer(&mut self) -> EditResult<(&mut Curve, &mut R)> {
        let curve = self
            .active
            .and_then(|i| self.curves.get_mut(i))
            .ok_or(EditError::NoActiveCurve)?;
        Ok((curve, &mut self.renderer))
    }
}
