//! Headless application shell: configuration, script replay and reporting.

use crate::script::{Script, ScriptStep};
use anyhow::Context;
use bezpen_core::{CurveCollection, EditResult, EditorConfig};
use bezpen_render::{SceneRenderer, SceneStats, SceneStyle};
use kurbo::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub editor: EditorConfig,
    pub scene: SceneStyle,
}

impl AppConfig {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self =
            serde_json::from_str(&json).with_context(|| format!("Invalid config {}", path.display()))?;
        config.editor.validate()?;
        config.scene.validate()?;
        Ok(config)
    }
}

/// Per-curve line of a [`Summary`].
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSummary {
    pub name: String,
    pub segments: usize,
    pub pieces: usize,
    pub closed: bool,
    pub active: bool,
}

/// State of the editor after a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub curves: Vec<CurveSummary>,
    pub scene: SceneStats,
    pub bounds: Option<Rect>,
    pub draw_items: usize,
    pub rejected_steps: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} curve(s)", self.curves.len())?;
        for curve in &self.curves {
            writeln!(
                f,
                "{} {}: {} segment(s), {} piece(s){}",
                if curve.active { "*" } else { " " },
                curve.name,
                curve.segments,
                curve.pieces,
                if curve.closed { ", closed" } else { "" }
            )?;
        }
        writeln!(
            f,
            "scene: {} path(s), {} visible / {} hidden overlay primitive(s), {} draw item(s)",
            self.scene.paths, self.scene.visible_overlays, self.scene.hidden_overlays, self.draw_items
        )?;
        if let Some(b) = self.bounds {
            writeln!(f, "bounds: ({:.1}, {:.1}) - ({:.1}, {:.1})", b.x0, b.y0, b.x1, b.y1)?;
        }
        if self.rejected_steps > 0 {
            writeln!(f, "{} step(s) rejected", self.rejected_steps)?;
        }
        Ok(())
    }
}

/// The editor with a retained scene behind it.
pub struct App {
    collection: CurveCollection<SceneRenderer>,
    rejected_steps: usize,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let renderer = SceneRenderer::with_style(config.scene);
        Self {
            collection: CurveCollection::with_config(renderer, config.editor),
            rejected_steps: 0,
        }
    }

    pub fn collection(&self) -> &CurveCollection<SceneRenderer> {
        &self.collection
    }

    /// Apply every step in order. Rejected steps are logged and skipped.
    pub fn run(&mut self, script: &Script) -> Summary {
        log::info!("Replaying {} step(s)", script.steps.len());
        for (i, step) in script.steps.iter().enumerate() {
            if let Err(err) = self.apply(step) {
                log::warn!("Step {i} ({step:?}) rejected: {err}");
                self.rejected_steps += 1;
            }
        }
        self.summary()
    }

    /// Apply one step.
    pub fn apply(&mut self, step: &ScriptStep) -> EditResult<()> {
        log::debug!("Applying {step:?}");
        match step {
            ScriptStep::NewCurve(style) => {
                self.collection.new_curve(*style);
            }
            ScriptStep::SetMode(mode) => self.collection.set_mode(*mode)?,
            ScriptStep::Pointer(_) | ScriptStep::Click(_) | ScriptStep::Drag(_) => {
                for event in step.pointer_events() {
                    self.collection.handle_pointer_event(event);
                }
            }
            ScriptStep::Select(index) => self.collection.select(*index)?,
            ScriptStep::ToggleClosed => self.collection.toggle_closed()?,
            ScriptStep::Clear => self.collection.clear_active()?,
            ScriptStep::DeleteActive => {
                if !self.collection.delete_active() {
                    log::warn!("No active curve to delete");
                }
            }
            ScriptStep::SetStrokeWidth(width) => self.collection.set_stroke_width(*width),
        }
        Ok(())
    }

    pub fn summary(&self) -> Summary {
        let active = self.collection.active_index();
        let curves = self
            .collection
            .curves()
            .iter()
            .enumerate()
            .map(|(i, curve)| CurveSummary {
                name: curve.name().to_string(),
                segments: curve.len(),
                pieces: curve.piece_count(),
                closed: curve.is_closed(),
                active: active == Some(i),
            })
            .collect();
        let renderer = self.collection.renderer();
        Summary {
            curves,
            scene: renderer.stats(),
            bounds: renderer.bounds(),
            draw_items: renderer.display_list().len(),
            rejected_steps: self.rejected_steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bezpen_core::EditMode;
    use kurbo::Point;
    use std::io::Write;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_replay_builds_closed_curve() {
        let script = Script {
            steps: vec![
                ScriptStep::NewCurve(None),
                ScriptStep::Drag(vec![pt(0.0, 0.0), pt(10.0, 0.0)]),
                ScriptStep::Click(pt(50.0, 0.0)),
                ScriptStep::Click(pt(50.0, 50.0)),
                ScriptStep::ToggleClosed,
            ],
        };
        let mut app = App::new(AppConfig::default());
        let summary = app.run(&script);

        assert_eq!(summary.curves.len(), 1);
        let curve = &summary.curves[0];
        assert_eq!(curve.name, "Curve 1");
        assert_eq!(curve.segments, 3);
        assert_eq!(curve.pieces, 3);
        assert!(curve.closed && curve.active);
        assert_eq!(summary.scene.visible_overlays, 15);
        assert_eq!(summary.rejected_steps, 0);
        assert!(summary.to_string().contains("Curve 1: 3 segment(s), 3 piece(s), closed"));
    }

    #[test]
    fn test_rejected_steps_are_counted() {
        let script = Script {
            steps: vec![
                ScriptStep::SetMode(EditMode::Move),
                ScriptStep::Select(3),
                ScriptStep::ToggleClosed,
            ],
        };
        let mut app = App::new(AppConfig::default());
        let summary = app.run(&script);
        assert_eq!(summary.rejected_steps, 3);
        assert!(summary.curves.is_empty());
    }

    #[test]
    fn test_delete_and_reselect() {
        let script = Script {
            steps: vec![
                ScriptStep::NewCurve(None),
                ScriptStep::Click(pt(0.0, 0.0)),
                ScriptStep::NewCurve(None),
                ScriptStep::Click(pt(100.0, 0.0)),
                ScriptStep::DeleteActive,
                ScriptStep::Select(0),
                ScriptStep::SetStrokeWidth(3.0),
            ],
        };
        let mut app = App::new(AppConfig::default());
        let summary = app.run(&script);
        assert_eq!(summary.curves.len(), 1);
        assert_eq!(summary.curves[0].name, "Curve 1");
        assert!(summary.curves[0].active);
        let style = app.collection().active_curve().unwrap().style();
        assert!((style.stroke_width - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_demo_script() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/closed_curve.json");
        let script = Script::load(&path).unwrap();
        let mut app = App::new(AppConfig::default());
        let summary = app.run(&script);

        assert_eq!(summary.rejected_steps, 0);
        assert_eq!(summary.curves.len(), 2);
        assert_eq!(summary.curves[0].segments, 3);
        assert!(summary.curves[0].closed && summary.curves[0].active);
        assert_eq!(summary.curves[1].segments, 1);
        assert_eq!(summary.scene.hidden_overlays, 5);
    }

    #[test]
    fn test_load_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"editor": {{"pick_radius": 2.0}}, "scene": {{"dot_radius": 4.0}}}}"#).unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert!((config.editor.pick_radius - 2.0).abs() < f64::EPSILON);
        assert!((config.scene.dot_radius - 4.0).abs() < f64::EPSILON);
        assert_eq!(config.editor.curve_name_prefix, "Curve");
    }

    #[test]
    fn test_load_invalid_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"editor": {{"pick_radius": -2.0}}}}"#).unwrap();
        assert!(AppConfig::load(file.path()).is_err());
    }
}
