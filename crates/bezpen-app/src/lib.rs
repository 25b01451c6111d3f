//! Bezpen Application
//!
//! Headless host for the curve editor: loads configuration, replays gesture
//! scripts through a curve collection and reports the resulting scene.

mod app;
mod script;

pub use app::{App, AppConfig, CurveSummary, Summary};
pub use script::{Script, ScriptStep};
