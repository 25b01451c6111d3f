//! Bezpen Render Library
//!
//! Retained-scene implementation of the core `CurveRenderer` trait. It keeps
//! every curve path and control overlay and produces a kurbo/peniko display
//! list that a vector backend can paint.

mod renderer;
mod scene;

pub use renderer::{RenderResult, RendererError, SceneStyle};
pub use scene::{DrawItem, SceneRenderer, SceneStats};
