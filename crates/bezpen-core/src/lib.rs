//! Bezpen Core Library
//!
//! Platform-agnostic data model and editing logic for piecewise cubic Bezier
//! curves: segments, hit testing, the pointer-driven edit state machine and
//! the collection that tracks the active curve.

pub mod collection;
pub mod config;
pub mod curve;
pub mod error;
pub mod hit;
pub mod input;
pub mod interaction;
pub mod render;
pub mod segment;
pub mod style;

pub use collection::CurveCollection;
pub use config::{DEFAULT_PICK_RADIUS, EditorConfig};
pub use curve::{Curve, CurveId};
pub use error::{ConfigError, EditError, EditResult};
pub use hit::{Feature, Hit, hit_test};
pub use input::{PointerEvent, PointerState};
pub use interaction::{DragTarget, EditMode, InteractionState};
pub use render::{CurveRenderer, NullRenderer, PrimitiveId};
pub use segment::Segment;
pub use style::{CurveStyle, SerializableColor};
