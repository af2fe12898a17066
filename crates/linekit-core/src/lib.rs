//! LineKit Core Library
//!
//! Platform-agnostic geometry and editing logic for the LineKit point/line
//! editor. All coordinates are logical, in the square `[-1, 1] × [-1, 1]`.

pub mod canvas;
pub mod collections;
pub mod config;
pub mod input;
pub mod shapes;
pub mod tools;
pub mod viewport;

pub use canvas::{Canvas, EditOutcome, RenderList};
pub use collections::{LineCollection, LineId, LineSegment, PointBatch, PointCollection};
pub use config::{ConfigError, EditorConfig};
pub use input::{KeyEvent, MouseButton, PointerEvent};
pub use shapes::{ImplicitEquation, Line, LineStyle, PointStyle, SerializableColor};
pub use tools::{EditMode, ToolManager, ToolState};
pub use viewport::Viewport;
