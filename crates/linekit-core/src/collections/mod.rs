//! Point and line storage.

mod lines;
mod points;

pub use lines::{LineCollection, LineId, LineSegment};
pub use points::{CAPTURE_RADIUS, PointBatch, PointCollection};
