//! Editor state: collections, active mode and event dispatch.

use crate::collections::{LineCollection, LineId, LineSegment, PointBatch, PointCollection};
use crate::config::EditorConfig;
use crate::input::{KeyEvent, MouseButton, PointerEvent};
use crate::tools::{EditMode, ToolManager, ToolState};
use kurbo::Point;

/// What a single event did to the editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditOutcome {
    /// The event has no meaning in the current mode.
    Ignored,
    /// A point was placed at the click position.
    PointAdded(Point),
    /// First endpoint of a new line was picked.
    EndpointPicked(Point),
    /// No stored point lies within the capture radius.
    NoPointInRange,
    /// A line was created from two picked points.
    LineAdded(LineId),
    /// A line was picked (for moving or as the first intersection operand).
    LineSelected(LineId),
    /// No line passes through the click.
    NoLineHit,
    /// The selected line was re-anchored to the pointer.
    LineMoved(LineId),
    /// The dragged line was let go.
    LineReleased(LineId),
    /// The intersection of two picked lines was added as a point.
    IntersectionAdded(Point),
    /// The two picked lines are parallel or coincident.
    Parallel,
    /// The second pick hit the same line as the first.
    SameLine,
}

impl EditOutcome {
    /// Whether the rendered picture differs after this event.
    pub fn changes_scene(&self) -> bool {
        matches!(
            self,
            Self::PointAdded(_)
                | Self::LineAdded(_)
                | Self::LineMoved(_)
                | Self::IntersectionAdded(_)
        )
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct RenderList {
    pub points: PointBatch,
    pub lines: Vec<LineSegment>,
}

/// The editor: owns all points and lines and the current mode.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    pub points: PointCollection,
    pub lines: LineCollection,
    pub tool_manager: ToolManager,
    pub config: EditorConfig,
}

impl Canvas {
    /// Create an empty editor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty editor with the given settings.
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current mode.
    pub fn mode(&self) -> EditMode {
        self.tool_manager.mode()
    }

    /// Switch mode, clearing any pending picks.
    pub fn set_mode(&mut self, mode: EditMode) {
        self.tool_manager.set_mode(mode);
        log::info!("Mode: {mode}");
    }

    /// Handle a key press. Returns true if the editor state changed.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        match event {
            KeyEvent::Character(key) => match EditMode::from_key(key) {
                Some(mode) => {
                    self.set_mode(mode);
                    true
                }
                None => {
                    log::debug!("Ignoring key {key:?}");
                    false
                }
            },
            KeyEvent::Escape => {
                let was_active = self.tool_manager.is_active();
                self.tool_manager.cancel();
                was_active
            }
        }
    }

    /// Handle a pointer event in logical coordinates.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> EditOutcome {
        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => self.press(position),
            PointerEvent::Move { position } => self.motion(position),
            PointerEvent::Up {
                button: MouseButton::Left,
                ..
            } => self.release(),
            PointerEvent::Down { .. } | PointerEvent::Up { .. } => EditOutcome::Ignored,
        }
    }

    fn press(&mut self, position: Point) -> EditOutcome {
        let config = self.config;
        match &mut self.tool_manager.state {
            ToolState::PlacePoint => {
                self.points.add(position);
                EditOutcome::PointAdded(position)
            }
            ToolState::PlaceLine { first } => {
                let Some(picked) = self.points.find_nearest_within(position, config.capture_radius)
                else {
                    return EditOutcome::NoPointInRange;
                };
                match first.take() {
                    None => {
                        *first = Some(picked);
                        EditOutcome::EndpointPicked(picked)
                    }
                    Some(start) => EditOutcome::LineAdded(self.lines.add(start, picked)),
                }
            }
            ToolState::MoveLine { selected } => {
                if selected.is_some() {
                    return EditOutcome::Ignored;
                }
                match self.lines.find_nearest_within(position, config.line_tolerance) {
                    Some(id) => {
                        *selected = Some(id);
                        log::debug!("Selected line {id} for moving");
                        EditOutcome::LineSelected(id)
                    }
                    None => EditOutcome::NoLineHit,
                }
            }
            ToolState::Intersect { first } => {
                let hit = self.lines.find_nearest_within(position, config.line_tolerance);
                let Some(first_id) = first.take() else {
                    return match hit {
                        Some(id) => {
                            *first = Some(id);
                            EditOutcome::LineSelected(id)
                        }
                        None => EditOutcome::NoLineHit,
                    };
                };
                match hit {
                    None => EditOutcome::NoLineHit,
                    Some(second_id) if second_id == first_id => EditOutcome::SameLine,
                    Some(second_id) => self.add_intersection(first_id, second_id),
                }
            }
        }
    }

    fn add_intersection(&mut self, first: LineId, second: LineId) -> EditOutcome {
        let (Some(a), Some(b)) = (self.lines.get(first), self.lines.get(second)) else {
            log::warn!("Stale line handle in intersection ({first}, {second})");
            return EditOutcome::Ignored;
        };
        match a.intersection_within(b, self.config.parallel_epsilon) {
            Some(point) => {
                log::info!("Lines {first} and {second} intersect at ({:.2}, {:.2})", point.x, point.y);
                self.points.add(point);
                EditOutcome::IntersectionAdded(point)
            }
            None => {
                log::info!("Lines {first} and {second} are parallel");
                EditOutcome::Parallel
            }
        }
    }

    fn motion(&mut self, position: Point) -> EditOutcome {
        let ToolState::MoveLine { selected: Some(id) } = self.tool_manager.state else {
            return EditOutcome::Ignored;
        };
        match self.lines.get_mut(id) {
            Some(line) => {
                line.translate_with_half_length(position, self.config.translate_half_length);
                log::trace!("Moved line {id}: {line}");
                EditOutcome::LineMoved(id)
            }
            None => EditOutcome::Ignored,
        }
    }

    fn release(&mut self) -> EditOutcome {
        match &mut self.tool_manager.state {
            ToolState::MoveLine { selected } => match selected.take() {
                Some(id) => {
                    if let Some(line) = self.lines.get(id) {
                        log::info!("Line {id} moved to {line}");
                    }
                    EditOutcome::LineReleased(id)
                }
                None => EditOutcome::Ignored,
            },
            _ => EditOutcome::Ignored,
        }
    }

    /// Snapshot of points and visible line segments for drawing.
    pub fn export_for_render(&self) -> RenderList {
        RenderList {
            points: self.points.export_for_render(&self.config.point_style),
            lines: self.lines.export_for_render(&self.config.line_style),
        }
    }
}
