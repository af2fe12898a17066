//! Edit modes and their per-mode selection state.

use crate::collections::LineId;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Available edit modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EditMode {
    /// Every click places a point.
    #[default]
    PlacePoint,
    /// Two clicks pick two existing points and join them with a line.
    PlaceLine,
    /// Press on a line and drag to move it.
    MoveLine,
    /// Two clicks pick two lines; their intersection becomes a point.
    Intersect,
}

impl EditMode {
    /// All modes, in key order.
    pub const ALL: [EditMode; 4] = [
        EditMode::PlacePoint,
        EditMode::PlaceLine,
        EditMode::MoveLine,
        EditMode::Intersect,
    ];

    /// Mode selected by a key (`p`, `l`, `m`, `i`, either case).
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "p" | "P" => Some(EditMode::PlacePoint),
            "l" | "L" => Some(EditMode::PlaceLine),
            "m" | "M" => Some(EditMode::MoveLine),
            "i" | "I" => Some(EditMode::Intersect),
            _ => None,
        }
    }

    /// Key that selects this mode.
    pub fn key(self) -> char {
        match self {
            EditMode::PlacePoint => 'p',
            EditMode::PlaceLine => 'l',
            EditMode::MoveLine => 'm',
            EditMode::Intersect => 'i',
        }
    }

    /// Get display name for this mode.
    pub fn name(self) -> &'static str {
        match self {
            EditMode::PlacePoint => "Point",
            EditMode::PlaceLine => "Line",
            EditMode::MoveLine => "Move",
            EditMode::Intersect => "Intersect",
        }
    }

    /// Cycle to the next mode.
    pub fn next(self) -> Self {
        match self {
            EditMode::PlacePoint => EditMode::PlaceLine,
            EditMode::PlaceLine => EditMode::MoveLine,
            EditMode::MoveLine => EditMode::Intersect,
            EditMode::Intersect => EditMode::PlacePoint,
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.key())
    }
}

/// Current mode together with whatever it has picked so far.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ToolState {
    PlacePoint,
    PlaceLine {
        /// First endpoint, once picked.
        first: Option<Point>,
    },
    MoveLine {
        /// Line being dragged while the button is held.
        selected: Option<LineId>,
    },
    Intersect {
        /// First line, once picked.
        first: Option<LineId>,
    },
}

impl Default for ToolState {
    fn default() -> Self {
        Self::idle(EditMode::default())
    }
}

impl ToolState {
    /// Fresh state for `mode` with nothing picked.
    pub fn idle(mode: EditMode) -> Self {
        match mode {
            EditMode::PlacePoint => ToolState::PlacePoint,
            EditMode::PlaceLine => ToolState::PlaceLine { first: None },
            EditMode::MoveLine => ToolState::MoveLine { selected: None },
            EditMode::Intersect => ToolState::Intersect { first: None },
        }
    }

    /// Mode this state belongs to.
    pub fn mode(&self) -> EditMode {
        match self {
            ToolState::PlacePoint => EditMode::PlacePoint,
            ToolState::PlaceLine { .. } => EditMode::PlaceLine,
            ToolState::MoveLine { .. } => EditMode::MoveLine,
            ToolState::Intersect { .. } => EditMode::Intersect,
        }
    }

    /// Whether a multi-step interaction is in progress.
    pub fn is_pending(&self) -> bool {
        match self {
            ToolState::PlacePoint => false,
            ToolState::PlaceLine { first } => first.is_some(),
            ToolState::MoveLine { selected } => selected.is_some(),
            ToolState::Intersect { first } => first.is_some(),
        }
    }
}

/// Manages the current mode and its state.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    /// Current state, tagged by mode.
    pub state: ToolState,
}

impl ToolManager {
    /// Create a new tool manager in point mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    pub fn mode(&self) -> EditMode {
        self.state.mode()
    }

    /// Switch mode, dropping anything picked in the previous one.
    pub fn set_mode(&mut self, mode: EditMode) {
        self.state = ToolState::idle(mode);
    }

    /// Drop anything picked so far, staying in the current mode.
    pub fn cancel(&mut self) {
        self.state = ToolState::idle(self.mode());
    }

    /// Check if a multi-step interaction is in progress.
    pub fn is_active(&self) -> bool {
        self.state.is_pending()
    }

    /// Line currently picked by the move or intersect mode.
    pub fn selected_line(&self) -> Option<LineId> {
        match self.state {
            ToolState::MoveLine { selected } => selected,
            ToolState::Intersect { first } => first,
            ToolState::PlacePoint | ToolState::PlaceLine { .. } => None,
        }
    }
}
