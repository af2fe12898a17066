//! Pointer and keyboard events in logical coordinates.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event with its position already mapped to logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, button: MouseButton },
    Up { position: Point, button: MouseButton },
    Move { position: Point },
}

impl PointerEvent {
    /// Logical position carried by the event.
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Up { position, .. }
            | PointerEvent::Move { position } => position,
        }
    }

    /// Button involved, if any.
    pub fn button(&self) -> Option<MouseButton> {
        match *self {
            PointerEvent::Down { button, .. } | PointerEvent::Up { button, .. } => Some(button),
            PointerEvent::Move { .. } => None,
        }
    }
}

/// Keyboard event type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    /// A printable key, as typed.
    Character(String),
    Escape,
}
