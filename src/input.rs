//! Input model: buttons, keys, wheel deltas, and the gesture state machine.
//!
//! `InputState` is the single active gesture, tracked between pointer-down
//! and pointer-up. Each active variant carries the snapshot taken when the
//! gesture started, so every pointer-move recomputes the target's fields
//! from that snapshot rather than accumulating per-event deltas. Only one
//! `InputState` exists per editor, which is what makes "one gesture at a
//! time" hold.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::Serialize;

use crate::doc::ItemId;
use crate::view::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code. Unknown codes map to `None`.
    #[must_use]
    pub fn from_dom(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// A keyboard key as reported by the browser (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this key requests deleting the selection.
    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self.0.as_str(), "Delete" | "Backspace")
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels. Zoom reads only `dy`.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// UI state that is not part of the scene itself.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Text item currently in edit mode, if any.
    pub editing_id: Option<ItemId>,
}

/// Coarse label for the active gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureKind {
    None,
    Move,
    Rotate,
    Scale,
    Pan,
}

/// The active gesture.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Dragging an item's body (or a freshly placed library item).
    Moving {
        id: ItemId,
        /// World-space pointer position at pointer-down.
        start_world: Point,
        /// Item position at pointer-down.
        orig_x: f64,
        orig_y: f64,
    },
    /// Dragging the rotate handle.
    Rotating {
        id: ItemId,
        /// Screen-space bounding-box center; the rotation pivot.
        center_screen: Point,
        /// Pointer angle around the center at pointer-down, in radians.
        start_angle: f64,
        /// Rotation in degrees at pointer-down.
        orig_rotation: f64,
    },
    /// Dragging the scale handle.
    Scaling {
        id: ItemId,
        /// Screen-space bounding-box center; the scale pivot.
        center_screen: Point,
        /// Pointer distance from the center at pointer-down, floored.
        start_distance: f64,
        /// Scale at pointer-down.
        orig_scale: f64,
    },
    /// Dragging the background.
    Panning {
        /// Screen-space pointer position at pointer-down.
        start_screen: Point,
        orig_pan_x: f64,
        orig_pan_y: f64,
    },
}

impl InputState {
    #[must_use]
    pub fn kind(&self) -> GestureKind {
        match self {
            Self::Idle => GestureKind::None,
            Self::Moving { .. } => GestureKind::Move,
            Self::Rotating { .. } => GestureKind::Rotate,
            Self::Scaling { .. } => GestureKind::Scale,
            Self::Panning { .. } => GestureKind::Pan,
        }
    }

    /// The item this gesture mutates; `None` for idle and pan.
    #[must_use]
    pub fn target(&self) -> Option<ItemId> {
        match self {
            Self::Moving { id, .. } | Self::Rotating { id, .. } | Self::Scaling { id, .. } => Some(*id),
            Self::Idle | Self::Panning { .. } => None,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
