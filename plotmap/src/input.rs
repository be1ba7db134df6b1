//! Input model: pointer buttons, wheel deltas, touches and the gesture state machines.
//!
//! Mouse and touch are tracked by separate machines because browsers deliver
//! both for the same physical interaction on hybrid devices and the two must
//! not corrupt each other's start positions. The transition logic lives in
//! [`crate::engine::EngineCore`]; this module only defines the states and the
//! small pure helpers they need.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::{CLICK_SLOP_PX, TAP_THRESHOLD_PX};
use crate::math::{Point, distance, midpoint};

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// CSS cursor the host should show over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
    Grab,
    Grabbing,
}

impl Cursor {
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pointer => "pointer",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Mouse gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MouseState {
    /// No button held; moves hover-test.
    #[default]
    Idle,
    /// Primary button held; moves pan.
    Dragging {
        /// Where the button went down (canvas-local px).
        start: Point,
        /// Previous pointer position, for incremental pan deltas.
        last: Point,
        /// Largest distance from `start` seen so far.
        max_travel: f64,
    },
}

/// Touch gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TouchState {
    /// No fingers down.
    #[default]
    Idle,
    /// One finger down; moves pan.
    Panning {
        /// Where the finger first touched (canvas-local px).
        start: Point,
        /// Previous finger position, for incremental pan deltas.
        last: Point,
        /// Set once a pinch happened during this gesture; such a gesture is never a tap.
        was_pinch: bool,
    },
    /// Two fingers down; distance changes zoom.
    Pinching {
        /// Finger distance at the last applied zoom step.
        distance: f64,
    },
}

/// Combined input state owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputState {
    pub mouse: MouseState,
    pub touch: TouchState,
}

/// A press/release pair is a click when the pointer never strayed past the slop radius.
#[must_use]
pub fn is_click(max_travel: f64) -> bool {
    max_travel < CLICK_SLOP_PX
}

/// A touch gesture is a tap when it moved less than the threshold on both axes.
#[must_use]
pub fn is_tap(start: Point, end: Point) -> bool {
    (end.x - start.x).abs() < TAP_THRESHOLD_PX && (end.y - start.y).abs() < TAP_THRESHOLD_PX
}

/// Distance between the first two touches, if there are two.
#[must_use]
pub fn pinch_distance(touches: &[Point]) -> Option<f64> {
    match touches {
        [a, b, ..] => Some(distance(*a, *b)),
        _ => None,
    }
}

/// Midpoint between the first two touches, if there are two.
#[must_use]
pub fn pinch_center(touches: &[Point]) -> Option<Point> {
    match touches {
        [a, b, ..] => Some(midpoint(*a, *b)),
        _ => None,
    }
}
