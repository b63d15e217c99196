//! Gesture phases and the per-gesture drag record.

/// Horizontal direction reported by the gesture source on release.
///
/// `Left` means the finger travelled left, which moves the strip toward
/// later cards (more negative offsets).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Where the controller sits between gesture events.
///
/// `Resolving` is only ever observable from inside a drag-end call, since
/// handlers run to completion, but keeping the variant makes the
/// transition table explicit: Idle -> Dragging -> Resolving -> Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
    Resolving,
}

/// Transient record of one active gesture.
///
/// Created on drag start, updated per move sample, consumed on drag end.
/// Velocity and direction stay empty until the end event supplies them.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    /// Settled position captured when the gesture began.
    pub start_x: f32,
    /// Most recent move delta relative to `start_x`.
    pub current_delta_x: f32,
    /// Release velocity in logical px per ms; 0 until the end event.
    pub velocity_x: f32,
    /// Release direction; `None` until the end event.
    pub direction: Option<SwipeDirection>,
}

impl DragState {
    pub(crate) fn begin(start_x: f32) -> Self {
        Self {
            start_x,
            current_delta_x: 0.0,
            velocity_x: 0.0,
            direction: None,
        }
    }

    /// Unclamped position implied by the current delta.
    pub fn position(&self) -> f32 {
        self.start_x + self.current_delta_x
    }
}

/// Typed gesture input for queue-driven hosts and the test harness.
///
/// [`SliderController::apply_gesture`](crate::controller::SliderController::apply_gesture)
/// dispatches these to the individual handlers; calling the handlers
/// directly is equivalent. Deltas are relative to the gesture's start
/// position, velocity is logical px per ms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    DragStart,
    DragMove {
        delta_x: f32,
    },
    DragEnd {
        delta_x: f32,
        velocity_x: f32,
        direction: SwipeDirection,
    },
}
