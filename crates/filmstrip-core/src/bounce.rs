//! Overshoot-then-settle bounce support.
//!
//! A bounce plays in two writes: an animated overshoot now and the real
//! target shortly after. The core performs no timing of its own, so
//! [`SliderController::bounce`](crate::controller::SliderController::bounce)
//! applies the overshoot immediately and hands back a [`Settle`] describing
//! the deferred second write for the host to schedule.

use std::time::Duration;

use crate::constants::BOUNCE_SETTLE_DELAY;

/// Deferred second half of a bounce.
///
/// After waiting out `delay`, the host passes this back to
/// [`SliderController::apply_settle`](crate::controller::SliderController::apply_settle)
/// so the position record stays in step with the sink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settle {
    /// Final position the strip comes to rest on.
    pub position: f32,
    /// How long the overshoot should be held.
    pub delay: Duration,
}

impl Settle {
    pub(crate) fn after_bounce(position: f32) -> Self {
        Self {
            position,
            delay: BOUNCE_SETTLE_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_carries_the_default_delay() {
        let settle = Settle::after_bounce(-160.0);
        assert_eq!(settle.position, -160.0);
        assert_eq!(settle.delay, Duration::from_millis(200));
    }
}
