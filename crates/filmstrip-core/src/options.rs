//! Controller configuration.

use crate::constants::{BOUNCE_DISTANCE, DRAG_SLOP, SWIPE_VELOCITY};

/// Tunables for one slider instance.
///
/// Every field defaults to the matching constant in [`crate::constants`];
/// the consuming builder methods allow one-line construction:
///
/// ```
/// use filmstrip_core::SliderOptions;
///
/// let options = SliderOptions::new().bounce_distance(32.0).debug_overlay(true);
/// assert_eq!(options.bounce_distance, 32.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderOptions {
    /// Overscroll allowance and boundary band width, logical px.
    pub bounce_distance: f32,
    /// Swipe threshold, logical px per ms.
    pub swipe_velocity: f32,
    /// Minimum travel before a recognizer reports a drag. The core never
    /// enforces this; it is published for hosts configuring one.
    pub drag_slop: f32,
    /// Request guide markers from the sink after each layout pass.
    pub debug_overlay: bool,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            bounce_distance: BOUNCE_DISTANCE,
            swipe_velocity: SWIPE_VELOCITY,
            drag_slop: DRAG_SLOP,
            debug_overlay: false,
        }
    }
}

impl SliderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounce_distance(mut self, distance: f32) -> Self {
        self.bounce_distance = distance;
        self
    }

    pub fn swipe_velocity(mut self, velocity: f32) -> Self {
        self.swipe_velocity = velocity;
        self
    }

    pub fn drag_slop(mut self, slop: f32) -> Self {
        self.drag_slop = slop;
        self
    }

    pub fn debug_overlay(mut self, enabled: bool) -> Self {
        self.debug_overlay = enabled;
        self
    }
}
