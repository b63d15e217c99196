//! Shared positioning constants for consistent gesture handling.
//!
//! The controller, its options, and host-side gesture recognizers are meant
//! to agree on one set of thresholds, so the defaults live here rather than
//! scattered across call sites. All distances are in logical pixels.

use std::time::Duration;

/// Overscroll allowance past the logical start and end, in logical pixels.
///
/// The same value doubles as the boundary detection band: a release within
/// this distance of an edge settles on that edge instead of the nearest
/// card.
///
/// Value of 20.0 matches a typical card margin. Hosts with wider gutters
/// usually raise it to the measured margin through
/// [`SliderOptions`](crate::options::SliderOptions).
pub const BOUNCE_DISTANCE: f32 = 20.0;

/// Release velocity, in logical pixels per millisecond, at or above which a
/// drag counts as a swipe.
///
/// A swipe advances exactly one card in the swipe direction regardless of
/// how far the finger travelled; anything slower snaps to the nearest
/// point.
pub const SWIPE_VELOCITY: f32 = 0.1;

/// Minimum travel in logical pixels before a recognizer should report a
/// drag at all.
///
/// The core never sees sub-slop movement. The constant is published so
/// hosts configure their recognizer with the same value and taps on cards
/// stay taps.
pub const DRAG_SLOP: f32 = 10.0;

/// Delay before a bounce overshoot settles onto its final position.
pub const BOUNCE_SETTLE_DELAY: Duration = Duration::from_millis(200);
