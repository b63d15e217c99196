//! Layout computation: one measurement pass in, snap points and limits out.

use crate::error::Result;
use crate::geometry::{CardGeometry, Measurements};
use crate::limits::Limits;
use crate::snap::SnapPoints;

/// Everything the controller derives from one geometry pass.
///
/// Recomputed wholesale on every resize; nothing in here is patched
/// incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub cards: CardGeometry,
    pub snap_points: SnapPoints,
    pub limits: Limits,
}

/// Derives [`SnapPoints`] and [`Limits`] from a measurement pass.
///
/// This is the single validation boundary: measurements are checked here
/// and everything downstream trusts the result. Pure apart from a warning
/// when the content does not overflow its container, since such a strip
/// has no scrollable range and every resolution will park at `start`.
pub fn compute_layout(measurements: &Measurements, bounce: f32) -> Result<Layout> {
    measurements.validate()?;

    let limits = Limits::compute(
        measurements.container_width,
        measurements.content_width,
        bounce,
    );
    if !limits.has_overflow() {
        log::warn!(
            "content width {} fits inside container width {}; slider has no scrollable range",
            measurements.content_width,
            measurements.container_width
        );
    }

    let snap_points = SnapPoints::from_left_offsets(&measurements.card_left_offsets);
    Ok(Layout {
        cards: measurements.card_geometry(),
        snap_points,
        limits,
    })
}
