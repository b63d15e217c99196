//! Assertion utilities for slider tests.
//!
//! Helpers for validating positions and snap decisions without peppering
//! tests with hand-rolled float comparisons.

use filmstrip_core::Snap;

/// Assert that a value is within an expected range.
///
/// Useful for fuzzy matching of positions that might vary slightly due to
/// floating point derivation.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a snap decision landed on the expected target and card.
pub fn assert_snap(snap: Snap, target: f32, index: usize, msg: &str) {
    assert_approx_eq(snap.target, target, 0.001, &format!("{} - target", msg));
    assert_eq!(
        snap.index, index,
        "{}: expected card {}, got {}",
        msg, index, snap.index
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_accepts_values_inside_the_tolerance() {
        assert_approx_eq(10.0005, 10.0, 0.001, "close enough");
    }

    #[test]
    #[should_panic(expected = "too far")]
    fn approx_eq_rejects_values_outside_the_tolerance() {
        assert_approx_eq(10.5, 10.0, 0.001, "too far");
    }

    #[test]
    fn snap_assertion_checks_target_and_index() {
        assert_snap(
            Snap { target: -160.0, index: 1 },
            -160.0,
            1,
            "nearest card",
        );
    }
}
