//! Snap resolution: deciding where a released strip settles.

use crate::gesture::SwipeDirection;
use crate::limits::Limits;
use crate::snap::SnapPoints;

/// One settle decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snap {
    /// Offset the strip should animate to.
    pub target: f32,
    /// Card considered active once the strip arrives.
    pub index: usize,
}

/// Picks settle targets and owns the active card index.
///
/// Every index mutation funnels through this type: drag releases and
/// resize reactions both answer with a [`Snap`] and record its index in
/// the same step, so the index can never drift from the last decision.
#[derive(Debug)]
pub struct SnapResolver {
    active_index: usize,
    swipe_velocity: f32,
}

impl SnapResolver {
    /// A resolver starting at the first card.
    ///
    /// `swipe_velocity` is the release speed, in logical px per ms, at or
    /// above which a drag counts as a swipe.
    pub fn new(swipe_velocity: f32) -> Self {
        Self {
            active_index: 0,
            swipe_velocity,
        }
    }

    /// Card the strip last settled on.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Clamps the index into a freshly computed snap list.
    ///
    /// Card counts can shrink across resizes; the index must keep pointing
    /// at a card that still exists before the next resolution runs.
    pub(crate) fn rebind(&mut self, points: &SnapPoints) {
        self.active_index = self.active_index.min(points.last_index());
    }

    /// Resolves a finished drag at unclamped position `x`.
    ///
    /// Decision order, first match wins: boundary bands, fast swipe,
    /// nearest point. The result is always inside the reachable range.
    pub fn resolve_release(
        &mut self,
        x: f32,
        velocity_x: f32,
        direction: SwipeDirection,
        limits: &Limits,
        points: &SnapPoints,
    ) -> Snap {
        let decided = if limits.is_at_start(x) || points.len() == 1 {
            Snap {
                target: limits.start,
                index: 0,
            }
        } else if limits.is_at_end(x) {
            Snap {
                target: limits.end,
                index: points.last_index(),
            }
        } else if velocity_x.abs() >= self.swipe_velocity {
            self.swipe(direction, limits, points)
        } else {
            self.closest(x, limits, points)
        };

        let snap = self.commit(decided, limits, points);
        log::debug!(
            "release at {:.1} (velocity {:.3}) resolved to {:.1}, card {}",
            x,
            velocity_x,
            snap.target,
            snap.index
        );
        snap
    }

    /// Resolves a position without gesture context, as after a resize.
    pub fn resolve_position(&mut self, x: f32, limits: &Limits, points: &SnapPoints) -> Snap {
        let decided = self.closest(x, limits, points);
        let snap = self.commit(decided, limits, points);
        log::debug!(
            "position {:.1} re-resolved to {:.1}, card {}",
            x,
            snap.target,
            snap.index
        );
        snap
    }

    /// One-card jump in the swipe direction, regardless of travel.
    fn swipe(&self, direction: SwipeDirection, limits: &Limits, points: &SnapPoints) -> Snap {
        match direction {
            SwipeDirection::Left => match points.get(self.active_index + 1) {
                // The next card would align past the revealable range, so
                // the end-of-range offset is the real destination.
                Some(next) if next <= limits.max_right => Snap {
                    target: limits.max_right,
                    index: points.last_index(),
                },
                Some(next) => Snap {
                    target: next,
                    index: self.active_index + 1,
                },
                // Already on the last card; stay there.
                None => Snap {
                    target: points.point(points.last_index()),
                    index: points.last_index(),
                },
            },
            SwipeDirection::Right => {
                let index = self.active_index.saturating_sub(1);
                Snap {
                    target: points.point(index),
                    index,
                }
            }
        }
    }

    /// Scans points in index order for the one nearest to `x`.
    ///
    /// Points only fall as the index rises, so the first increase in
    /// distance means the previous point was nearest. A point further from
    /// `x` than the end limit means `x` sits past anything a card can
    /// offer, and the end limit wins. Ties keep scanning, so the later of
    /// two equidistant points is selected.
    fn closest(&self, x: f32, limits: &Limits, points: &SnapPoints) -> Snap {
        let mut best = Snap {
            target: points.point(0),
            index: 0,
        };
        let mut smallest = (x - best.target).abs();
        let distance_to_end = (x - limits.end).abs();

        for index in 1..points.len() {
            let point = points.point(index);
            let distance = (x - point).abs();

            if distance > smallest {
                break;
            }
            if distance > distance_to_end {
                return Snap {
                    target: limits.end,
                    index: points.last_index(),
                };
            }

            smallest = distance;
            best = Snap {
                target: point,
                index,
            };
        }

        best
    }

    /// Clamps a decision into the reachable range and records its index.
    ///
    /// A target raised to `max_right` is the end-of-range outcome and takes
    /// the last index; a target lowered to `start` takes index 0. Targets
    /// already in range pass through untouched.
    fn commit(&mut self, decided: Snap, limits: &Limits, points: &SnapPoints) -> Snap {
        let (low, high) = limits.reachable();
        let clamped = decided.target.clamp(low, high);

        let resolved = if clamped == decided.target {
            decided
        } else if clamped == limits.start {
            Snap {
                target: clamped,
                index: 0,
            }
        } else {
            Snap {
                target: clamped,
                index: points.last_index(),
            }
        };

        self.active_index = resolved.index;
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // container 320, content 640, four cards of 160
    fn limits() -> Limits {
        Limits::compute(320.0, 640.0, 20.0)
    }

    fn points() -> SnapPoints {
        SnapPoints::from_left_offsets(&[0.0, 160.0, 320.0, 480.0])
    }

    fn resolver() -> SnapResolver {
        SnapResolver::new(0.1)
    }

    #[test]
    fn release_in_the_start_band_settles_at_start() {
        let mut r = resolver();
        let snap = r.resolve_release(10.0, 0.0, SwipeDirection::Right, &limits(), &points());
        assert_eq!(snap, Snap { target: 0.0, index: 0 });
        assert_eq!(r.active_index(), 0);
    }

    #[test]
    fn release_in_the_end_band_settles_at_end() {
        let mut r = resolver();
        let snap = r.resolve_release(-330.0, 0.0, SwipeDirection::Left, &limits(), &points());
        assert_eq!(snap, Snap { target: -320.0, index: 3 });
        assert_eq!(r.active_index(), 3);
    }

    #[test]
    fn single_card_always_settles_at_start() {
        let one = SnapPoints::from_left_offsets(&[0.0]);
        let mut r = resolver();
        let snap = r.resolve_release(-50.0, 0.5, SwipeDirection::Left, &limits(), &one);
        assert_eq!(snap, Snap { target: 0.0, index: 0 });
    }

    #[test]
    fn slow_drag_snaps_to_the_nearest_point() {
        // released at -100: card 1 at -160 is 60 away, card 0 is 100 away
        let mut r = resolver();
        let snap = r.resolve_release(-100.0, 0.05, SwipeDirection::Left, &limits(), &points());
        assert_eq!(snap, Snap { target: -160.0, index: 1 });
    }

    #[test]
    fn fast_swipe_left_advances_exactly_one_card() {
        let mut r = resolver();
        let snap = r.resolve_release(-40.0, 0.12, SwipeDirection::Left, &limits(), &points());
        assert_eq!(snap, Snap { target: -160.0, index: 1 });
    }

    #[test]
    fn fast_swipe_right_retreats_exactly_one_card() {
        let mut r = resolver();
        r.resolve_release(-40.0, 0.12, SwipeDirection::Left, &limits(), &points());
        let snap = r.resolve_release(-120.0, 0.3, SwipeDirection::Right, &limits(), &points());
        assert_eq!(snap, Snap { target: 0.0, index: 0 });
    }

    #[test]
    fn fast_swipe_right_on_the_first_card_stays_put() {
        let mut r = resolver();
        let snap = r.resolve_release(-40.0, 0.4, SwipeDirection::Right, &limits(), &points());
        assert_eq!(snap, Snap { target: 0.0, index: 0 });
    }

    #[test]
    fn swipe_toward_an_unreachable_card_stops_at_max_right() {
        // container 360: card 2 would align at -320, past max_right -280
        let l = Limits::compute(360.0, 640.0, 20.0);
        let mut r = resolver();
        r.resolve_release(-100.0, 0.2, SwipeDirection::Left, &l, &points());
        assert_eq!(r.active_index(), 1);

        let snap = r.resolve_release(-250.0, 0.2, SwipeDirection::Left, &l, &points());
        assert_eq!(snap, Snap { target: -280.0, index: 3 });
    }

    #[test]
    fn swipe_onto_the_exact_range_end_takes_the_boundary_index() {
        // card 2 aligns exactly at max_right; the swipe still lands on the
        // end-of-range outcome, last index included
        let mut r = resolver();
        r.resolve_release(-100.0, 0.2, SwipeDirection::Left, &limits(), &points());
        assert_eq!(r.active_index(), 1);

        let snap = r.resolve_release(-250.0, 0.2, SwipeDirection::Left, &limits(), &points());
        assert_eq!(snap, Snap { target: -320.0, index: 3 });
    }

    #[test]
    fn swipe_left_on_the_last_card_resettles_at_the_range_end() {
        let mut r = resolver();
        r.resolve_release(-330.0, 0.0, SwipeDirection::Left, &limits(), &points());
        assert_eq!(r.active_index(), 3);

        let snap = r.resolve_release(-300.0, 0.2, SwipeDirection::Left, &limits(), &points());
        assert_eq!(snap, Snap { target: -320.0, index: 3 });
    }

    #[test]
    fn equidistant_release_prefers_the_later_card() {
        let mut r = resolver();
        let snap = r.resolve_release(-80.0, 0.0, SwipeDirection::Left, &limits(), &points());
        assert_eq!(snap, Snap { target: -160.0, index: 1 });
    }

    #[test]
    fn deep_release_past_every_card_takes_the_end_limit() {
        // -310 is closer to the end limit than to card 1, so the scan
        // short-circuits to the end before reaching card 2
        let mut r = resolver();
        let snap = r.resolve_release(-310.0, 0.0, SwipeDirection::Left, &limits(), &points());
        assert_eq!(snap, Snap { target: -320.0, index: 3 });
    }

    #[test]
    fn resolved_targets_never_pass_max_right() {
        let l = limits();
        let p = points();
        let mut r = resolver();
        for x in [-450.0, -320.0, -200.0, -90.0, 0.0, 15.0] {
            let snap = r.resolve_release(x, 0.0, SwipeDirection::Left, &l, &p);
            assert!(snap.target >= l.max_right, "target {} for x {}", snap.target, x);
            assert!(snap.target <= l.start, "target {} for x {}", snap.target, x);
        }
    }

    #[test]
    fn fitting_content_parks_every_release_at_start() {
        // container 320, content 200: no scrollable range
        let l = Limits::compute(320.0, 200.0, 20.0);
        let p = SnapPoints::from_left_offsets(&[0.0, 100.0]);
        let mut r = resolver();

        // the end band check would pick the positive end offset; the
        // reachable clamp brings it back to start
        let snap = r.resolve_release(-10.0, 0.0, SwipeDirection::Left, &l, &p);
        assert_eq!(snap, Snap { target: 0.0, index: 0 });

        let snap = r.resolve_release(-10.0, 0.5, SwipeDirection::Left, &l, &p);
        assert_eq!(snap, Snap { target: 0.0, index: 0 });
    }

    #[test]
    fn resolve_position_picks_the_nearest_point() {
        let mut r = resolver();
        let snap = r.resolve_position(-150.0, &limits(), &points());
        assert_eq!(snap, Snap { target: -160.0, index: 1 });
        assert_eq!(r.active_index(), 1);
    }

    #[test]
    fn resolve_position_past_the_range_takes_the_end() {
        // wider container: max_right shrinks to -200
        let l = Limits::compute(440.0, 640.0, 20.0);
        let mut r = resolver();
        let snap = r.resolve_position(-400.0, &l, &points());
        assert_eq!(snap, Snap { target: -200.0, index: 3 });
    }

    #[test]
    fn rebind_clamps_the_index_to_the_new_card_count() {
        let mut r = resolver();
        r.resolve_release(-330.0, 0.0, SwipeDirection::Left, &limits(), &points());
        assert_eq!(r.active_index(), 3);

        let fewer = SnapPoints::from_left_offsets(&[0.0, 160.0]);
        r.rebind(&fewer);
        assert_eq!(r.active_index(), 1);
    }
}
