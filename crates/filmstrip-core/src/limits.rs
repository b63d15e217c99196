//! Offset limits for the sliding strip.

/// Horizontal offset limits for one layout pass, in logical pixels.
///
/// `start` and `end` are the logical resting offsets of the first and last
/// positions. `left` and `right` widen them by the bounce distance so a
/// live drag can overshoot slightly; the band between a resting offset and
/// its widened edge is also the boundary detection zone on release.
/// `max_right` is the most negative offset at which the last card is still
/// fully revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub start: f32,
    pub end: f32,
    pub left: f32,
    pub right: f32,
    pub max_right: f32,
}

impl Limits {
    /// Derives limits from container and content width.
    ///
    /// When content overflows the container, `max_right <= end <= start`
    /// holds. When it fits, `end` and `max_right` turn positive and the
    /// strip has no scrollable range; see [`Limits::reachable`].
    pub fn compute(container_width: f32, content_width: f32, bounce: f32) -> Self {
        let difference = container_width - content_width;
        let end = container_width.min(difference);
        let start = 0.0;
        let left = start + bounce;
        let right = if container_width > content_width {
            -bounce
        } else {
            end - bounce
        };
        let max_right = -(content_width - container_width);
        Self {
            start,
            end,
            left,
            right,
            max_right,
        }
    }

    /// True when `x` sits in the bounce band past the logical start.
    pub fn is_at_start(&self, x: f32) -> bool {
        x > self.start && x <= self.left
    }

    /// True when `x` sits in the bounce band past the logical end.
    pub fn is_at_end(&self, x: f32) -> bool {
        x < self.end && x >= self.right
    }

    /// Clamps a live drag position into the hard drag range.
    pub fn clamp_drag(&self, x: f32) -> f32 {
        self.left.min(self.right.max(x))
    }

    /// The `(low, high)` range a settled position may occupy.
    ///
    /// Normally `(max_right, start)`. For a strip whose content fits its
    /// container the pair degenerates to `(start, start)` and every
    /// resolution parks at `start`.
    pub fn reachable(&self) -> (f32, f32) {
        (self.max_right.min(self.start), self.start)
    }

    /// True when the content overflows the container and the strip can
    /// actually scroll.
    pub fn has_overflow(&self) -> bool {
        self.max_right < self.start
    }
}
