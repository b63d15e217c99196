//! Snap points: the per-card offsets the strip settles on.

use smallvec::SmallVec;

use crate::geometry::INLINE_CARDS;

/// Ordered settle offsets, one per card.
///
/// Each point is the content offset that left-aligns its card with the
/// container: `points[i] = -left_offset[i]`. By construction the sequence
/// is non-increasing and starts at 0, so index 0 is the strip's logical
/// start. Built from measurements that already passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapPoints {
    points: SmallVec<[f32; INLINE_CARDS]>,
}

impl SnapPoints {
    /// Builds snap points from ascending card left offsets.
    pub fn from_left_offsets(offsets: &[f32]) -> Self {
        debug_assert!(!offsets.is_empty());
        debug_assert!(offsets[0] == 0.0);
        let points = offsets.iter().map(|offset| -offset).collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the last card.
    pub fn last_index(&self) -> usize {
        self.points.len() - 1
    }

    /// The settle offset of card `index`. Panics past the last card.
    pub fn point(&self, index: usize) -> f32 {
        self.points[index]
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.points.get(index).copied()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.points
    }
}
