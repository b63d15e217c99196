//! A render sink that records everything instead of rendering.

use filmstrip_core::RenderSink;

/// One write observed by the [`RecordingSink`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedPosition {
    pub x: f32,
    pub animated: bool,
}

/// Captures every position and guide request the controller emits.
///
/// Tests read the log back to assert on ordering and animation flags, the
/// way a snapshot of a rendered scene would be inspected.
#[derive(Debug, Default)]
pub struct RecordingSink {
    positions: Vec<AppliedPosition>,
    guides: Vec<f32>,
    guide_clears: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every position write, oldest first.
    pub fn positions(&self) -> &[AppliedPosition] {
        &self.positions
    }

    pub fn last_position(&self) -> Option<AppliedPosition> {
        self.positions.last().copied()
    }

    /// Only the animated writes, which are the settled targets.
    pub fn settled_targets(&self) -> Vec<f32> {
        self.positions
            .iter()
            .filter(|p| p.animated)
            .map(|p| p.x)
            .collect()
    }

    /// Guide markers requested since the last clear, oldest first.
    pub fn guides(&self) -> &[f32] {
        &self.guides
    }

    pub fn guide_clears(&self) -> usize {
        self.guide_clears
    }
}

impl RenderSink for RecordingSink {
    fn set_position(&mut self, x: f32, animated: bool) {
        self.positions.push(AppliedPosition { x, animated });
    }

    fn draw_guide(&mut self, x: f32) {
        self.guides.push(x);
    }

    fn clear_guides(&mut self) {
        self.guides.clear();
        self.guide_clears += 1;
    }
}
