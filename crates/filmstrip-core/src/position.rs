//! The render output seam and the position record behind it.

/// Receives every position the controller decides on.
///
/// This is the core's only output effect. `animated` asks the render layer
/// to interpolate the transition; live drag samples arrive with
/// `animated = false` so the content tracks the finger without transition
/// lag, while every settled target arrives with `animated = true`.
///
/// The guide methods carry the optional debug overlay and default to
/// no-ops so ordinary sinks implement one method.
pub trait RenderSink {
    /// Applies a horizontal content offset in logical pixels.
    fn set_position(&mut self, x: f32, animated: bool);

    /// Draws a diagnostic guide marker at offset `x`.
    fn draw_guide(&mut self, x: f32) {
        let _ = x;
    }

    /// Removes previously drawn guide markers.
    fn clear_guides(&mut self) {}
}

/// Applies positions to a [`RenderSink`] and remembers the last one.
///
/// The record stands in for reading the live offset back from the render
/// layer: drag starts and resize reactions consult it instead of asking
/// the host what it currently shows.
#[derive(Debug)]
pub struct PositionTracker<S> {
    sink: S,
    current: f32,
}

impl<S: RenderSink> PositionTracker<S> {
    /// Wraps `sink` with the position record at the logical start.
    pub fn new(sink: S) -> Self {
        Self { sink, current: 0.0 }
    }

    /// Writes `x` to the sink and records it as current.
    pub fn apply(&mut self, x: f32, animated: bool) {
        self.sink.set_position(x, animated);
        self.current = x;
    }

    /// The last applied position.
    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
