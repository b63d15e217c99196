//! The slider controller: gesture entry points, resize reaction, output.

use log::{debug, warn};

use crate::bounce::Settle;
use crate::error::{Result, SliderError};
use crate::gesture::{DragState, GestureEvent, GesturePhase, SwipeDirection};
use crate::geometry::GeometryProvider;
use crate::layout::{compute_layout, Layout};
use crate::options::SliderOptions;
use crate::position::{PositionTracker, RenderSink};
use crate::resolver::{Snap, SnapResolver};

/// Gesture-driven snap positioning for one horizontal card slider.
///
/// The controller owns the full decision pipeline: measurements from the
/// [`GeometryProvider`] become a [`Layout`], gesture events move the strip
/// through the [`RenderSink`], and every release or resize settles on a
/// snap target. Hosts drive it from a single thread, one event at a time;
/// each call runs to completion.
///
/// Construction assumes the strip is rendered at the logical start offset,
/// matching a freshly laid out slider.
pub struct SliderController<P, S> {
    provider: P,
    tracker: PositionTracker<S>,
    resolver: SnapResolver,
    options: SliderOptions,
    layout: Layout,
    phase: GesturePhase,
    drag: Option<DragState>,
}

impl<P: GeometryProvider, S: RenderSink> SliderController<P, S> {
    /// Measures, validates, and lays out the initial geometry.
    pub fn new(provider: P, sink: S, options: SliderOptions) -> Result<Self> {
        let measurements = provider.measure();
        let layout = compute_layout(&measurements, options.bounce_distance)?;
        debug!(
            "slider ready: {} cards, snap range [{:.1}, {:.1}]",
            layout.cards.count, layout.limits.max_right, layout.limits.start
        );

        let mut controller = Self {
            provider,
            tracker: PositionTracker::new(sink),
            resolver: SnapResolver::new(options.swipe_velocity),
            options,
            layout,
            phase: GesturePhase::Idle,
            drag: None,
        };
        controller.draw_overlay();
        Ok(controller)
    }

    /// Begins a gesture at the current position.
    ///
    /// A start arriving while another gesture is active is a protocol
    /// violation and returns an error, but the new gesture is still
    /// adopted: the stale [`DragState`] is discarded so a lossy host
    /// cannot wedge the machine.
    pub fn on_drag_start(&mut self) -> Result<()> {
        let adopted_over = match self.phase {
            GesturePhase::Idle => None,
            phase => Some(phase),
        };
        self.phase = GesturePhase::Dragging;
        self.drag = Some(DragState::begin(self.tracker.current()));

        match adopted_over {
            None => Ok(()),
            Some(phase) => {
                warn!("drag start while {phase:?}; adopting the new gesture");
                Err(SliderError::InvalidGestureSequence(
                    "drag start while a gesture was active".into(),
                ))
            }
        }
    }

    /// Tracks the finger during a gesture.
    ///
    /// `delta_x` is relative to the gesture's start position. The implied
    /// position is clamped to the hard drag range and applied without
    /// animation so the content follows the finger.
    pub fn on_drag_move(&mut self, delta_x: f32) -> Result<()> {
        let x = {
            let Some(drag) = self.drag.as_mut() else {
                warn!("drag move arrived without an active drag");
                return Err(SliderError::InvalidGestureSequence(
                    "drag move without an active drag".into(),
                ));
            };
            drag.current_delta_x = delta_x;
            self.layout.limits.clamp_drag(drag.position())
        };
        self.tracker.apply(x, false);
        Ok(())
    }

    /// Completes a gesture and settles the strip.
    ///
    /// The release position stays unclamped on purpose: the boundary bands
    /// and the closest-point scan want to see how far the finger actually
    /// went. The resolved target is applied animated and returned.
    pub fn on_drag_end(
        &mut self,
        delta_x: f32,
        velocity_x: f32,
        direction: SwipeDirection,
    ) -> Result<Snap> {
        let Some(mut drag) = self.drag.take() else {
            warn!("drag end arrived without an active drag");
            return Err(SliderError::InvalidGestureSequence(
                "drag end without an active drag".into(),
            ));
        };
        self.phase = GesturePhase::Resolving;
        drag.current_delta_x = delta_x;
        drag.velocity_x = velocity_x;
        drag.direction = Some(direction);

        let snap = self.resolver.resolve_release(
            drag.position(),
            velocity_x,
            direction,
            &self.layout.limits,
            &self.layout.snap_points,
        );
        self.tracker.apply(snap.target, true);
        self.phase = GesturePhase::Idle;
        Ok(snap)
    }

    /// Dispatches a typed [`GestureEvent`] to the matching handler.
    ///
    /// Only a drag end produces a [`Snap`].
    pub fn apply_gesture(&mut self, event: GestureEvent) -> Result<Option<Snap>> {
        match event {
            GestureEvent::DragStart => self.on_drag_start().map(|_| None),
            GestureEvent::DragMove { delta_x } => self.on_drag_move(delta_x).map(|_| None),
            GestureEvent::DragEnd {
                delta_x,
                velocity_x,
                direction,
            } => self
                .on_drag_end(delta_x, velocity_x, direction)
                .map(Some),
        }
    }

    /// Re-measures the geometry and re-snaps the current position.
    ///
    /// Runs the whole layout pass again, keeps the active index inside the
    /// possibly smaller card count, and settles the recorded position onto
    /// the nearest point of the new layout. Idempotent when neither the
    /// geometry nor the position changed. A resize during an active drag
    /// re-snaps immediately; the still-running gesture continues from its
    /// original start position.
    pub fn on_resize(&mut self) -> Result<Snap> {
        if self.options.debug_overlay {
            self.tracker.sink_mut().clear_guides();
        }
        let measurements = self.provider.measure();
        self.layout = compute_layout(&measurements, self.options.bounce_distance)?;
        debug!(
            "layout recomputed: {} cards, snap range [{:.1}, {:.1}]",
            self.layout.cards.count, self.layout.limits.max_right, self.layout.limits.start
        );
        self.resolver.rebind(&self.layout.snap_points);
        self.draw_overlay();

        let snap = self.resolver.resolve_position(
            self.tracker.current(),
            &self.layout.limits,
            &self.layout.snap_points,
        );
        self.tracker.apply(snap.target, true);
        Ok(snap)
    }

    /// Plays the first half of a bounce and plans the second.
    ///
    /// The overshoot is clamped to the hard drag range and applied
    /// animated right away. The returned [`Settle`] names the final
    /// position, clamped to the reachable range; the host waits out
    /// `settle.delay` and passes it to [`apply_settle`](Self::apply_settle).
    pub fn bounce(&mut self, overshoot_x: f32, final_x: f32) -> Settle {
        let overshoot = self.layout.limits.clamp_drag(overshoot_x);
        self.tracker.apply(overshoot, true);

        let (low, high) = self.layout.limits.reachable();
        Settle::after_bounce(final_x.clamp(low, high))
    }

    /// Completes a bounce after the host has waited out its delay.
    pub fn apply_settle(&mut self, settle: Settle) {
        self.tracker.apply(settle.position, true);
    }

    /// The layout derived from the most recent measurement pass.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Card the strip last settled on.
    pub fn active_index(&self) -> usize {
        self.resolver.active_index()
    }

    /// Last position written to the sink.
    pub fn position(&self) -> f32 {
        self.tracker.current()
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    /// The active gesture, if one is in flight.
    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn sink(&self) -> &S {
        self.tracker.sink()
    }

    pub fn sink_mut(&mut self) -> &mut S {
        self.tracker.sink_mut()
    }

    fn draw_overlay(&mut self) {
        if self.options.debug_overlay {
            let max_right = self.layout.limits.max_right;
            self.tracker.sink_mut().draw_guide(max_right);
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
