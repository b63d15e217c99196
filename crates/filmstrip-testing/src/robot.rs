//! Black-box robot harness for driving a slider like a user would.

use filmstrip_core::{
    Settle, SliderController, SliderOptions, Snap, SwipeDirection,
};

use crate::geometry::UniformCards;
use crate::recording::{AppliedPosition, RecordingSink};

/// Headless harness that wraps a [`SliderController`] with fixture
/// geometry and a recording sink to enable robot style tests against the
/// full gesture pipeline.
///
/// The robot exposes gesture interactions (press, drag, release, flick),
/// geometry reshaping, and access to the recorded output so tests assert
/// on what a render layer would have been told to do.
pub struct SliderRobot {
    cards: UniformCards,
    controller: SliderController<UniformCards, RecordingSink>,
}

impl SliderRobot {
    /// Launch a robot-controlled slider with default options.
    ///
    /// Panics when the fixture geometry fails validation, which in a test
    /// means the fixture itself is wrong.
    pub fn launch(cards: UniformCards) -> Self {
        Self::launch_with_options(cards, SliderOptions::default())
    }

    /// Launch a robot-controlled slider with explicit options.
    pub fn launch_with_options(cards: UniformCards, options: SliderOptions) -> Self {
        let controller = SliderController::new(cards.clone(), RecordingSink::new(), options)
            .expect("fixture geometry must validate");
        Self { cards, controller }
    }

    /// Put the virtual finger down at the current position.
    pub fn press(&mut self) {
        self.controller
            .on_drag_start()
            .expect("press requires an idle slider");
    }

    /// Drag the virtual finger `delta_x` from where the press happened.
    pub fn drag_to(&mut self, delta_x: f32) {
        self.controller
            .on_drag_move(delta_x)
            .expect("drag requires a pressed slider");
    }

    /// Lift the virtual finger and let the strip settle.
    pub fn release(&mut self, delta_x: f32, velocity_x: f32, direction: SwipeDirection) -> Snap {
        self.controller
            .on_drag_end(delta_x, velocity_x, direction)
            .expect("release requires a pressed slider")
    }

    /// Convenience helper running a full slow gesture: press, drag to
    /// `delta_x`, release below the swipe threshold.
    pub fn drag_release(&mut self, delta_x: f32) -> Snap {
        let direction = if delta_x < 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        };
        self.press();
        self.drag_to(delta_x);
        self.release(delta_x, 0.0, direction)
    }

    /// Convenience helper running a fast swipe with little travel.
    pub fn flick(&mut self, direction: SwipeDirection) -> Snap {
        let delta_x = match direction {
            SwipeDirection::Left => -40.0,
            SwipeDirection::Right => 40.0,
        };
        self.press();
        self.drag_to(delta_x);
        self.release(delta_x, 0.3, direction)
    }

    /// Resize the container and deliver the resize notification.
    pub fn resize_container(&mut self, width: f32) -> Snap {
        self.cards.set_container_width(width);
        self.controller
            .on_resize()
            .expect("fixture geometry must stay valid")
    }

    /// Rescale every card and deliver the resize notification.
    pub fn resize_cards(&mut self, card_width: f32) -> Snap {
        self.cards.set_card_width(card_width);
        self.controller
            .on_resize()
            .expect("fixture geometry must stay valid")
    }

    /// Change the card count and deliver the resize notification.
    pub fn set_card_count(&mut self, count: usize) -> Snap {
        self.cards.set_count(count);
        self.controller
            .on_resize()
            .expect("fixture geometry must stay valid")
    }

    /// Play a bounce and immediately complete its settle, skipping the
    /// delay a real host would wait out.
    pub fn bounce(&mut self, overshoot_x: f32, final_x: f32) -> Settle {
        let settle = self.controller.bounce(overshoot_x, final_x);
        self.controller.apply_settle(settle);
        settle
    }

    /// Last position written to the recording sink.
    pub fn position(&self) -> f32 {
        self.controller.position()
    }

    /// Card the strip last settled on.
    pub fn active_index(&self) -> usize {
        self.controller.active_index()
    }

    /// Every write the controller has emitted, oldest first.
    pub fn applied(&self) -> &[AppliedPosition] {
        self.controller.sink().positions()
    }

    /// The recording sink itself, for guide and clear assertions.
    pub fn recording(&self) -> &RecordingSink {
        self.controller.sink()
    }

    /// The wrapped controller, for assertions the verbs do not cover.
    pub fn controller(&self) -> &SliderController<UniformCards, RecordingSink> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SliderController<UniformCards, RecordingSink> {
        &mut self.controller
    }

    /// Shut down the robot-controlled slider. Dropping the instance works
    /// too; this is provided for clarity in tests.
    pub fn close(self) {}
}

#[cfg(test)]
#[path = "tests/robot_tests.rs"]
mod tests;
