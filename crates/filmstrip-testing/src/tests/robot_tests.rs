use super::*;
use crate::assertions::{assert_approx_eq, assert_snap};

use std::time::Duration;

// container 320, four 160 px card slots, content 640
fn four_cards() -> UniformCards {
    UniformCards::new(4, 320.0)
}

#[test]
fn slow_drag_settles_on_the_nearest_card() {
    let mut robot = SliderRobot::launch(four_cards());
    let snap = robot.drag_release(-100.0);

    assert_snap(snap, -160.0, 1, "nearest card after a slow drag");
    assert_approx_eq(robot.position(), -160.0, 0.001, "settled position");
    assert_eq!(robot.active_index(), 1);
}

#[test]
fn live_writes_follow_the_finger_and_settles_animate() {
    let mut robot = SliderRobot::launch(four_cards());
    robot.press();
    robot.drag_to(-50.0);
    robot.drag_to(-100.0);
    robot.release(-100.0, 0.0, SwipeDirection::Left);

    assert_eq!(
        robot.applied(),
        &[
            AppliedPosition { x: -50.0, animated: false },
            AppliedPosition { x: -100.0, animated: false },
            AppliedPosition { x: -160.0, animated: true },
        ]
    );
}

#[test]
fn flick_left_then_right_walks_the_strip() {
    let mut robot = SliderRobot::launch(four_cards());

    assert_snap(robot.flick(SwipeDirection::Left), -160.0, 1, "first flick");
    // card 2 aligns exactly at the range end, so the second flick lands
    // on the end-of-range outcome with the boundary index
    assert_snap(robot.flick(SwipeDirection::Left), -320.0, 3, "second flick");

    assert_snap(robot.flick(SwipeDirection::Right), -320.0, 2, "back one card");
    assert_snap(robot.flick(SwipeDirection::Right), -160.0, 1, "back again");
    assert_snap(robot.flick(SwipeDirection::Right), 0.0, 0, "back at the start");
    // a further right flick has nowhere to go
    assert_snap(robot.flick(SwipeDirection::Right), 0.0, 0, "stays at the start");

    robot.close();
}

#[test]
fn threshold_velocity_counts_as_a_swipe() {
    let mut robot = SliderRobot::launch(four_cards());
    robot.press();
    robot.drag_to(-40.0);
    let snap = robot.release(-40.0, 0.1, SwipeDirection::Left);

    assert_snap(snap, -160.0, 1, "threshold velocity advances a card");
}

#[test]
fn custom_swipe_threshold_shifts_the_cut() {
    let cards = four_cards();
    let options = SliderOptions::new().swipe_velocity(0.5);
    let mut robot = SliderRobot::launch_with_options(cards, options);

    robot.press();
    robot.drag_to(-40.0);
    let snap = robot.release(-40.0, 0.3, SwipeDirection::Left);
    assert_snap(snap, 0.0, 0, "0.3 px/ms is below the raised threshold");

    robot.press();
    robot.drag_to(-40.0);
    let snap = robot.release(-40.0, 0.6, SwipeDirection::Left);
    assert_snap(snap, -160.0, 1, "0.6 px/ms clears the raised threshold");
}

#[test]
fn deep_release_sticks_to_the_end_band() {
    let mut robot = SliderRobot::launch(four_cards());
    let snap = robot.drag_release(-330.0);

    assert_snap(snap, -320.0, 3, "release inside the end band");
}

#[test]
fn overscroll_release_returns_to_start() {
    let mut robot = SliderRobot::launch(four_cards());
    let snap = robot.drag_release(15.0);

    assert_snap(snap, 0.0, 0, "release inside the start band");
    assert_approx_eq(robot.position(), 0.0, 0.001, "back at the start");
}

#[test]
fn rescaled_cards_keep_the_active_card_aligned() {
    let mut robot = SliderRobot::launch(four_cards());
    robot.drag_release(-100.0);
    assert_eq!(robot.active_index(), 1);

    // cards grow from 150 to 190, so slots span 200 px
    let snap = robot.resize_cards(190.0);

    assert_snap(snap, -200.0, 1, "card 1 re-aligned after the rescale");
    assert_approx_eq(robot.position(), -200.0, 0.001, "re-applied position");
}

#[test]
fn dropping_cards_resettles_inside_the_shrunken_strip() {
    let mut robot = SliderRobot::launch(four_cards());
    robot.drag_release(-330.0);
    assert_eq!(robot.active_index(), 3);

    // two slots fill the container exactly; nothing scrolls any more
    let snap = robot.set_card_count(2);

    assert_snap(snap, 0.0, 0, "no scrollable range left");
    assert_eq!(robot.active_index(), 0);
}

#[test]
fn container_growth_that_swallows_the_strip_parks_at_start() {
    let mut robot = SliderRobot::launch(four_cards());
    robot.drag_release(-180.0);
    assert_eq!(robot.active_index(), 1);

    let snap = robot.resize_container(700.0);

    assert_snap(snap, 0.0, 0, "content fits, strip parks at start");
}

#[test]
fn resize_with_an_unchanged_layout_is_idempotent() {
    let mut robot = SliderRobot::launch(four_cards());
    robot.drag_release(-100.0);

    let first = robot.resize_container(320.0);
    let second = robot.resize_container(320.0);

    assert_snap(first, -160.0, 1, "first resize");
    assert_eq!(second, first);
    assert_approx_eq(robot.position(), -160.0, 0.001, "position undisturbed");
}

#[test]
fn bounce_roundtrip_records_both_writes() {
    let mut robot = SliderRobot::launch(four_cards());
    let settle = robot.bounce(30.0, 0.0);

    assert_eq!(settle.delay, Duration::from_millis(200));
    assert_eq!(
        robot.applied(),
        &[
            AppliedPosition { x: 20.0, animated: true },
            AppliedPosition { x: 0.0, animated: true },
        ]
    );
}

#[test]
fn guides_follow_the_overlay_option() {
    let cards = four_cards();
    let options = SliderOptions::new().debug_overlay(true);
    let mut robot = SliderRobot::launch_with_options(cards, options);
    assert_eq!(robot.recording().guides(), &[-320.0]);

    robot.resize_container(400.0);

    assert_eq!(robot.recording().guides(), &[-240.0]);
    assert_eq!(robot.recording().guide_clears(), 1);
}

#[test]
fn resolved_positions_never_leave_the_reachable_range() {
    let mut robot = SliderRobot::launch(four_cards());
    let max_right = robot.controller().layout().limits.max_right;

    for x in [-500.0, -330.0, -250.0, -90.0, 30.0] {
        let snap = robot.drag_release(x - robot.position());
        assert!(
            snap.target >= max_right && snap.target <= 0.0,
            "target {} escaped the range for release at {}",
            snap.target,
            x
        );
    }
}
