use std::cell::Cell;
use std::rc::Rc;
use std::thread;

use filmstrip_core::{
    GeometryProvider, Measurements, RenderSink, SliderController, SliderOptions, SwipeDirection,
};

/// Five fixed poster cards, 180 px wide with a 20 px gutter, so each slot
/// spans 200 px. Only the container width changes at runtime.
#[derive(Clone)]
struct DemoStrip {
    container_width: Rc<Cell<f32>>,
}

impl DemoStrip {
    fn new(container_width: f32) -> Self {
        Self {
            container_width: Rc::new(Cell::new(container_width)),
        }
    }

    fn set_container_width(&self, width: f32) {
        self.container_width.set(width);
    }
}

impl GeometryProvider for DemoStrip {
    fn measure(&self) -> Measurements {
        let spacing = 200.0;
        Measurements {
            container_width: self.container_width.get(),
            content_width: spacing * 5.0,
            card_left_offsets: (0..5).map(|i| i as f32 * spacing).collect(),
            card_width: 180.0,
            card_height: 120.0,
            card_margin: 20.0,
        }
    }
}

/// Logs what a render layer would be asked to do.
struct ConsoleSink;

impl RenderSink for ConsoleSink {
    fn set_position(&mut self, x: f32, animated: bool) {
        if animated {
            log::info!("render: animate to {x:.1}");
        } else {
            log::info!("render: move to {x:.1}");
        }
    }

    fn draw_guide(&mut self, x: f32) {
        log::info!("render: guide marker at {x:.1}");
    }

    fn clear_guides(&mut self) {
        log::info!("render: clear guide markers");
    }
}

fn report(slider: &SliderController<DemoStrip, ConsoleSink>, label: &str) {
    let layout = slider.layout();
    println!(
        "{label}: {} cards, active card {}, position {:.1}, settle range [{:.1}, {:.1}]",
        layout.cards.count,
        slider.active_index(),
        slider.position(),
        layout.limits.max_right,
        layout.limits.start
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Filmstrip Slider Demo ===");
    println!("A scripted gesture session against the positioning core:");
    println!("  - live drags track the finger, releases snap to cards");
    println!("  - a fast flick advances one card regardless of travel");
    println!("  - a release near the far edge sticks to the end");
    println!("  - resizes re-align the strip, bounces overshoot and settle");
    println!();

    let strip = DemoStrip::new(480.0);
    let mut slider = SliderController::new(
        strip.clone(),
        ConsoleSink,
        SliderOptions::new().debug_overlay(true),
    )?;
    report(&slider, "initial layout");

    // a slow drag most of the way toward card 1
    slider.on_drag_start()?;
    for delta in [-40.0, -90.0, -130.0] {
        slider.on_drag_move(delta)?;
    }
    let snap = slider.on_drag_end(-130.0, 0.04, SwipeDirection::Left)?;
    println!("slow drag to -130 -> card {} at {:.1}", snap.index, snap.target);

    // a quick flick with barely any travel
    slider.on_drag_start()?;
    slider.on_drag_move(-30.0)?;
    let snap = slider.on_drag_end(-30.0, 0.25, SwipeDirection::Left)?;
    println!("flick at 0.25 px/ms -> card {} at {:.1}", snap.index, snap.target);

    // a deep drag into the end band
    slider.on_drag_start()?;
    slider.on_drag_move(-60.0)?;
    slider.on_drag_move(-125.0)?;
    let snap = slider.on_drag_end(-125.0, 0.02, SwipeDirection::Left)?;
    println!("deep drag to the edge -> card {} at {:.1}", snap.index, snap.target);

    // the window narrows; the strip re-aligns to the new layout
    strip.set_container_width(390.0);
    let snap = slider.on_resize()?;
    println!("container now 390 -> card {} at {:.1}", snap.index, snap.target);

    // a bounce: overshoot, hold, settle back
    let settle = slider.bounce(slider.position() + 12.0, slider.position());
    thread::sleep(settle.delay);
    slider.apply_settle(settle);
    println!("bounce settled after {:?}", settle.delay);

    println!();
    report(&slider, "final state");
    Ok(())
}
