//! Card geometry and the measurement seam to the host.
//!
//! The core never touches a widget tree or a DOM. A [`GeometryProvider`]
//! hands it finished pixel measurements at construction time and again on
//! every resize notification; everything else is derived from those.

use smallvec::SmallVec;

use crate::error::{Result, SliderError};

/// Inline capacity for per-card values. Sliders typically hold a handful
/// of cards, so offsets and snap points stay off the heap.
pub(crate) const INLINE_CARDS: usize = 8;

/// Uniform card dimensions, taken from the first card of the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardGeometry {
    /// Number of cards in the strip, at least 1.
    pub count: usize,
    /// Outer width of a card.
    pub width: f32,
    /// Outer height of a card.
    pub height: f32,
    /// Horizontal margin trailing each card.
    pub margin: f32,
}

/// One full measurement pass over the slider, in logical pixels.
///
/// `card_left_offsets` holds each card's left edge relative to the strip
/// origin, in card order. The first entry is 0 and the rest ascend.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurements {
    /// Width of the clipping container.
    pub container_width: f32,
    /// Total width of the card strip, margins included.
    pub content_width: f32,
    /// Left edge of every card, ascending, first entry 0.
    pub card_left_offsets: SmallVec<[f32; INLINE_CARDS]>,
    /// Outer width of the first card.
    pub card_width: f32,
    /// Outer height of the first card.
    pub card_height: f32,
    /// Trailing margin of the first card.
    pub card_margin: f32,
}

impl Measurements {
    /// Checks the invariants the rest of the core relies on.
    ///
    /// Runs once per layout pass; downstream code trusts the result and
    /// indexes without further checks.
    pub fn validate(&self) -> Result<()> {
        if self.card_left_offsets.is_empty() {
            return Err(SliderError::InvalidGeometry("no cards measured".into()));
        }
        let dimensions = [
            ("container width", self.container_width),
            ("content width", self.content_width),
            ("card width", self.card_width),
            ("card height", self.card_height),
            ("card margin", self.card_margin),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                return Err(SliderError::InvalidGeometry(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.card_left_offsets[0] != 0.0 {
            return Err(SliderError::InvalidGeometry(format!(
                "first card offset must be 0, got {}",
                self.card_left_offsets[0]
            )));
        }
        for pair in self.card_left_offsets.windows(2) {
            if !pair[1].is_finite() || pair[1] <= pair[0] {
                return Err(SliderError::InvalidGeometry(format!(
                    "card offsets must ascend, got {} after {}",
                    pair[1], pair[0]
                )));
            }
        }
        Ok(())
    }

    /// Uniform card dimensions derived from the first card.
    pub fn card_geometry(&self) -> CardGeometry {
        CardGeometry {
            count: self.card_left_offsets.len(),
            width: self.card_width,
            height: self.card_height,
            margin: self.card_margin,
        }
    }
}

/// Supplies pixel measurements to the controller.
///
/// Implementations read whatever the host renders into: DOM rectangles,
/// widget trees, or plain fixtures in tests. The controller calls
/// [`measure`](GeometryProvider::measure) once at construction and once
/// per resize notification, never in between.
pub trait GeometryProvider {
    fn measure(&self) -> Measurements;
}
