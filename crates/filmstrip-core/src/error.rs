use thiserror::Error;

/// Errors reported at the validation boundaries of the slider core.
///
/// Geometry problems surface when measurements enter the system; gesture
/// sequence problems surface when events arrive out of order. Everything in
/// between trusts its inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SliderError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("gesture out of sequence: {0}")]
    InvalidGestureSequence(String),
}

pub type Result<T> = std::result::Result<T, SliderError>;
