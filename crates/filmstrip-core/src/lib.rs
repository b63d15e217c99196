//! Filmstrip core: gesture-driven snap positioning for horizontal card sliders.
//!
//! The crate is headless. A [`GeometryProvider`] supplies pixel
//! measurements, gesture events arrive as plain method calls on
//! [`SliderController`], and the sole output is
//! [`RenderSink::set_position`]. Layout computation, live drag clamping,
//! and snap resolution live here; rendering, animation timing, and input
//! recognition stay with the host.

pub mod bounce;
pub mod constants;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod geometry;
pub mod layout;
pub mod limits;
pub mod options;
pub mod position;
pub mod resolver;
pub mod snap;

pub use bounce::Settle;
pub use controller::SliderController;
pub use error::{Result, SliderError};
pub use gesture::{DragState, GestureEvent, GesturePhase, SwipeDirection};
pub use geometry::{CardGeometry, GeometryProvider, Measurements};
pub use layout::{compute_layout, Layout};
pub use limits::Limits;
pub use options::SliderOptions;
pub use position::{PositionTracker, RenderSink};
pub use resolver::{Snap, SnapResolver};
pub use snap::SnapPoints;

pub mod prelude {
    pub use crate::controller::SliderController;
    pub use crate::error::{Result, SliderError};
    pub use crate::gesture::{GestureEvent, GesturePhase, SwipeDirection};
    pub use crate::geometry::{GeometryProvider, Measurements};
    pub use crate::options::SliderOptions;
    pub use crate::position::RenderSink;
    pub use crate::resolver::Snap;
}
