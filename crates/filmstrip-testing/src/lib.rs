//! Testing utilities and robot harness for Filmstrip.

pub mod assertions;
pub mod geometry;
pub mod recording;
pub mod robot;

pub use assertions::{assert_approx_eq, assert_snap};
pub use geometry::UniformCards;
pub use recording::{AppliedPosition, RecordingSink};
pub use robot::SliderRobot;

pub mod prelude {
    pub use crate::assertions::{assert_approx_eq, assert_snap};
    pub use crate::geometry::UniformCards;
    pub use crate::recording::{AppliedPosition, RecordingSink};
    pub use crate::robot::SliderRobot;
}
