//! Motion rendering pipeline
//!
//! Raw accelerometer samples are smoothed into rotation angles, and the
//! unit cube is rotated and projected onto the panel with them.

pub mod cube;
pub mod projection;
pub mod smoother;

pub use cube::{CUBE_EDGES, CUBE_VERTICES};
pub use projection::{project, RotationAngles, ScreenPoint};
pub use smoother::MotionSmoother;
