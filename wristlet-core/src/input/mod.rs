//! Input and timeout coordination
//!
//! All waiting in the watch goes through the [`InputCoordinator`], which
//! owns the button and the monotonic clock. Tests swap both for fakes.

pub mod coordinator;
pub mod timeout;

pub use coordinator::{InputCoordinator, WaitOutcome};
pub use timeout::TimeoutWindow;
