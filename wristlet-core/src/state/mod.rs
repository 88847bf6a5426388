//! Watch mode state machine
//!
//! Defines what the watch is doing at any moment. The state machine is
//! explicit, finite, and deterministic; the controller feeds it events
//! and renders whatever mode it lands in.

pub mod events;
pub mod machine;
pub mod menu;

pub use events::Event;
pub use machine::{ErrorKind, Mode, SELF_DESTRUCT_SECONDS};
pub use menu::{MenuPage, PAGE_COUNT};
