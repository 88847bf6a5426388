//! Configuration types
//!
//! Board-agnostic watch configuration, optionally stored in flash as
//! postcard binary data.

#[cfg(feature = "serde")]
pub mod store;
pub mod types;

pub use types::*;
