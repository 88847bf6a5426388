//! Screen renderer
//!
//! Stateless draw routines. Each takes the panel plus the data for one
//! screen and emits panel primitives. Every routine starts with a buffer
//! clear and ends with a flush, except [`draw_sync_indicator`] which draws
//! over whatever is already shown.

pub mod bitmaps;
mod screens;

pub use screens::*;

/// Advance of one glyph at text size 1
pub const CHAR_WIDTH: u32 = 6;

/// Line height of small text
pub const LINE_HEIGHT: i32 = 10;

/// Most scan results listed
pub const MAX_LISTED_NETWORKS: usize = 5;

/// Data behind one clock render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockFace {
    pub hour: u8,
    pub minute: u8,
    /// 1-31
    pub day: u8,
    /// 1-12
    pub month: u8,
    pub steps: u32,
    pub low_battery: bool,
}
