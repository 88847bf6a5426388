//! Elapsed-time windows

/// A start timestamp plus a duration
///
/// Once elapsed, a window stays elapsed; its owner fires one transition
/// and then drops it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeoutWindow {
    pub start_ms: u64,
    pub duration_ms: u64,
}

impl TimeoutWindow {
    pub const fn new(start_ms: u64, duration_ms: u64) -> Self {
        Self {
            start_ms,
            duration_ms,
        }
    }

    /// Whether the window has elapsed at the given time
    pub fn elapsed_at(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Milliseconds left at the given time (0 once elapsed)
    pub fn remaining_at(&self, now_ms: u64) -> u64 {
        self.duration_ms
            .saturating_sub(now_ms.saturating_sub(self.start_ms))
    }
}
