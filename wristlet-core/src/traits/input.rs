//! Button and time-source traits

/// Events reported by the button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Short press, reported when the button is released
    Press,
    /// Held past the long-press threshold; reported once, instead of `Press`
    LongPress,
}

/// Trait for the single user button
pub trait ButtonInput {
    /// Sample the button and report at most one new event
    ///
    /// `now_ms` is the monotonic time of the sample, used for debouncing
    /// and long-press detection.
    fn poll(&mut self, now_ms: u64) -> Option<ButtonEvent>;
}

/// Trait for the monotonic time source
pub trait SystemClock {
    /// Milliseconds since an arbitrary fixed point
    fn now_ms(&self) -> u64;

    /// Block for the given number of milliseconds
    fn delay_ms(&mut self, ms: u32);
}
