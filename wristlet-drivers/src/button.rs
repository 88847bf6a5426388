//! Debounced push button
//!
//! Active-low input: pressed pulls the pin to ground. The raw level must
//! hold for the debounce time before it is accepted. Each press reports one
//! event: [`ButtonEvent::LongPress`] as soon as it has been held past the
//! long-press threshold, otherwise [`ButtonEvent::Press`] when released.

use embedded_hal::digital::InputPin;
use wristlet_core::traits::{ButtonEvent, ButtonInput};

/// Default debounce time
pub const DEBOUNCE_MS: u64 = 20;

/// Default hold time for a long press
pub const LONG_PRESS_MS: u64 = 500;

/// Push button on an active-low input pin
pub struct DebouncedButton<P> {
    pin: P,
    debounce_ms: u64,
    long_press_ms: u64,
    /// Last raw level sampled (true = pressed)
    raw: bool,
    /// When the raw level last changed
    raw_since: u64,
    /// Debounced state
    pressed: bool,
    pressed_at: u64,
    long_reported: bool,
}

impl<P: InputPin> DebouncedButton<P> {
    pub fn new(pin: P) -> Self {
        Self::with_timing(pin, DEBOUNCE_MS, LONG_PRESS_MS)
    }

    pub fn with_timing(pin: P, debounce_ms: u64, long_press_ms: u64) -> Self {
        Self {
            pin,
            debounce_ms,
            long_press_ms,
            raw: false,
            raw_since: 0,
            pressed: false,
            pressed_at: 0,
            long_reported: false,
        }
    }

    /// Debounced state
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Release the pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: InputPin> ButtonInput for DebouncedButton<P> {
    fn poll(&mut self, now_ms: u64) -> Option<ButtonEvent> {
        // An unreadable pin counts as released
        let raw = self.pin.is_low().unwrap_or(false);
        if raw != self.raw {
            self.raw = raw;
            self.raw_since = now_ms;
        }

        if raw != self.pressed && now_ms.saturating_sub(self.raw_since) >= self.debounce_ms {
            self.pressed = raw;
            if raw {
                self.pressed_at = now_ms;
                self.long_reported = false;
                return None;
            }
            // A long press already reported this one
            return (!self.long_reported).then_some(ButtonEvent::Press);
        }

        if self.pressed
            && !self.long_reported
            && now_ms.saturating_sub(self.pressed_at) >= self.long_press_ms
        {
            self.long_reported = true;
            return Some(ButtonEvent::LongPress);
        }

        None
    }
}
