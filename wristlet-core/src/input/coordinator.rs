//! Button polling and cooperative waiting

use crate::traits::{ButtonEvent, ButtonInput, SystemClock};

use super::timeout::TimeoutWindow;

/// How an event-wait ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaitOutcome {
    /// The button produced an event before the window elapsed
    Pressed(ButtonEvent),
    /// The window elapsed with no button event
    TimedOut,
}

/// Owns the button and the clock
///
/// Every wait is a poll loop: check the button, check the window, sleep
/// one poll interval. The button edge cancels user-facing waits.
pub struct InputCoordinator<B, C> {
    button: B,
    clock: C,
    poll_interval_ms: u32,
}

impl<B: ButtonInput, C: SystemClock> InputCoordinator<B, C> {
    pub fn new(button: B, clock: C, poll_interval_ms: u32) -> Self {
        Self {
            button,
            clock,
            poll_interval_ms: poll_interval_ms.max(1),
        }
    }

    /// Sample the button once
    ///
    /// Each physical press is reported at most once.
    pub fn poll_button(&mut self) -> Option<ButtonEvent> {
        let now = self.clock.now_ms();
        self.button.poll(now)
    }

    /// Current monotonic time
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Open a window starting now
    pub fn start_window(&self, duration_ms: u64) -> TimeoutWindow {
        TimeoutWindow::new(self.clock.now_ms(), duration_ms)
    }

    /// Whether a window has elapsed
    pub fn elapsed(&self, window: &TimeoutWindow) -> bool {
        window.elapsed_at(self.clock.now_ms())
    }

    /// Wait until the button fires or the window elapses
    pub fn wait(&mut self, window: &TimeoutWindow) -> WaitOutcome {
        loop {
            if let Some(event) = self.poll_button() {
                return WaitOutcome::Pressed(event);
            }
            let now = self.clock.now_ms();
            if window.elapsed_at(now) {
                return WaitOutcome::TimedOut;
            }
            let step = window.remaining_at(now).min(self.poll_interval_ms as u64);
            self.clock.delay_ms(step as u32);
        }
    }

    /// Wait, without limit, for the next button event
    pub fn wait_for_press(&mut self) -> ButtonEvent {
        loop {
            if let Some(event) = self.poll_button() {
                return event;
            }
            self.clock.delay_ms(self.poll_interval_ms);
        }
    }

    /// Sleep that a button event can cut short
    pub fn sleep(&mut self, ms: u32) -> Option<ButtonEvent> {
        let window = self.start_window(ms as u64);
        match self.wait(&window) {
            WaitOutcome::Pressed(event) => Some(event),
            WaitOutcome::TimedOut => None,
        }
    }

    /// Sleep that nothing cuts short
    pub fn delay_ms(&mut self, ms: u32) {
        self.clock.delay_ms(ms);
    }

    /// Give back the button and clock
    pub fn release(self) -> (B, C) {
        (self.button, self.clock)
    }
}
