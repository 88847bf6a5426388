//! Mode definition
//!
//! Everything the watch shows is a function of the current mode; every
//! change of mode is a function of the current mode and an event.

use super::events::Event;
use super::menu::MenuPage;

/// Seconds counted down by the self-destruct page
pub const SELF_DESTRUCT_SECONDS: u8 = 5;

/// Watch modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Power-on: panel and motion sensor initialization
    Booting,
    /// Joining the network and waiting for NTP time
    SyncingTime,
    /// Time, date and step count
    Clock,
    /// Menu with the given page highlighted
    MenuBrowsing(u8),
    /// Nearby networks listed
    WifiScanning,
    /// Cube rotated by the accelerometer
    GyroAnimating,
    /// Counting down, seconds remaining
    SelfDestructCounting(u8),
    /// Countdown finished, placeholder shown
    SelfDestructDone,
    /// Fatal failure; only a reset leaves this mode
    Error(ErrorKind),
}

/// Fatal failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// Panel controller did not initialize
    PanelInit,
    /// Motion sensor did not initialize
    SensorInit,
    /// Radio did not join within the connect timeout
    ConnectTimeout,
    /// Wall clock did not receive time within the sync timeout
    TimeSyncTimeout,
}

impl ErrorKind {
    /// Text shown on the error screen
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::PanelInit => "Can't init display!",
            ErrorKind::SensorInit => "Can't init gyro!",
            ErrorKind::ConnectTimeout => "Can't connect!",
            ErrorKind::TimeSyncTimeout => "Can't get time!",
        }
    }
}

impl Mode {
    /// Process an event and return the next mode
    ///
    /// This is the core transition logic. Events that do not apply to the
    /// current mode leave it unchanged.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Mode::*;

        match (self, event) {
            // Error is terminal
            (Error(_), _) => self,

            // Boot transitions
            (Booting, BootComplete) => SyncingTime,
            (Booting, Failure(kind)) => Error(kind),

            // Sync transitions
            (SyncingTime, TimeSynced) => Clock,
            (SyncingTime, Failure(kind)) => Error(kind),

            // Clock transitions
            (Clock, ButtonPressed) => MenuBrowsing(0),
            (Clock, ResyncDue) => SyncingTime,

            // Menu transitions
            (MenuBrowsing(page), ButtonPressed) => {
                MenuBrowsing(MenuPage::from_index(page).next().index())
            }
            (MenuBrowsing(_), MenuTimeout) => Clock,
            (MenuBrowsing(page), ButtonHeld) => MenuPage::from_index(page).destination(),

            // Menu page transitions
            (WifiScanning, ButtonPressed) => MenuBrowsing(0),
            (GyroAnimating, ButtonPressed) => MenuBrowsing(0),

            // Self-destruct transitions
            (SelfDestructCounting(0), CountdownTick) => SelfDestructDone,
            (SelfDestructCounting(n), CountdownTick) => SelfDestructCounting(n - 1),
            (SelfDestructDone, ButtonPressed) => Clock,
            (SelfDestructDone, DisplayElapsed) => Clock,

            // Default: stay in current mode
            _ => self,
        }
    }
}
