//! Events that trigger mode transitions

use super::machine::ErrorKind;

/// Events that can trigger mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Lifecycle events
    /// Panel and motion sensor came up
    BootComplete,
    /// Radio joined and the wall clock holds network time
    TimeSynced,
    /// The re-sync interval elapsed
    ResyncDue,

    // User events
    /// Short press of the button, reported on release
    ButtonPressed,
    /// Button held past the long-press threshold
    ButtonHeld,

    // Timer events
    /// Menu idle window elapsed
    MenuTimeout,
    /// One second of the self-destruct countdown passed
    CountdownTick,
    /// The self-destruct placeholder has been shown long enough
    DisplayElapsed,

    // Failure events
    /// Boot or sync failed
    Failure(ErrorKind),
}
