//! Wall-clock trait

/// Broken-down local time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LocalTime {
    pub year: u16,
    /// 1-12
    pub month: u8,
    /// 1-31
    pub day: u8,
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
}

/// Trait for the wall-clock subsystem
///
/// Network time is requested asynchronously; the clock reports the epoch
/// (or something close to it) until the first reply arrives.
pub trait RealTimeClock {
    /// Ask the clock to synchronize against an NTP server
    ///
    /// `timezone` is a POSIX TZ string (e.g. `CET-1CEST,M3.5.0,M10.5.0/3`).
    fn request_network_time(&mut self, server: &str, timezone: &str);

    /// Current time in seconds since the Unix epoch
    fn now(&self) -> u64;

    /// Convert a Unix timestamp to local time using the configured timezone
    fn local_time(&self, timestamp: u64) -> LocalTime;
}
