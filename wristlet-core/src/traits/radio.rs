//! Wireless radio trait

use heapless::{String, Vec};

/// Maximum SSID length in bytes (IEEE 802.11)
pub const MAX_SSID_LEN: usize = 32;

/// Maximum number of scan results a radio reports
pub const MAX_NETWORKS: usize = 16;

/// A network name as reported by a scan
pub type NetworkName = String<MAX_SSID_LEN>;

/// Errors that can occur with the radio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RadioError {
    /// Radio hardware not responding
    NotResponding,
    /// Scan could not be started or did not complete
    ScanFailed,
}

/// Trait for the station-mode wireless radio
pub trait Radio {
    /// Start joining the given network
    ///
    /// Returns once the join has been started; use
    /// [`Radio::is_connected`] to observe completion.
    fn begin(&mut self, ssid: &str, password: &str) -> Result<(), RadioError>;

    /// Whether the radio currently holds an association
    fn is_connected(&mut self) -> bool;

    /// Scan for nearby networks (blocking)
    fn scan_networks(&mut self) -> Result<Vec<NetworkName, MAX_NETWORKS>, RadioError>;
}
