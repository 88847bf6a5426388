//! Configuration type definitions
//!
//! These types represent the watch configuration. With the `serde` feature
//! it can be persisted in flash as postcard-serialized binary data (see
//! [`super::store`]).

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::MAX_SSID_LEN;

/// Current configuration layout version
pub const CONFIG_VERSION: u8 = 1;

/// Maximum WPA passphrase length
pub const MAX_PASSWORD_LEN: usize = 64;

/// Maximum NTP server host name length
pub const MAX_HOST_LEN: usize = 64;

/// Maximum POSIX timezone string length
pub const MAX_TZ_LEN: usize = 48;

/// Longest frame delay accepted for the gyro animation
pub const MAX_FRAME_DELAY_MS: u32 = 1_000;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// No network name configured
    EmptySsid,
    /// NTP server or timezone missing
    EmptyTimeSource,
    /// A timeout or interval is zero
    ZeroTimeout,
    /// Frame delay zero or too long
    FrameDelayOutOfRange,
    /// Angle modifier not a positive finite number
    InvalidAngleModifier,
    /// A string did not fit its capacity
    TooLong,
    /// Stored blob could not be encoded or decoded
    Serialize,
    /// Stored blob has another layout version
    VersionMismatch,
}

/// Network and time settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NetworkConfig {
    pub ssid: String<MAX_SSID_LEN>,
    pub password: String<MAX_PASSWORD_LEN>,
    /// NTP server host name
    pub ntp_server: String<MAX_HOST_LEN>,
    /// POSIX TZ string
    pub timezone: String<MAX_TZ_LEN>,
    /// Seconds to wait for the radio to join
    pub connect_timeout_s: u32,
    /// Seconds to wait for NTP time
    pub time_sync_timeout_s: u32,
    /// Seconds between re-syncs while the clock is shown
    pub resync_interval_s: u32,
    /// Seconds added to the wall clock before display
    pub rtc_offset_s: u32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            ssid: String::new(),
            password: String::new(),
            ntp_server: string_or_empty("pool.ntp.org"),
            timezone: string_or_empty("UTC0"),
            connect_timeout_s: 10,
            time_sync_timeout_s: 10,
            resync_interval_s: 7_200,
            rtc_offset_s: 10,
        }
    }
}

impl NetworkConfig {
    /// Set the network credentials
    pub fn with_credentials(mut self, ssid: &str, password: &str) -> Result<Self, ConfigError> {
        self.ssid = String::try_from(ssid).map_err(|_| ConfigError::TooLong)?;
        self.password = String::try_from(password).map_err(|_| ConfigError::TooLong)?;
        Ok(self)
    }
}

/// UI timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UiConfig {
    /// Menu returns to the clock after this long without a press
    pub menu_timeout_ms: u32,
    /// Delay between gyro animation frames
    pub frame_delay_ms: u32,
    /// Delay between printed scan results
    pub scan_line_delay_ms: u32,
    /// Button poll period while waiting
    pub poll_interval_ms: u32,
    /// How long the self-destruct placeholder stays up
    pub done_display_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            menu_timeout_ms: 1_500,
            frame_delay_ms: 30,
            scan_line_delay_ms: 75,
            poll_interval_ms: 10,
            done_display_ms: 3_000,
        }
    }
}

/// Motion rendering settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MotionConfig {
    /// Radians per raw accelerometer count
    pub angle_modifier: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            angle_modifier: 0.00008,
        }
    }
}

/// Power settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PowerConfig {
    /// Battery ADC reading at or below which the low-battery badge shows
    pub low_battery_threshold: u16,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            low_battery_threshold: 2_000,
        }
    }
}

/// Complete watch configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WatchConfig {
    /// Layout version
    pub version: u8,
    pub network: NetworkConfig,
    pub ui: UiConfig,
    pub motion: MotionConfig,
    pub power: PowerConfig,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            network: NetworkConfig::default(),
            ui: UiConfig::default(),
            motion: MotionConfig::default(),
            power: PowerConfig::default(),
        }
    }
}

impl WatchConfig {
    /// Check that the configuration can drive the watch
    pub fn validate(&self) -> Result<(), ConfigError> {
        let net = &self.network;
        if net.ssid.is_empty() {
            return Err(ConfigError::EmptySsid);
        }
        if net.ntp_server.is_empty() || net.timezone.is_empty() {
            return Err(ConfigError::EmptyTimeSource);
        }
        if net.connect_timeout_s == 0 || net.time_sync_timeout_s == 0 || net.resync_interval_s == 0
        {
            return Err(ConfigError::ZeroTimeout);
        }

        let ui = &self.ui;
        if ui.menu_timeout_ms == 0 || ui.poll_interval_ms == 0 || ui.done_display_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if ui.frame_delay_ms == 0 || ui.frame_delay_ms > MAX_FRAME_DELAY_MS {
            return Err(ConfigError::FrameDelayOutOfRange);
        }

        let modifier = self.motion.angle_modifier;
        if !modifier.is_finite() || modifier <= 0.0 {
            return Err(ConfigError::InvalidAngleModifier);
        }

        Ok(())
    }
}

fn string_or_empty<const N: usize>(s: &str) -> String<N> {
    String::try_from(s).unwrap_or_default()
}
