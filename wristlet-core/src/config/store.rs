//! Flash persistence for the watch configuration

use super::types::{ConfigError, WatchConfig, CONFIG_VERSION};

/// Largest encoded configuration
pub const MAX_CONFIG_SIZE: usize = 512;

/// Encode a configuration into `buf`, returning the used prefix
pub fn encode<'a>(config: &WatchConfig, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
    postcard::to_slice(config, buf).map_err(|_| ConfigError::Serialize)
}

/// Decode and validate a stored configuration
pub fn decode(bytes: &[u8]) -> Result<WatchConfig, ConfigError> {
    let config: WatchConfig = postcard::from_bytes(bytes).map_err(|_| ConfigError::Serialize)?;

    if config.version != CONFIG_VERSION {
        warn!(
            "Config version mismatch: found {}, expected {}",
            config.version,
            CONFIG_VERSION
        );
        return Err(ConfigError::VersionMismatch);
    }

    config.validate()?;
    debug!("Loaded config for network {}", config.network.ssid.as_str());
    Ok(config)
}
