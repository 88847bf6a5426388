//! Network join and time synchronization
//!
//! Both waits poll with an uninterruptible delay; only their timeouts
//! end them early.

use crate::input::InputCoordinator;
use crate::state::ErrorKind;
use crate::traits::{ButtonInput, Radio, RealTimeClock, SystemClock};

/// Delay between association checks
pub const CONNECT_POLL_MS: u32 = 1_000;

/// Delay between wall-clock checks
pub const TIME_POLL_MS: u32 = 200;

/// Wall-clock checks per second of sync timeout
const TIME_POLLS_PER_SECOND: u32 = 1_000 / TIME_POLL_MS;

/// Earliest timestamp accepted as real network time (one day past the epoch)
pub const PLAUSIBLE_EPOCH_S: u64 = 24 * 3600;

/// Join a network, checking once per second
///
/// The radio is checked `timeout_s` times at most before giving up.
pub fn connect<R, B, C>(
    radio: &mut R,
    input: &mut InputCoordinator<B, C>,
    ssid: &str,
    password: &str,
    timeout_s: u32,
) -> Result<(), ErrorKind>
where
    R: Radio,
    B: ButtonInput,
    C: SystemClock,
{
    info!("Connecting to {}", ssid);
    if radio.begin(ssid, password).is_err() {
        warn!("Radio did not accept join request");
    }

    let mut waited = 0;
    while !radio.is_connected() {
        input.delay_ms(CONNECT_POLL_MS);
        waited += 1;
        if waited >= timeout_s {
            warn!("No association after {} s", waited);
            return Err(ErrorKind::ConnectTimeout);
        }
    }

    info!("Connected");
    Ok(())
}

/// Request network time and wait until the clock reports it
pub fn sync_clock<T, B, C>(
    rtc: &mut T,
    input: &mut InputCoordinator<B, C>,
    server: &str,
    timezone: &str,
    timeout_s: u32,
) -> Result<(), ErrorKind>
where
    T: RealTimeClock,
    B: ButtonInput,
    C: SystemClock,
{
    rtc.request_network_time(server, timezone);

    let mut polls = 0;
    while rtc.now() < PLAUSIBLE_EPOCH_S {
        input.delay_ms(TIME_POLL_MS);
        polls += 1;
        if polls / TIME_POLLS_PER_SECOND >= timeout_s {
            warn!("No network time after {} polls", polls);
            return Err(ErrorKind::TimeSyncTimeout);
        }
    }

    info!("Clock synchronized: {}", rtc.now());
    Ok(())
}
