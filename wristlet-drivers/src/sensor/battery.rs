//! Battery voltage monitor
//!
//! Samples the battery sense divider through an ADC channel and averages a
//! few readings to steady the low-battery badge.

use wristlet_core::traits::BatteryMonitor;

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read ADC value (12-bit, 0-4095)
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// Battery monitor over one ADC channel
pub struct AdcBattery<ADC> {
    adc: ADC,
    /// Readings averaged per sample (at least 1)
    samples: u8,
    /// Last good average, returned when every read fails
    last: u16,
}

impl<ADC> AdcBattery<ADC> {
    pub fn new(adc: ADC, samples: u8) -> Self {
        Self {
            adc,
            samples: samples.max(1),
            last: 0,
        }
    }
}

impl<ADC: AdcReader> BatteryMonitor for AdcBattery<ADC> {
    fn read_raw(&mut self) -> u16 {
        let mut sum: u32 = 0;
        let mut count: u32 = 0;
        for _ in 0..self.samples {
            if let Ok(value) = self.adc.read() {
                sum += value as u32;
                count += 1;
            }
        }

        if count > 0 {
            self.last = (sum / count) as u16;
        }
        self.last
    }
}
