//! Inertial sensor and battery traits

/// Errors that can occur with the inertial sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor did not answer or reported an unexpected identity
    NotDetected,
    /// Bus transfer failed
    Bus,
}

/// One raw accelerometer sample, in sensor counts
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisReading {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Trait for the motion sensor's accelerometer
pub trait MotionSensor {
    /// Configure the sensor and verify it is present
    fn init(&mut self) -> Result<(), SensorError>;

    /// Raw X axis reading
    fn read_raw_x(&mut self) -> f32;

    /// Raw Y axis reading
    fn read_raw_y(&mut self) -> f32;

    /// Raw Z axis reading
    fn read_raw_z(&mut self) -> f32;

    /// Read all three axes
    fn read_raw(&mut self) -> AxisReading {
        AxisReading {
            x: self.read_raw_x(),
            y: self.read_raw_y(),
            z: self.read_raw_z(),
        }
    }
}

/// Trait for a hardware pedometer
pub trait StepCounter {
    /// Steps counted since the pedometer was enabled
    fn read_step_count(&mut self) -> Result<u32, SensorError>;
}

/// Trait for the battery voltage monitor
pub trait BatteryMonitor {
    /// Raw ADC reading of the battery sense divider
    fn read_raw(&mut self) -> u16;
}
