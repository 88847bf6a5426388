//! LSM6DS3 accelerometer and pedometer
//!
//! Talks to the sensor over I2C. `init` checks the identity register,
//! starts the accelerometer at 416 Hz / ±16 g and enables the embedded
//! step counter. Axis reads return raw signed counts; a failed bus
//! transfer reads as zero so the animation keeps running.

use embedded_hal::i2c::I2c;
use wristlet_core::traits::{AxisReading, MotionSensor, SensorError, StepCounter};

/// I2C address with SA0 tied low
pub const ADDRESS_LOW: u8 = 0x6A;

/// I2C address with SA0 tied high
pub const ADDRESS_HIGH: u8 = 0x6B;

/// Register map and configuration values
pub mod reg {
    pub const WHO_AM_I: u8 = 0x0F;
    pub const CTRL1_XL: u8 = 0x10;
    pub const CTRL10_C: u8 = 0x19;
    pub const TAP_CFG: u8 = 0x58;
    pub const OUTX_L_XL: u8 = 0x28;
    pub const STEP_COUNTER_L: u8 = 0x4B;
    pub const STEP_COUNTER_H: u8 = 0x4C;

    /// LSM6DS3 identity
    pub const ID_LSM6DS3: u8 = 0x69;
    /// LSM6DS3TR-C identity
    pub const ID_LSM6DS3TR_C: u8 = 0x6A;

    /// 416 Hz, ±16 g, 100 Hz anti-aliasing
    pub const CTRL1_XL_416HZ_16G: u8 = 0x66;
    /// Gyro axes on, embedded functions on, step counter reset
    pub const CTRL10_C_PEDOMETER: u8 = 0x3E;
    /// Pedometer algorithm on
    pub const TAP_CFG_PEDO_EN: u8 = 0x40;
}

/// LSM6DS3 over I2C
pub struct Lsm6ds3<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Lsm6ds3<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), SensorError> {
        self.i2c
            .write(self.address, &[reg, value])
            .map_err(|_| SensorError::Bus)
    }

    fn read_regs(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), SensorError> {
        self.i2c
            .write_read(self.address, &[reg], buf)
            .map_err(|_| SensorError::Bus)
    }

    fn read_axis(&mut self, offset: u8) -> f32 {
        let mut buf = [0u8; 2];
        match self.read_regs(reg::OUTX_L_XL + offset, &mut buf) {
            Ok(()) => i16::from_le_bytes(buf) as f32,
            Err(_) => 0.0,
        }
    }
}

impl<I2C: I2c> MotionSensor for Lsm6ds3<I2C> {
    fn init(&mut self) -> Result<(), SensorError> {
        let mut id = [0u8; 1];
        self.read_regs(reg::WHO_AM_I, &mut id)
            .map_err(|_| SensorError::NotDetected)?;
        if id[0] != reg::ID_LSM6DS3 && id[0] != reg::ID_LSM6DS3TR_C {
            return Err(SensorError::NotDetected);
        }

        self.write_reg(reg::CTRL1_XL, reg::CTRL1_XL_416HZ_16G)?;
        self.write_reg(reg::TAP_CFG, reg::TAP_CFG_PEDO_EN)?;
        self.write_reg(reg::CTRL10_C, reg::CTRL10_C_PEDOMETER)?;
        Ok(())
    }

    fn read_raw_x(&mut self) -> f32 {
        self.read_axis(0)
    }

    fn read_raw_y(&mut self) -> f32 {
        self.read_axis(2)
    }

    fn read_raw_z(&mut self) -> f32 {
        self.read_axis(4)
    }

    fn read_raw(&mut self) -> AxisReading {
        let mut buf = [0u8; 6];
        if self.read_regs(reg::OUTX_L_XL, &mut buf).is_err() {
            return AxisReading::default();
        }
        AxisReading {
            x: i16::from_le_bytes([buf[0], buf[1]]) as f32,
            y: i16::from_le_bytes([buf[2], buf[3]]) as f32,
            z: i16::from_le_bytes([buf[4], buf[5]]) as f32,
        }
    }
}

impl<I2C: I2c> StepCounter for Lsm6ds3<I2C> {
    fn read_step_count(&mut self) -> Result<u32, SensorError> {
        let mut buf = [0u8; 2];
        self.read_regs(reg::STEP_COUNTER_L, &mut buf)?;
        Ok(u16::from_le_bytes(buf) as u32)
    }
}
