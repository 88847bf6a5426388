//! Temporal smoothing of rotation angles

use crate::traits::AxisReading;

use super::projection::RotationAngles;

/// Blends each new accelerometer sample with the previous angles
///
/// Every tick each angle becomes the mean of its raw value
/// (`reading * modifier`) and its previous value, which damps sensor
/// jitter without lagging far behind real motion.
///
/// The axes are permuted on the way in: sensor Y drives rotation about X,
/// sensor Z about Y, and sensor X about Z.
#[derive(Debug, Clone, Copy)]
pub struct MotionSmoother {
    /// Angles produced by the last update
    angles: RotationAngles,
    /// Radians per raw sensor count
    modifier: f32,
}

impl MotionSmoother {
    pub fn new(modifier: f32) -> Self {
        Self {
            angles: RotationAngles::default(),
            modifier,
        }
    }

    /// Feed one sample and return the smoothed angles
    pub fn update(&mut self, reading: AxisReading) -> RotationAngles {
        let raw = RotationAngles {
            x: reading.y * self.modifier,
            y: reading.z * self.modifier,
            z: reading.x * self.modifier,
        };

        self.angles = RotationAngles {
            x: (raw.x + self.angles.x) / 2.0,
            y: (raw.y + self.angles.y) / 2.0,
            z: (raw.z + self.angles.z) / 2.0,
        };
        self.angles
    }

    /// Angles produced by the last update
    pub fn angles(&self) -> RotationAngles {
        self.angles
    }

    /// Forget all history
    pub fn reset(&mut self) {
        self.angles = RotationAngles::default();
    }
}
