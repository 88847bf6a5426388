//! Sensor drivers

pub mod battery;
pub mod lsm6ds3;

pub use battery::{AdcBattery, AdcReader};
pub use lsm6ds3::Lsm6ds3;
