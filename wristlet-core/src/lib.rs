//! Board-agnostic core logic for the Wristlet watch
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (panel, radio, RTC, light, sensors, button)
//! - Watch mode state machine and the controller that drives it
//! - 3D projection and motion smoothing for the gyro animation
//! - Screen renderer emitting panel primitives
//! - Input/timeout coordination
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod config;
pub mod controller;
pub mod input;
pub mod light;
pub mod motion;
pub mod network;
pub mod render;
pub mod state;
pub mod traits;

pub use controller::{Board, Devices, Watch};
pub use state::{ErrorKind, Event, Mode};
