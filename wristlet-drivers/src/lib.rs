//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in wristlet-core on top of the `embedded-hal` ecosystem:
//!
//! - Pixel panel over any `embedded-graphics` frame buffer (SSD1306)
//! - LSM6DS3 accelerometer and pedometer over I2C
//! - Battery monitor over an ADC channel
//! - WS2812-style indicator over `smart-leds`
//! - Debounced push button over an input pin

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod button;
pub mod indicator;
pub mod panel;
pub mod sensor;
