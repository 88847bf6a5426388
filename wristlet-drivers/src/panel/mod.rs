//! Pixel panel drivers

pub mod graphics;
#[cfg(feature = "ssd1306")]
pub mod ssd1306;

pub use graphics::{FrameBuffer, GraphicsPanel};
