//! Single addressable LED indicator
//!
//! Drives one WS2812-style pixel through any `smart-leds` writer. Brightness
//! is applied in software when the colour is shown.

use core::iter::once;

use smart_leds::{brightness, SmartLedsWrite, RGB8};
use wristlet_core::traits::{IndicatorLight, Rgb};

/// One-pixel indicator over a `smart-leds` writer
pub struct SmartLedIndicator<W> {
    writer: W,
    color: Rgb,
    brightness: u8,
}

impl<W> SmartLedIndicator<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            color: Rgb::OFF,
            brightness: 255,
        }
    }

    /// Release the writer
    pub fn release(self) -> W {
        self.writer
    }
}

impl<W> IndicatorLight for SmartLedIndicator<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn show(&mut self) {
        let pixel = RGB8::new(self.color.r, self.color.g, self.color.b);
        // A dropped frame is corrected by the next show
        let _ = self.writer.write(brightness(once(pixel), self.brightness));
    }
}
