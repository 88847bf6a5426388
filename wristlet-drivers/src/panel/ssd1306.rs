//! SSD1306 OLED frame buffer
//!
//! The SSD1306 in buffered graphics mode keeps a full frame in RAM and
//! pushes it over I2C or SPI on flush.

use ::ssd1306::mode::{BufferedGraphicsMode, DisplayConfig};
use ::ssd1306::prelude::{DisplaySize, WriteOnlyDataCommand};
use ::ssd1306::Ssd1306;
use wristlet_core::traits::PanelError;

use super::FrameBuffer;

impl<DI, SIZE> FrameBuffer for Ssd1306<DI, SIZE, BufferedGraphicsMode<SIZE>>
where
    DI: WriteOnlyDataCommand,
    SIZE: DisplaySize,
{
    fn init_panel(&mut self) -> Result<(), PanelError> {
        DisplayConfig::init(self).map_err(|_| PanelError::InitFailed)
    }

    fn clear_frame(&mut self) {
        self.clear_buffer();
    }

    fn flush_frame(&mut self) -> Result<(), PanelError> {
        self.flush().map_err(|_| PanelError::Bus)
    }
}
