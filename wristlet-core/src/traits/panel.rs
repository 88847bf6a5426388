//! Pixel panel driver trait for the 128x64 monochrome OLED

use core::fmt::Write;

use heapless::String;

/// Errors that can occur with the pixel panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError {
    /// Controller did not respond during initialization
    InitFailed,
    /// Bus transfer failed while flushing the frame buffer
    Bus,
}

/// Monochrome pixel color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Pixel lit
    On,
    /// Pixel dark
    Off,
}

/// A packed 1-bit bitmap
///
/// Rows are stored top to bottom, each row padded to a whole byte, most
/// significant bit first. A set bit is drawn in the foreground color.
#[derive(Debug, Clone, Copy)]
pub struct Bitmap<'a> {
    pub width: u32,
    pub height: u32,
    pub data: &'a [u8],
}

impl<'a> Bitmap<'a> {
    /// Bytes per row, including padding
    pub const fn stride(&self) -> usize {
        ((self.width + 7) / 8) as usize
    }

    /// Whether the pixel at (x, y) is set
    ///
    /// Out-of-range coordinates and truncated data read as unset.
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y as usize * self.stride() + (x / 8) as usize;
        match self.data.get(index) {
            Some(byte) => byte & (0x80 >> (x % 8)) != 0,
            None => false,
        }
    }
}

/// Trait for the buffered pixel panel
///
/// All drawing primitives write to an off-screen buffer; nothing becomes
/// visible until [`PanelDriver::flush`] is called.
pub trait PanelDriver {
    /// Initialize the panel controller
    fn init(&mut self) -> Result<(), PanelError>;

    /// Clear the frame buffer
    fn clear(&mut self);

    /// Move the text cursor to a pixel position (top-left of next glyph)
    fn set_cursor(&mut self, x: i32, y: i32);

    /// Set the text scale (1 = small, larger values = larger glyphs)
    fn set_text_size(&mut self, size: u8);

    /// Set foreground and background colors for text
    fn set_text_color(&mut self, fg: Color, bg: Color);

    /// Enable or disable wrapping of text at the right panel edge
    fn set_text_wrap(&mut self, wrap: bool);

    /// Print text at the cursor and advance it
    fn print(&mut self, text: &str);

    /// Print an unsigned number at the cursor and advance it
    fn print_number(&mut self, value: u32) {
        let mut buf: String<10> = String::new();
        let _ = write!(buf, "{}", value);
        self.print(&buf);
    }

    /// Draw a one-pixel line between two points
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color);

    /// Draw a rectangle outline
    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color);

    /// Draw a packed bitmap with its top-left corner at (x, y)
    fn draw_bitmap(&mut self, x: i32, y: i32, bitmap: &Bitmap<'_>, fg: Color, bg: Color);

    /// Push the frame buffer to the panel
    fn flush(&mut self) -> Result<(), PanelError>;

    /// Panel dimensions in pixels (width, height)
    fn size(&self) -> (u32, u32);
}

/// Helper trait for common text layouts
pub trait PanelExt: PanelDriver {
    /// Print small text at a position
    fn print_at(&mut self, x: i32, y: i32, text: &str) {
        self.set_cursor(x, y);
        self.print(text);
    }

    /// Reset text attributes to small, white on black
    fn reset_text(&mut self) {
        self.set_text_color(Color::On, Color::Off);
        self.set_text_size(1);
    }
}

// Blanket implementation for all PanelDriver types
impl<T: PanelDriver> PanelExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmap_bit_order() {
        // 10 pixels wide -> 2 bytes per row
        let data = [0b1000_0000, 0b0100_0000, 0b0000_0001, 0x00];
        let bitmap = Bitmap {
            width: 10,
            height: 2,
            data: &data,
        };

        assert_eq!(bitmap.stride(), 2);
        assert!(bitmap.is_set(0, 0));
        assert!(!bitmap.is_set(1, 0));
        assert!(bitmap.is_set(9, 0));
        assert!(bitmap.is_set(7, 1));
        assert!(!bitmap.is_set(10, 0));
        assert!(!bitmap.is_set(0, 2));
    }

    #[test]
    fn test_bitmap_truncated_data_reads_unset() {
        let data = [0xFF];
        let bitmap = Bitmap {
            width: 8,
            height: 4,
            data: &data,
        };
        assert!(bitmap.is_set(3, 0));
        assert!(!bitmap.is_set(3, 3));
    }
}
