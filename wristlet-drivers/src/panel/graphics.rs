//! Text-and-primitives panel over an `embedded-graphics` frame buffer
//!
//! Keeps the cursor, text size, colours and wrap flag that the watch's
//! draw routines expect, and turns each call into `embedded-graphics`
//! drawables. Nothing reaches the glass until [`PanelDriver::flush`].
//!
//! # Text
//!
//! Text size 1 uses the 6x10 mono font, any larger size the 10x20 font.
//! The cursor marks the top-left corner of the next glyph; `\n` moves it
//! to the start of the next line. With wrapping enabled a glyph that would
//! cross the right edge starts a new line instead.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use wristlet_core::traits::{Bitmap, Color, PanelDriver, PanelError};

/// A display with an off-screen frame
pub trait FrameBuffer {
    /// Initialize the display controller
    fn init_panel(&mut self) -> Result<(), PanelError>;

    /// Clear the off-screen frame
    fn clear_frame(&mut self);

    /// Send the off-screen frame to the display
    fn flush_frame(&mut self) -> Result<(), PanelError>;
}

/// Pixel panel over a monochrome frame buffer
pub struct GraphicsPanel<D> {
    target: D,
    cursor: Point,
    text_size: u8,
    fg: BinaryColor,
    bg: BinaryColor,
    wrap: bool,
}

impl<D> GraphicsPanel<D>
where
    D: DrawTarget<Color = BinaryColor> + FrameBuffer,
{
    pub fn new(target: D) -> Self {
        Self {
            target,
            cursor: Point::zero(),
            text_size: 1,
            fg: BinaryColor::On,
            bg: BinaryColor::Off,
            wrap: true,
        }
    }

    /// Current text cursor
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Borrow the underlying frame buffer
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Release the underlying frame buffer
    pub fn release(self) -> D {
        self.target
    }

    fn font(&self) -> &'static MonoFont<'static> {
        if self.text_size <= 1 {
            &FONT_6X10
        } else {
            &FONT_10X20
        }
    }

    fn draw_char(&mut self, c: char) {
        let font = self.font();
        let advance = (font.character_size.width + font.character_spacing) as i32;
        let line_height = font.character_size.height as i32;

        match c {
            '\n' => {
                self.cursor = Point::new(0, self.cursor.y + line_height);
                return;
            }
            '\r' => return,
            _ => {}
        }

        let width = self.target.bounding_box().size.width as i32;
        if self.wrap && self.cursor.x + advance > width {
            self.cursor = Point::new(0, self.cursor.y + line_height);
        }

        let style = MonoTextStyleBuilder::new()
            .font(font)
            .text_color(self.fg)
            .background_color(self.bg)
            .build();
        let mut buf = [0u8; 4];
        // Drawing into RAM does not fail
        let _ = Text::with_baseline(c.encode_utf8(&mut buf), self.cursor, style, Baseline::Top)
            .draw(&mut self.target);

        self.cursor.x += advance;
    }
}

fn binary(color: Color) -> BinaryColor {
    match color {
        Color::On => BinaryColor::On,
        Color::Off => BinaryColor::Off,
    }
}

impl<D> PanelDriver for GraphicsPanel<D>
where
    D: DrawTarget<Color = BinaryColor> + FrameBuffer,
{
    fn init(&mut self) -> Result<(), PanelError> {
        self.target.init_panel()
    }

    fn clear(&mut self) {
        self.target.clear_frame();
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Point::new(x, y);
    }

    fn set_text_size(&mut self, size: u8) {
        self.text_size = size;
    }

    fn set_text_color(&mut self, fg: Color, bg: Color) {
        self.fg = binary(fg);
        self.bg = binary(bg);
    }

    fn set_text_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    fn print(&mut self, text: &str) {
        for c in text.chars() {
            self.draw_char(c);
        }
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let _ = Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(PrimitiveStyle::with_stroke(binary(color), 1))
            .draw(&mut self.target);
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        let _ = Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_stroke(binary(color), 1))
            .draw(&mut self.target);
    }

    fn draw_bitmap(&mut self, x: i32, y: i32, bitmap: &Bitmap<'_>, fg: Color, bg: Color) {
        let (fg, bg) = (binary(fg), binary(bg));
        let pixels = (0..bitmap.height).flat_map(|row| {
            (0..bitmap.width).map(move |col| {
                let color = if bitmap.is_set(col, row) { fg } else { bg };
                Pixel(Point::new(x + col as i32, y + row as i32), color)
            })
        });
        let _ = self.target.draw_iter(pixels);
    }

    fn flush(&mut self) -> Result<(), PanelError> {
        self.target.flush_frame()
    }

    fn size(&self) -> (u32, u32) {
        let size = self.target.bounding_box().size;
        (size.width, size.height)
    }
}
