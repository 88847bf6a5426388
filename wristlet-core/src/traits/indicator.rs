//! Single-pixel indicator light trait

/// An indicator colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const OFF: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Trait for the indicator light
///
/// Colour and brightness are latched; nothing changes on the LED until
/// [`IndicatorLight::show`] is called.
pub trait IndicatorLight {
    /// Set the pending colour
    fn set_color(&mut self, color: Rgb);

    /// Set the global brightness (0 = off, 255 = full)
    fn set_brightness(&mut self, brightness: u8);

    /// Push the pending colour to the LED
    fn show(&mut self);
}
