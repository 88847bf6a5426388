//! Indicator light patterns

use crate::input::InputCoordinator;
use crate::state::MenuPage;
use crate::traits::{ButtonInput, IndicatorLight, Rgb, SystemClock};

/// Brightness set at boot
pub const BOOT_BRIGHTNESS: u8 = 254;

/// Length of the countdown blink
pub const BLINK_DURATION_MS: u64 = 200;

/// Time between blink fade steps
pub const BLINK_STEP_MS: u32 = 5;

pub const CYAN: Rgb = Rgb::new(0, 255, 255);
pub const ORANGE: Rgb = Rgb::new(255, 165, 0);
pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const RED: Rgb = Rgb::new(255, 0, 0);

/// Colour shown while a menu page is highlighted
pub fn menu_color(index: u8) -> Rgb {
    match MenuPage::from_index(index) {
        MenuPage::WifiScanner => CYAN,
        MenuPage::GyroAnimation => ORANGE,
        MenuPage::SelfDestruct => MAGENTA,
        MenuPage::Exit => WHITE,
    }
}

/// Latch a colour and show it
pub fn show<L: IndicatorLight>(light: &mut L, color: Rgb) {
    light.set_color(color);
    light.show();
}

/// Fade red from full to off, then switch off
///
/// Blocks for [`BLINK_DURATION_MS`]; the button is not sampled.
pub fn blink_red<L, B, C>(light: &mut L, input: &mut InputCoordinator<B, C>)
where
    L: IndicatorLight,
    B: ButtonInput,
    C: SystemClock,
{
    let start = input.now_ms();
    loop {
        let elapsed = input.now_ms().saturating_sub(start);
        if elapsed > BLINK_DURATION_MS {
            break;
        }
        let red = 255 * (BLINK_DURATION_MS - elapsed) / BLINK_DURATION_MS;
        show(light, Rgb::new(red as u8, 0, 0));
        input.delay_ms(BLINK_STEP_MS);
    }
    show(light, Rgb::OFF);
}
