//! Bitmaps drawn by the renderer

use crate::traits::Bitmap;

const WATCH_ICON_DATA: [u8; 128] = [
    0x00, 0x38, 0x1c, 0x00, 0x00, 0x3f, 0xfc, 0x00, 0x00, 0x3f, 0xfc, 0x00,
    0x00, 0x3f, 0xfc, 0x00, 0x00, 0x3f, 0xfc, 0x00, 0x00, 0x3f, 0xfc, 0x00,
    0x00, 0x7f, 0xfe, 0x00, 0x00, 0xf0, 0x0f, 0x00, 0x01, 0xc1, 0x83, 0x80,
    0x03, 0x81, 0x81, 0xc0, 0x07, 0x01, 0x80, 0xe0, 0x07, 0x01, 0x80, 0xe0,
    0x06, 0x01, 0x80, 0x60, 0x0e, 0x01, 0x80, 0x70, 0x0e, 0x01, 0x80, 0x7e,
    0x0e, 0x01, 0xfc, 0x7e, 0x0e, 0x00, 0xfc, 0x7e, 0x0e, 0x00, 0x00, 0x7e,
    0x0e, 0x00, 0x00, 0x70, 0x06, 0x00, 0x00, 0x60, 0x07, 0x00, 0x00, 0xe0,
    0x07, 0x00, 0x00, 0xe0, 0x03, 0x80, 0x01, 0xc0, 0x01, 0xc0, 0x03, 0x80,
    0x00, 0xf0, 0x0f, 0x00, 0x00, 0x7f, 0xfe, 0x00, 0x00, 0x3f, 0xfc, 0x00,
    0x00, 0x3f, 0xfc, 0x00, 0x00, 0x3f, 0xfc, 0x00, 0x00, 0x3f, 0xfc, 0x00,
    0x00, 0x3f, 0xfc, 0x00, 0x00, 0x38, 0x1c, 0x00,
];

const LOW_BATTERY_DATA: [u8; 36] = [
    0xff, 0xff, 0xfe, 0x80, 0x00, 0x02, 0x80, 0x00, 0x02, 0x8f, 0xff, 0xc2,
    0x88, 0x00, 0x42, 0x8b, 0x00, 0x62, 0x8b, 0x00, 0x62, 0x88, 0x00, 0x42,
    0x8f, 0xff, 0xc2, 0x80, 0x00, 0x02, 0x80, 0x00, 0x02, 0xff, 0xff, 0xfe,
];

/// Watch icon shown on the loading screen (32x32)
pub const WATCH_ICON: Bitmap<'static> = Bitmap {
    width: 32,
    height: 32,
    data: &WATCH_ICON_DATA,
};

/// Framed low-battery badge (23x12)
pub const LOW_BATTERY: Bitmap<'static> = Bitmap {
    width: 23,
    height: 12,
    data: &LOW_BATTERY_DATA,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_matches_dimensions() {
        for bitmap in [WATCH_ICON, LOW_BATTERY] {
            assert_eq!(bitmap.data.len(), bitmap.stride() * bitmap.height as usize);
        }
    }

    #[test]
    fn test_badge_is_framed() {
        for x in 0..LOW_BATTERY.width {
            assert!(LOW_BATTERY.is_set(x, 0));
            assert!(LOW_BATTERY.is_set(x, LOW_BATTERY.height - 1));
        }
        for y in 0..LOW_BATTERY.height {
            assert!(LOW_BATTERY.is_set(0, y));
            assert!(LOW_BATTERY.is_set(LOW_BATTERY.width - 1, y));
        }
    }
}
