//! Menu pages

use super::machine::{Mode, SELF_DESTRUCT_SECONDS};

/// Number of menu pages
pub const PAGE_COUNT: u8 = 4;

/// Menu pages, in browsing order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuPage {
    WifiScanner = 0,
    GyroAnimation = 1,
    SelfDestruct = 2,
    Exit = 3,
}

impl MenuPage {
    /// Page for an index; anything out of range is the exit page
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => MenuPage::WifiScanner,
            1 => MenuPage::GyroAnimation,
            2 => MenuPage::SelfDestruct,
            _ => MenuPage::Exit,
        }
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// The page after this one, wrapping after the last
    pub fn next(self) -> Self {
        Self::from_index((self.index() + 1) % PAGE_COUNT)
    }

    /// Label drawn while the page is highlighted
    pub fn label(self) -> &'static str {
        match self {
            MenuPage::WifiScanner => "WiFi Scanner",
            MenuPage::GyroAnimation => "Gyroscope Animation",
            MenuPage::SelfDestruct => "Self Destruct",
            MenuPage::Exit => "Exit Menu",
        }
    }

    /// Mode entered when this page is selected
    pub fn destination(self) -> Mode {
        match self {
            MenuPage::WifiScanner => Mode::WifiScanning,
            MenuPage::GyroAnimation => Mode::GyroAnimating,
            MenuPage::SelfDestruct => Mode::SelfDestructCounting(SELF_DESTRUCT_SECONDS),
            MenuPage::Exit => Mode::Clock,
        }
    }
}
