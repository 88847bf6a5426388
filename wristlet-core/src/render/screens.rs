use core::fmt::Write;

use heapless::String;

use crate::motion::{project, RotationAngles, CUBE_EDGES, CUBE_VERTICES};
use crate::state::{ErrorKind, MenuPage};
use crate::traits::{Color, PanelDriver, PanelError, PanelExt};

use super::bitmaps::{LOW_BATTERY, WATCH_ICON};
use super::{ClockFace, CHAR_WIDTH, LINE_HEIGHT, MAX_LISTED_NETWORKS};

/// Print small text horizontally centred on the panel
fn print_centered<P: PanelDriver>(panel: &mut P, y: i32, text: &str) {
    let (width, _) = panel.size();
    let text_width = text.chars().count() as u32 * CHAR_WIDTH;
    let x = width.saturating_sub(text_width) / 2;
    panel.print_at(x as i32, y, text);
}

/// Logo with a status line beneath it
pub fn draw_loading<P: PanelDriver>(panel: &mut P, message: &str) -> Result<(), PanelError> {
    let (width, _) = panel.size();
    panel.clear();
    panel.reset_text();

    let x = width.saturating_sub(WATCH_ICON.width) / 2;
    panel.draw_bitmap(x as i32, 2, &WATCH_ICON, Color::On, Color::Off);
    print_centered(panel, 40, message);

    panel.flush()
}

/// Time, date and step count
pub fn draw_clock<P: PanelDriver>(panel: &mut P, face: &ClockFace) -> Result<(), PanelError> {
    let (width, _) = panel.size();
    panel.clear();
    panel.reset_text();

    let mut time: String<8> = String::new();
    let _ = write!(time, "{:02}:{:02}", face.hour, face.minute);
    panel.set_text_size(4);
    panel.print_at(5, 9, &time);

    let mut date: String<8> = String::new();
    let _ = write!(date, "{:02}.{:02}.", face.day, face.month);
    panel.set_text_size(1);
    panel.print_at(2, 54, &date);
    panel.print("  Steps: ");
    panel.print_number(face.steps);

    // Double divider between time and date
    let right = width as i32 - 1;
    panel.draw_line(0, 45, right, 45, Color::On);
    panel.draw_line(0, 47, right, 47, Color::On);

    if face.low_battery {
        let x = width.saturating_sub(LOW_BATTERY.width) / 2;
        panel.draw_bitmap(x as i32, 37, &LOW_BATTERY, Color::On, Color::Off);
    }

    panel.flush()
}

/// Border shown while a re-sync runs over the clock
pub fn draw_sync_indicator<P: PanelDriver>(panel: &mut P) -> Result<(), PanelError> {
    let (width, height) = panel.size();
    panel.draw_rect(0, 0, width, height, Color::On);
    panel.draw_rect(2, 2, width.saturating_sub(4), height.saturating_sub(4), Color::On);
    panel.flush()
}

pub fn draw_error<P: PanelDriver>(panel: &mut P, kind: ErrorKind) -> Result<(), PanelError> {
    panel.clear();
    panel.reset_text();
    panel.print_at(0, 0, "ERROR:");
    panel.print_at(0, 20, kind.message());
    panel.print_at(0, 50, "Restart via button...");
    panel.flush()
}

/// Label of the highlighted menu page
///
/// Any out-of-range index shows the exit label.
pub fn draw_menu_page<P: PanelDriver>(panel: &mut P, index: u8) -> Result<(), PanelError> {
    panel.clear();
    panel.reset_text();
    print_centered(panel, 34, MenuPage::from_index(index).label());
    panel.flush()
}

pub fn draw_countdown<P: PanelDriver>(panel: &mut P, remaining: u8) -> Result<(), PanelError> {
    panel.clear();
    panel.reset_text();
    panel.print_at(0, 34, "Self destructing in ");
    panel.print_number(remaining as u32);
    panel.flush()
}

pub fn draw_self_destruct_done<P: PanelDriver>(panel: &mut P) -> Result<(), PanelError> {
    panel.clear();
    panel.reset_text();
    panel.print_at(0, 20, "Just kidding :)");
    panel.print_at(0, 40, "Press to go back");
    panel.flush()
}

pub fn draw_scanning<P: PanelDriver>(panel: &mut P) -> Result<(), PanelError> {
    panel.clear();
    panel.reset_text();
    panel.print_at(0, 0, "Scanning...");
    panel.flush()
}

/// Scan results, revealed one line at a time
///
/// Only the first [`MAX_LISTED_NETWORKS`] results are considered. Hidden
/// networks (empty names) are skipped but still use up one of those
/// slots. `pause` runs after each printed name.
pub fn draw_network_list<P, N, F>(panel: &mut P, names: &[N], mut pause: F) -> Result<(), PanelError>
where
    P: PanelDriver,
    N: AsRef<str>,
    F: FnMut(),
{
    panel.clear();
    panel.reset_text();

    if names.is_empty() {
        panel.print_at(0, 0, "No networks found");
        return panel.flush();
    }

    panel.print_at(0, 0, "Networks found:");
    panel.flush()?;

    panel.set_text_wrap(false);
    let result = list_names(panel, names, &mut pause);
    panel.set_text_wrap(true);

    result
}

fn list_names<P, N, F>(panel: &mut P, names: &[N], pause: &mut F) -> Result<(), PanelError>
where
    P: PanelDriver,
    N: AsRef<str>,
    F: FnMut(),
{
    let mut y = LINE_HEIGHT;
    for name in names.iter().take(MAX_LISTED_NETWORKS) {
        let name = name.as_ref();
        if name.is_empty() {
            continue;
        }
        panel.print_at(0, y, name);
        panel.flush()?;
        y += LINE_HEIGHT;
        pause();
    }
    Ok(())
}

/// One frame of the rotating cube
pub fn draw_cube<P: PanelDriver>(panel: &mut P, angles: RotationAngles) -> Result<(), PanelError> {
    let size = panel.size();
    panel.clear();

    for (a, b) in CUBE_EDGES {
        let start = project(CUBE_VERTICES[a], angles, size);
        let end = project(CUBE_VERTICES[b], angles, size);
        panel.draw_line(start.x, start.y, end.x, end.y, Color::On);
    }

    panel.flush()
}
