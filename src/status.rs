//! Single-line status display

use core::fmt::Write;

use heapless::String;

/// Capacity of a rendered status line
pub const STATUS_CAPACITY: usize = 48;

pub const STATUS_BOOTING: &str = "Booting...";
pub const STATUS_OFF: &str = "LEDs Off";
pub const STATUS_PAUSED: &str = "Paused";

const COMING_UP_PREFIX: &str = "Coming up: ";

const _: () = assert!(COMING_UP_PREFIX.len() < STATUS_CAPACITY);

/// Status line sink
///
/// Each call replaces the previous text; nothing is kept.
pub trait StatusDisplay {
    fn set_status(&mut self, text: &str);
}

impl<T: StatusDisplay + ?Sized> StatusDisplay for &mut T {
    fn set_status(&mut self, text: &str) {
        (**self).set_status(text);
    }
}

/// Display that discards everything, for boards without a screen
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDisplay;

impl StatusDisplay for NoDisplay {
    fn set_status(&mut self, _text: &str) {}
}

/// Announcement shown after switching to the next effect
///
/// Names too long for the line are cut at a character boundary.
pub fn coming_up(name: &str) -> String<STATUS_CAPACITY> {
    let mut text = String::new();
    // Prefix always fits, checked above
    let _ = text.push_str(COMING_UP_PREFIX);
    for ch in name.chars() {
        if text.write_char(ch).is_err() {
            break;
        }
    }
    text
}
