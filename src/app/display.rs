//! Status screen text.
//!
//! The 128×32 OLED shows two lines, roll then pitch, with two decimals.
//! Lines are built into fixed-capacity strings so a refresh never
//! allocates.

use core::fmt::Write;

use heapless::String;

use crate::control::orientation::FilteredAngles;

/// Longest line: `"Pitch value: -90.00"` plus headroom for odd inputs.
pub const LINE_CAPACITY: usize = 32;

pub type StatusLine = String<LINE_CAPACITY>;

/// Render the roll/pitch lines.  Values too long for a line are
/// truncated rather than dropped.
pub fn status_lines(angles: FilteredAngles) -> [StatusLine; 2] {
    [
        line("Roll value: ", angles.roll),
        line("Pitch value: ", angles.pitch),
    ]
}

fn line(label: &str, value: f32) -> StatusLine {
    let mut s = StatusLine::new();
    // Overflow only truncates; the label always fits.
    let _ = write!(s, "{label}{value:.2}");
    s
}
