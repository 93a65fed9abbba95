//! crates/logging/src/display.rs
//! Printable renderings of raw line bytes for diagnostics.

use std::fmt::Write as _;

/// Renders a line so whitespace is visible.
///
/// Spaces become `.`, tabs become `<tab>`, and control or non-ASCII bytes
/// become `\xNN`. Other printable ASCII is copied.
#[must_use]
pub fn render_line(bytes: &[u8]) -> String {
    let mut rendered = String::with_capacity(bytes.len());
    for &byte in bytes {
        match byte {
            b' ' => rendered.push('.'),
            b'\t' => rendered.push_str("<tab>"),
            0x21..=0x7e => rendered.push(char::from(byte)),
            _ => {
                let _ = write!(rendered, "\\x{byte:02X}");
            }
        }
    }
    rendered
}

/// Renders a byte sequence as `[x0D, x0A]`.
#[must_use]
pub fn render_hex(bytes: &[u8]) -> String {
    let mut rendered = String::from("[");
    for (index, byte) in bytes.iter().enumerate() {
        if index > 0 {
            rendered.push_str(", ");
        }
        let _ = write!(rendered, "x{byte:02X}");
    }
    rendered.push(']');
    rendered
}
