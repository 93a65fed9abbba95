//! Per-line whitespace rewriting.

use crate::options::{IndentStyle, TabWidth};

const SPACE: u8 = b' ';
const TAB: u8 = b'\t';
/// Latin-1 no-break space. Counts as one column of indentation.
const NO_BREAK_SPACE: u8 = 0xA0;

/// Rewrites one line (without its delimiter).
///
/// Trailing spaces and tabs are removed, and a line holding nothing but
/// indentation becomes empty. Leading spaces, no-break spaces, and
/// tabs are measured as a column, with each tab advancing to the next multiple
/// of `input_width`, and then re-emitted in `style`. With
/// [`IndentStyle::Tabs`] the column becomes `column / output_width` tabs plus
/// `column % output_width` spaces.
///
/// ```
/// use normalize::{IndentStyle, TabWidth, normalize_line};
///
/// let four = TabWidth::new(4).unwrap();
/// assert_eq!(normalize_line(b"\t  x \t", four, four, IndentStyle::Spaces), b"      x");
/// assert_eq!(normalize_line(b"      x", four, four, IndentStyle::Tabs), b"\t  x");
/// ```
#[must_use]
pub fn normalize_line(
    content: &[u8],
    input_width: TabWidth,
    output_width: TabWidth,
    style: IndentStyle,
) -> Vec<u8> {
    let trimmed_len = content
        .iter()
        .rposition(|&byte| byte != SPACE && byte != TAB)
        .map_or(0, |index| index + 1);
    let trimmed = &content[..trimmed_len];

    let input_width = input_width.get();
    let mut column: usize = 0;
    let mut indent_len = 0;
    for &byte in trimmed {
        match byte {
            SPACE | NO_BREAK_SPACE => column = column.saturating_add(1),
            TAB => column = (column / input_width + 1).saturating_mul(input_width),
            _ => break,
        }
        indent_len += 1;
    }

    let body = &trimmed[indent_len..];
    // Indentation with nothing after it is dropped, even no-break spaces that
    // would otherwise become trailing spaces for the next run to strip.
    if body.is_empty() {
        return Vec::new();
    }

    let mut line = Vec::with_capacity(column + body.len());
    match style {
        IndentStyle::Spaces => line.resize(column, SPACE),
        IndentStyle::Tabs => {
            let output_width = output_width.get();
            line.resize(column / output_width, TAB);
            line.resize(line.len() + column % output_width, SPACE);
        }
    }
    line.extend_from_slice(body);
    line
}
