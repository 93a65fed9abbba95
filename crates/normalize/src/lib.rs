#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `normalize` rewrites the whitespace of text files: indentation is
//! re-expressed as spaces or tabs, trailing blanks are stripped, every line
//! ends in one delimiter convention, and runs of blank lines at the end of a
//! file collapse to a single line break. [`WhitespaceTransform`] plugs this
//! into the `engine` walker.
//!
//! # Design
//!
//! - [`split_lines`] cuts a buffer into [`Line`]s in one pass and counts each
//!   delimiter kind so the input's convention can be detected.
//! - [`normalize_line`] handles one line: it measures leading whitespace as a
//!   column (tabs advance to the next input tab stop, spaces and Latin-1
//!   no-break spaces count one) and re-emits that column.
//! - [`normalize_bytes`] combines the two and only produces output when
//!   something changed.
//!
//! # Invariants
//!
//! - Normalising already normalised bytes with the same options yields no
//!   output.
//! - Every output line ends with the chosen delimiter, including the last.
//! - Empty input becomes a single line break.
//!
//! # Examples
//!
//! ```
//! use normalize::{IndentStyle, LineSeparator, NormalizeOptions, normalize_bytes};
//!
//! let options = NormalizeOptions::new()
//!     .indent_style(IndentStyle::Tabs)
//!     .line_separator(Some(LineSeparator::CrLf));
//! let result = normalize_bytes(b"        if x:  \n            y()\n", &options);
//! assert_eq!(result.output.as_deref(), Some(&b"\t\tif x:\r\n\t\t\ty()\r\n"[..]));
//! assert!(result.separator_changed());
//! ```

mod document;
mod indent;
mod line;
mod options;
mod transform;

pub use document::{LineChange, Normalized, normalize_bytes, normalize_bytes_with_changes};
pub use indent::normalize_line;
pub use line::{Line, LineEnding, LineEndingStats, split_lines};
pub use options::{
    DEFAULT_TAB_WIDTH, IndentStyle, InvalidTabWidth, LineSeparator, MAX_TAB_WIDTH, NormalizeOptions,
    ParseLineSeparatorError, TabWidth,
};
pub use transform::WhitespaceTransform;

#[cfg(test)]
mod tests;
