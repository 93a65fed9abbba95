//! Binary file detection.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected by [`is_text_file`].
pub const TEXT_SNIFF_LEN: usize = 512;

/// Guesses whether `path` holds text.
///
/// Reads up to [`TEXT_SNIFF_LEN`] bytes and reports `false` if any of them is
/// NUL or if the file cannot be opened or read. Empty files are text. This is
/// a heuristic: UTF-16 text is reported as binary and a binary file without
/// early NUL bytes as text.
#[must_use]
pub fn is_text_file(path: &Path) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };
    let mut head = Vec::with_capacity(TEXT_SNIFF_LEN);
    match file.take(TEXT_SNIFF_LEN as u64).read_to_end(&mut head) {
        Ok(_) => !head.contains(&0),
        Err(_) => false,
    }
}
