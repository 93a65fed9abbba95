//! Whole-buffer normalisation.

use crate::indent::normalize_line;
use crate::line::split_lines;
use crate::options::{LineSeparator, NormalizeOptions};

/// A line that normalisation rewrote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineChange {
    /// One-based line number in the input.
    pub number: usize,
    /// Input line without its delimiter.
    pub before: Vec<u8>,
    /// Rewritten line without its delimiter.
    pub after: Vec<u8>,
}

/// Result of normalising one buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalized {
    /// Rewritten contents, present only when they differ from the input.
    pub output: Option<Vec<u8>>,
    /// Lines in the output, after trailing blank lines are collapsed.
    pub lines_processed: u64,
    /// Lines whose content or delimiter changed.
    pub lines_modified: u64,
    /// Convention of the input, when it used exactly one delimiter kind.
    pub detected: Option<LineSeparator>,
    /// Delimiter written after every output line.
    pub separator: LineSeparator,
}

impl Normalized {
    /// Reports whether the output uses a different delimiter convention than
    /// the input had.
    #[must_use]
    pub fn separator_changed(&self) -> bool {
        self.output.is_some() && self.detected != Some(self.separator)
    }
}

/// Normalises a buffer without recording individual line changes.
///
/// ```
/// use normalize::{NormalizeOptions, normalize_bytes};
///
/// let result = normalize_bytes(b"\tx  \n\n\n", &NormalizeOptions::new());
/// assert_eq!(result.output.as_deref(), Some(&b"    x\n"[..]));
/// assert_eq!(result.lines_processed, 1);
/// assert_eq!(result.lines_modified, 1);
/// ```
#[must_use]
pub fn normalize_bytes(bytes: &[u8], options: &NormalizeOptions) -> Normalized {
    normalize_into(bytes, options, None)
}

/// Normalises a buffer and also returns every rewritten line.
#[must_use]
pub fn normalize_bytes_with_changes(
    bytes: &[u8],
    options: &NormalizeOptions,
) -> (Normalized, Vec<LineChange>) {
    let mut changes = Vec::new();
    let normalized = normalize_into(bytes, options, Some(&mut changes));
    (normalized, changes)
}

fn normalize_into(
    bytes: &[u8],
    options: &NormalizeOptions,
    mut changes: Option<&mut Vec<LineChange>>,
) -> Normalized {
    let (lines, stats) = split_lines(bytes);
    let detected = stats.detected();
    let separator = options
        .line_separator_value()
        .or(detected)
        .unwrap_or_else(LineSeparator::native);

    let input_width = options.input_tab_width_value();
    let output_width = options.tab_width_value();
    let style = options.indent_style_value();

    let mut modified = detected != Some(separator);
    let mut lines_modified = 0;
    let mut rewritten = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        let content = normalize_line(line.content(), input_width, output_width, style);
        if content != line.content() || line.ending().separator() != Some(separator) {
            modified = true;
            lines_modified += 1;
            if let Some(changes) = changes.as_deref_mut() {
                changes.push(LineChange {
                    number: index + 1,
                    before: line.content().to_vec(),
                    after: content.clone(),
                });
            }
        }
        rewritten.push(content);
    }

    while rewritten.len() > 1 && rewritten.last().is_some_and(Vec::is_empty) {
        rewritten.pop();
        modified = true;
    }
    // Empty input has no delimiter, so it always differs and becomes one
    // empty line.
    if rewritten.is_empty() {
        rewritten.push(Vec::new());
    }

    let output = modified.then(|| {
        let separator = separator.as_bytes();
        let capacity = rewritten
            .iter()
            .map(|line| line.len() + separator.len())
            .sum();
        let mut output = Vec::with_capacity(capacity);
        for line in &rewritten {
            output.extend_from_slice(line);
            output.extend_from_slice(separator);
        }
        output
    });

    Normalized {
        output,
        lines_processed: rewritten.len() as u64,
        lines_modified,
        detected,
        separator,
    }
}
