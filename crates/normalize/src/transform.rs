//! The whitespace rewrite as an engine transform.

use std::fs;
use std::io;

use engine::{FileTransform, RunStats, TransformOutcome, TransformRequest, is_text_file};
use logging::{InfoFlag, info_gte, render_hex, render_line, trace_diff, trace_lines, trace_skip};

use crate::document::{normalize_bytes, normalize_bytes_with_changes};
use crate::options::NormalizeOptions;

/// Applies [`normalize_bytes`] to every file the walker hands over.
///
/// Binary files, detected with [`is_text_file`], are counted as skipped and
/// left alone. The staging file is written only when the content changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceTransform {
    options: NormalizeOptions,
}

impl WhitespaceTransform {
    /// Creates the transform.
    #[must_use]
    pub const fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }
}

impl FileTransform for WhitespaceTransform {
    fn apply(
        &mut self,
        request: &TransformRequest<'_>,
        stats: &mut RunStats,
    ) -> io::Result<TransformOutcome> {
        if !is_text_file(request.source) {
            trace_skip!("    Skipped non-text file.");
            stats.files_skipped += 1;
            return Ok(TransformOutcome::Unchanged);
        }

        let source = fs::read(request.source)?;
        let normalized = if info_gte(InfoFlag::Diff, 2) {
            let (normalized, changes) = normalize_bytes_with_changes(&source, &self.options);
            for change in &changes {
                trace_diff!("        #{:04}: {}", change.number, render_line(&change.before));
                trace_diff!("             : {}", render_line(&change.after));
            }
            normalized
        } else {
            normalize_bytes(&source, &self.options)
        };

        let bytes_read = source.len() as u64;
        stats.bytes_read += bytes_read;
        stats.lines_processed += normalized.lines_processed;
        stats.lines_modified += normalized.lines_modified;

        if normalized.separator_changed() {
            trace_lines!(
                "    Changing line separator to {}",
                render_hex(normalized.separator.as_bytes())
            );
        }

        let Some(output) = normalized.output else {
            stats.bytes_written_if_unmodified += bytes_read;
            return Ok(TransformOutcome::Unchanged);
        };

        fs::write(request.staging, &output)?;
        let bytes_written = output.len() as u64;
        stats.bytes_written += bytes_written;
        stats.bytes_written_if_unmodified += bytes_written;
        trace_lines!(
            "    Changed {} lines (size {} -> {} bytes)",
            normalized.lines_modified,
            bytes_read,
            bytes_written
        );

        Ok(TransformOutcome::Changed {
            bytes_written,
            lines_changed: normalized.lines_modified,
        })
    }
}
