//! Aggregate counters for one run.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Counters accumulated by the walker and the transform it drives.
///
/// A fresh value is created by [`process`](crate::process) for every run and
/// handed back to the caller when the run ends, successfully or not.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Files handed to the transform.
    pub files_processed: u64,
    /// Files whose new content was committed.
    pub files_modified: u64,
    /// Files the transform declined, for example because they are binary.
    pub files_skipped: u64,
    /// Files excluded by the match or exclude patterns.
    pub files_ignored: u64,
    /// Directories listed.
    pub dirs_processed: u64,
    /// Directories excluded by the exclude patterns.
    pub dirs_ignored: u64,
    /// Lines seen by the transform.
    pub lines_processed: u64,
    /// Lines the transform rewrote.
    pub lines_modified: u64,
    /// Bytes read from source files.
    pub bytes_read: u64,
    /// Bytes written to staging files.
    pub bytes_written: u64,
    /// Bytes written, counting unchanged files at their original size.
    pub bytes_written_if_unmodified: u64,
    /// Failures encountered, whether or not they aborted the run.
    pub exceptions: u64,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
    /// Backup archive written by the run, if any.
    pub zip_archive: Option<PathBuf>,
}

impl RunStats {
    /// Creates zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Relative size change of the output against the input, in percent.
    ///
    /// Unchanged files count at their original size. Returns `0.0` when
    /// nothing was read.
    ///
    /// ```
    /// let mut stats = engine::RunStats::new();
    /// stats.bytes_read = 200;
    /// stats.bytes_written_if_unmodified = 150;
    /// assert_eq!(stats.compression_percent(), -25.0);
    /// ```
    #[must_use]
    pub fn compression_percent(&self) -> f64 {
        if self.bytes_read == 0 {
            return 0.0;
        }
        let read = self.bytes_read as f64;
        100.0 * (self.bytes_written_if_unmodified as f64 - read) / read
    }

    /// Path of the backup archive, if one was written.
    #[must_use]
    pub fn archive_path(&self) -> Option<&Path> {
        self.zip_archive.as_deref()
    }
}
