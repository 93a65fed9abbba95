//! The contract between the walker and a per-file rewrite.

use std::io;
use std::path::Path;

use crate::options::WalkerOptions;
use crate::stats::RunStats;

/// Inputs for one transform call.
#[derive(Clone, Copy, Debug)]
pub struct TransformRequest<'a> {
    /// File to read.
    pub source: &'a Path,
    /// File to write when the content changes. It does not exist when the
    /// call starts.
    pub staging: &'a Path,
    /// Options of the current run.
    pub options: &'a WalkerOptions,
}

/// What a transform decided about one file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformOutcome {
    /// Nothing to change. Anything left at the staging path is discarded.
    Unchanged,
    /// The staging file holds the new content.
    Changed {
        /// Size of the staging file.
        bytes_written: u64,
        /// Lines that differ from the source.
        lines_changed: u64,
    },
}

impl TransformOutcome {
    /// Reports whether the staging file should be committed.
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// A rewrite applied to each candidate file.
///
/// Implementations read `request.source`, write any new content to
/// `request.staging`, add their own counters (lines, bytes, skips) to
/// `stats`, and never touch other paths. The walker owns the staging file
/// afterwards.
pub trait FileTransform {
    /// Processes one file.
    ///
    /// # Errors
    ///
    /// Any I/O failure aborts this file. The walker counts it and removes the
    /// staging file.
    fn apply(
        &mut self,
        request: &TransformRequest<'_>,
        stats: &mut RunStats,
    ) -> io::Result<TransformOutcome>;
}

impl<F> FileTransform for F
where
    F: FnMut(&TransformRequest<'_>, &mut RunStats) -> io::Result<TransformOutcome>,
{
    fn apply(
        &mut self,
        request: &TransformRequest<'_>,
        stats: &mut RunStats,
    ) -> io::Result<TransformOutcome> {
        self(request, stats)
    }
}
