use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use walk::WalkError;

use crate::stats::RunStats;

/// Exit code for a run aborted by an I/O failure.
pub const IO_FAILURE_EXIT_CODE: i32 = 3;

/// Exit code for an input that does not exist or has the wrong type.
pub const INVALID_PATH_EXIT_CODE: i32 = 2;

/// Error produced while walking inputs or committing a file.
#[derive(Debug)]
pub struct EngineError {
    kind: EngineErrorKind,
}

impl EngineError {
    fn new(kind: EngineErrorKind) -> Self {
        Self { kind }
    }

    /// Constructs an error for an input path that cannot be processed.
    #[must_use]
    pub fn invalid_path(path: PathBuf, reason: &'static str) -> Self {
        Self::new(EngineErrorKind::InvalidPath { path, reason })
    }

    /// Constructs an I/O error with action context.
    #[must_use]
    pub fn io(action: &'static str, path: PathBuf, source: io::Error) -> Self {
        Self::new(EngineErrorKind::Io {
            action,
            path,
            source,
        })
    }

    /// Constructs an error raised by the transform for `path`.
    #[must_use]
    pub fn transform(path: PathBuf, source: io::Error) -> Self {
        Self::new(EngineErrorKind::Transform { path, source })
    }

    /// Returns the exit code for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self.kind {
            EngineErrorKind::InvalidPath { .. } => INVALID_PATH_EXIT_CODE,
            EngineErrorKind::Io { .. }
            | EngineErrorKind::Transform { .. }
            | EngineErrorKind::Walk(_) => IO_FAILURE_EXIT_CODE,
        }
    }

    /// Provides access to the underlying error kind.
    #[must_use]
    pub fn kind(&self) -> &EngineErrorKind {
        &self.kind
    }

    /// Returns the path the failure is about.
    #[must_use]
    pub fn path(&self) -> &Path {
        match &self.kind {
            EngineErrorKind::InvalidPath { path, .. }
            | EngineErrorKind::Io { path, .. }
            | EngineErrorKind::Transform { path, .. } => path,
            EngineErrorKind::Walk(error) => error.path(),
        }
    }
}

impl From<WalkError> for EngineError {
    fn from(error: WalkError) -> Self {
        Self::new(EngineErrorKind::Walk(error))
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            EngineErrorKind::InvalidPath { path, reason } => {
                write!(f, "invalid input '{}': {reason}", path.display())
            }
            EngineErrorKind::Io {
                action,
                path,
                source,
            } => write!(f, "failed to {action} '{}': {source}", path.display()),
            EngineErrorKind::Transform { path, source } => {
                write!(f, "failed to process '{}': {source}", path.display())
            }
            EngineErrorKind::Walk(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            EngineErrorKind::InvalidPath { .. } => None,
            EngineErrorKind::Io { source, .. } | EngineErrorKind::Transform { source, .. } => {
                Some(source)
            }
            EngineErrorKind::Walk(error) => Some(error),
        }
    }
}

/// Classification of walker failures.
#[derive(Debug)]
pub enum EngineErrorKind {
    /// An input vanished or changed type between validation and processing.
    InvalidPath {
        /// Offending input.
        path: PathBuf,
        /// Short description of the problem.
        reason: &'static str,
    },
    /// Staging, backup, or commit failed.
    Io {
        /// Action being performed.
        action: &'static str,
        /// Path involved in the failure.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// The transform failed for a file.
    Transform {
        /// Source file being transformed.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// A directory could not be listed.
    Walk(WalkError),
}

/// A run that stopped early, together with what it accomplished.
#[derive(Debug)]
pub struct ProcessError {
    error: EngineError,
    stats: RunStats,
}

impl ProcessError {
    pub(crate) fn new(error: EngineError, stats: RunStats) -> Self {
        Self { error, stats }
    }

    /// Returns the failure that stopped the run.
    #[must_use]
    pub fn error(&self) -> &EngineError {
        &self.error
    }

    /// Returns the counters accumulated up to the failure.
    #[must_use]
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Returns the exit code of the underlying failure.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.error.exit_code()
    }

    /// Splits the error into its parts.
    #[must_use]
    pub fn into_parts(self) -> (EngineError, RunStats) {
        (self.error, self.stats)
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl Error for ProcessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}
