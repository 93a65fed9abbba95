use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error returned when a directory cannot be listed or an entry inspected.
#[derive(Debug)]
pub struct WalkError {
    kind: WalkErrorKind,
}

impl WalkError {
    pub(crate) fn new(kind: WalkErrorKind) -> Self {
        Self { kind }
    }

    pub(crate) fn root_metadata(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::RootMetadata { path, source })
    }

    pub(crate) fn read_dir(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::ReadDir { path, source })
    }

    pub(crate) fn read_dir_entry(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::ReadDirEntry { path, source })
    }

    pub(crate) fn metadata(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::Metadata { path, source })
    }

    pub(crate) fn canonicalize(path: PathBuf, source: io::Error) -> Self {
        Self::new(WalkErrorKind::Canonicalize { path, source })
    }

    /// Returns the specific failure.
    #[must_use]
    pub fn kind(&self) -> &WalkErrorKind {
        &self.kind
    }

    /// Returns the filesystem path associated with the error.
    ///
    /// ```
    /// use walk::EntryKind;
    ///
    /// let error = EntryKind::of_root("./definitely_missing_root").unwrap_err();
    /// assert!(error.path().ends_with("definitely_missing_root"));
    /// ```
    #[must_use]
    pub fn path(&self) -> &Path {
        self.kind.path()
    }

    /// Returns the underlying I/O error.
    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        self.kind.source()
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (action, path, source) = match &self.kind {
            WalkErrorKind::RootMetadata { path, source } => ("inspect input path", path, source),
            WalkErrorKind::ReadDir { path, source } => ("read directory", path, source),
            WalkErrorKind::ReadDirEntry { path, source } => ("read entry in", path, source),
            WalkErrorKind::Metadata { path, source } => ("inspect metadata for", path, source),
            WalkErrorKind::Canonicalize { path, source } => ("canonicalize", path, source),
        };
        write!(f, "failed to {action} '{}': {source}", path.display())
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.kind.source())
    }
}

/// Classification of listing failures. Every variant carries the path that
/// was being accessed and the operating-system error.
#[derive(Debug)]
#[allow(missing_docs)]
pub enum WalkErrorKind {
    /// `stat` on an input path failed.
    RootMetadata { path: PathBuf, source: io::Error },
    /// A directory could not be opened.
    ReadDir { path: PathBuf, source: io::Error },
    /// Iterating a directory yielded an error. `path` is the directory.
    ReadDirEntry { path: PathBuf, source: io::Error },
    /// `stat` on a directory entry failed.
    Metadata { path: PathBuf, source: io::Error },
    /// A directory could not be resolved while checking for loops.
    Canonicalize { path: PathBuf, source: io::Error },
}

impl WalkErrorKind {
    /// Returns the filesystem path tied to the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::RootMetadata { path, .. }
            | Self::ReadDir { path, .. }
            | Self::ReadDirEntry { path, .. }
            | Self::Metadata { path, .. }
            | Self::Canonicalize { path, .. } => path,
        }
    }

    fn source(&self) -> &io::Error {
        match self {
            Self::RootMetadata { source, .. }
            | Self::ReadDir { source, .. }
            | Self::ReadDirEntry { source, .. }
            | Self::Metadata { source, .. }
            | Self::Canonicalize { source, .. } => source,
        }
    }
}
