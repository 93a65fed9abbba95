use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::entry::{DirEntry, EntryKind};
use crate::error::WalkError;

/// Sorted snapshot of a directory's immediate children.
#[derive(Clone, Debug)]
pub struct DirectoryListing {
    path: PathBuf,
    entries: Vec<DirEntry>,
}

impl DirectoryListing {
    /// Reads and classifies every child of `path`, sorted by file name.
    ///
    /// # Errors
    ///
    /// Fails when the directory cannot be opened, an entry cannot be read, or
    /// an entry's metadata cannot be queried for a reason other than it
    /// having disappeared.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, WalkError> {
        let path = path.as_ref();
        let read_dir =
            fs::read_dir(path).map_err(|error| WalkError::read_dir(path.to_path_buf(), error))?;

        let mut names = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|error| WalkError::read_dir_entry(path.to_path_buf(), error))?;
            names.push(entry.file_name());
        }
        names.sort();

        let mut entries = Vec::with_capacity(names.len());
        for name in names {
            let full_path = path.join(&name);
            let kind = EntryKind::of_entry(&full_path)?;
            entries.push(DirEntry {
                full_path,
                name,
                kind,
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Returns the listed directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns every entry in name order.
    #[must_use]
    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    /// Iterates over regular files in name order.
    pub fn files(&self) -> impl Iterator<Item = &DirEntry> {
        self.entries.iter().filter(|entry| entry.is_file())
    }

    /// Iterates over subdirectories in name order.
    pub fn directories(&self) -> impl Iterator<Item = &DirEntry> {
        self.entries.iter().filter(|entry| entry.is_dir())
    }
}

/// Tracks canonical directory paths so symbolic-link loops are entered once.
#[derive(Debug, Default)]
pub struct VisitedDirectories {
    seen: HashSet<PathBuf>,
}

impl VisitedDirectories {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `path` and reports whether it had not been seen before.
    ///
    /// # Errors
    ///
    /// Fails when the path cannot be canonicalized.
    pub fn first_visit(&mut self, path: &Path) -> Result<bool, WalkError> {
        let canonical = fs::canonicalize(path)
            .map_err(|error| WalkError::canonicalize(path.to_path_buf(), error))?;
        let first = self.seen.insert(canonical);
        if !first {
            logging::trace_skip!("skipping already visited directory '{}'", path.display());
        }
        Ok(first)
    }
}
