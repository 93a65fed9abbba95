use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::WalkError;

/// What a path refers to once symbolic links are followed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// Anything else, including dangling symbolic links.
    Other,
}

impl EntryKind {
    /// Classifies a path named on the command line.
    ///
    /// # Errors
    ///
    /// Returns [`WalkErrorKind::RootMetadata`](crate::WalkErrorKind::RootMetadata)
    /// when the path does not exist or cannot be inspected.
    pub fn of_root(path: impl AsRef<Path>) -> Result<Self, WalkError> {
        let path = path.as_ref();
        fs::metadata(path)
            .map(|metadata| Self::from_file_type(metadata.file_type()))
            .map_err(|error| WalkError::root_metadata(path.to_path_buf(), error))
    }

    /// Classifies a directory entry. Entries that vanished or dangle are
    /// [`EntryKind::Other`].
    pub(crate) fn of_entry(path: &Path) -> Result<Self, WalkError> {
        match fs::metadata(path) {
            Ok(metadata) => Ok(Self::from_file_type(metadata.file_type())),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(Self::Other),
            Err(error) => Err(WalkError::metadata(path.to_path_buf(), error)),
        }
    }

    fn from_file_type(file_type: fs::FileType) -> Self {
        if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

/// A single child of a listed directory.
#[derive(Clone, Debug)]
pub struct DirEntry {
    pub(crate) full_path: PathBuf,
    pub(crate) name: OsString,
    pub(crate) kind: EntryKind,
}

impl DirEntry {
    /// Returns the path of the entry, joined onto the listed directory.
    #[must_use]
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    /// Returns the final path component.
    #[must_use]
    pub fn file_name(&self) -> &OsStr {
        &self.name
    }

    /// Returns the classification of the entry.
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Reports whether the entry is a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Reports whether the entry is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
