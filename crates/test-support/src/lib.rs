#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Scratch directories and fixture trees shared by the workspace's tests.
//!
//! Helpers panic with a descriptive message on I/O failure; they are only
//! meant to be called from tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory removed when dropped.
#[derive(Debug)]
pub struct TestDir {
    inner: TempDir,
}

impl TestDir {
    /// Creates an empty scratch directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: tempfile::tempdir().expect("create scratch directory"),
        }
    }

    /// Returns the root of the scratch directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Joins `relative` onto the root.
    #[must_use]
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.path().join(relative)
    }

    /// Writes `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: impl AsRef<Path>, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directories");
        }
        fs::write(&path, content).expect("write fixture file");
        path
    }

    /// Creates the directory `relative` and its parents.
    pub fn mkdir(&self, relative: impl AsRef<Path>) -> PathBuf {
        let path = self.join(relative);
        fs::create_dir_all(&path).expect("create fixture directory");
        path
    }

    /// Reads `relative` back.
    #[must_use]
    pub fn read(&self, relative: impl AsRef<Path>) -> Vec<u8> {
        fs::read(self.join(relative)).expect("read fixture file")
    }

    /// Reports whether `relative` exists.
    #[must_use]
    pub fn exists(&self, relative: impl AsRef<Path>) -> bool {
        self.join(relative).exists()
    }

    /// Returns the sorted names directly inside `relative`.
    #[must_use]
    pub fn names(&self, relative: impl AsRef<Path>) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(self.join(relative))
            .expect("list fixture directory")
            .map(|entry| {
                entry
                    .expect("fixture entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }

    /// Materialises `tree` under the root.
    pub fn populate(&self, tree: &FileTree) {
        for directory in &tree.directories {
            self.mkdir(directory);
        }
        for (path, content) in &tree.files {
            self.write(path, content);
        }
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Declarative description of files and directories to create.
///
/// ```
/// use test_support::{FileTree, TestDir};
///
/// let dir = TestDir::new();
/// dir.populate(
///     &FileTree::new()
///         .file("a.txt", "alpha\n")
///         .file("sub/b.txt", "beta\n")
///         .dir("empty"),
/// );
/// assert_eq!(dir.names(""), ["a.txt", "empty", "sub"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FileTree {
    files: Vec<(PathBuf, Vec<u8>)>,
    directories: Vec<PathBuf>,
}

impl FileTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given content.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>, content: impl AsRef<[u8]>) -> Self {
        self.files.push((path.into(), content.as_ref().to_vec()));
        self
    }

    /// Adds a directory.
    #[must_use]
    pub fn dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.directories.push(path.into());
        self
    }
}
