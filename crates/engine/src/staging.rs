//! Sibling staging files that are either promoted onto a target or removed.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::EngineError;

/// Suffix appended to a source path to form its staging path.
pub const TEMP_SUFFIX: &str = ".$temp";

/// Returns the staging path for `source`.
#[must_use]
pub fn staging_path_for(source: &Path) -> PathBuf {
    let mut staging = OsString::from(source.as_os_str());
    staging.push(TEMP_SUFFIX);
    PathBuf::from(staging)
}

/// Reports whether `path` ends with [`TEMP_SUFFIX`].
pub(crate) fn is_staging_path(path: &Path) -> bool {
    path.as_os_str()
        .as_encoded_bytes()
        .ends_with(TEMP_SUFFIX.as_bytes())
}

/// Removes `path`, treating a missing file as success.
pub(crate) fn remove_if_exists(action: &'static str, path: &Path) -> Result<(), EngineError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(error) => Err(EngineError::io(action, path.to_path_buf(), error)),
    }
}

/// Owns the staging file of one source while it is being transformed.
///
/// Dropping the guard without [`commit`](Self::commit) removes the staging
/// file, so a failing transform never leaves one behind.
#[derive(Debug)]
pub(crate) struct StagingGuard {
    staging_path: PathBuf,
    finished: bool,
}

impl StagingGuard {
    /// Reserves the staging path of `source`, removing a stale file left by
    /// an earlier interrupted run.
    pub(crate) fn new(source: &Path) -> Result<Self, EngineError> {
        let staging_path = staging_path_for(source);
        remove_if_exists("remove stale staging file", &staging_path)?;
        Ok(Self {
            staging_path,
            finished: false,
        })
    }

    pub(crate) fn staging_path(&self) -> &Path {
        &self.staging_path
    }

    /// Moves the staging file onto `target`, replacing it.
    pub(crate) fn commit(mut self, target: &Path) -> Result<(), EngineError> {
        match fs::rename(&self.staging_path, target) {
            Ok(()) => {}
            Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {
                remove_if_exists("remove existing target", target)?;
                fs::rename(&self.staging_path, target).map_err(|rename_error| {
                    EngineError::io(
                        "rename staging file",
                        self.staging_path.clone(),
                        rename_error,
                    )
                })?;
            }
            Err(error) if error.kind() == io::ErrorKind::CrossesDevices => {
                fs::copy(&self.staging_path, target).map_err(|copy_error| {
                    EngineError::io("copy staging file", target.to_path_buf(), copy_error)
                })?;
                remove_if_exists("remove staging file", &self.staging_path)?;
            }
            Err(error) => {
                return Err(EngineError::io(
                    "rename staging file",
                    self.staging_path.clone(),
                    error,
                ));
            }
        }
        self.finished = true;
        Ok(())
    }

    /// Removes the staging file if the transform created one.
    pub(crate) fn discard(mut self) -> Result<(), EngineError> {
        self.finished = true;
        remove_if_exists("remove staging file", &self.staging_path)
    }
}

impl Drop for StagingGuard {
    fn drop(&mut self) {
        if !self.finished {
            let _ = fs::remove_file(&self.staging_path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn staging_path_appends_suffix() {
        assert_eq!(
            staging_path_for(Path::new("dir/file.txt")),
            PathBuf::from("dir/file.txt.$temp")
        );
    }

    #[test]
    fn staging_suffix_is_recognised() {
        assert!(is_staging_path(Path::new("a.txt.$temp")));
        assert!(!is_staging_path(Path::new("a.txt")));
        assert!(!is_staging_path(Path::new("a.$temp.txt")));
    }

    #[test]
    fn new_removes_stale_staging_file() {
        let temp = tempdir().expect("tempdir");
        let source = temp.path().join("a.txt");
        let stale = staging_path_for(&source);
        fs::write(&stale, b"stale").expect("write stale");

        let guard = StagingGuard::new(&source).expect("guard");
        assert_eq!(guard.staging_path(), stale);
        assert!(!stale.exists());
    }

    #[test]
    fn commit_replaces_target() {
        let temp = tempdir().expect("tempdir");
        let source = temp.path().join("a.txt");
        fs::write(&source, b"old").expect("write source");

        let guard = StagingGuard::new(&source).expect("guard");
        fs::write(guard.staging_path(), b"new").expect("write staging");
        let staging = guard.staging_path().to_path_buf();
        guard.commit(&source).expect("commit");

        assert_eq!(fs::read(&source).expect("read"), b"new");
        assert!(!staging.exists());
    }

    #[test]
    fn commit_creates_missing_target() {
        let temp = tempdir().expect("tempdir");
        let source = temp.path().join("a.txt");
        let target = temp.path().join("out.txt");

        let guard = StagingGuard::new(&source).expect("guard");
        fs::write(guard.staging_path(), b"new").expect("write staging");
        guard.commit(&target).expect("commit");

        assert_eq!(fs::read(&target).expect("read"), b"new");
    }

    #[test]
    fn commit_without_staging_file_fails() {
        let temp = tempdir().expect("tempdir");
        let source = temp.path().join("a.txt");

        let guard = StagingGuard::new(&source).expect("guard");
        let error = guard.commit(&source).expect_err("nothing to rename");
        assert!(error.to_string().starts_with("failed to rename staging file"));
    }

    #[test]
    fn discard_and_drop_remove_staging_file() {
        let temp = tempdir().expect("tempdir");
        let source = temp.path().join("a.txt");

        let guard = StagingGuard::new(&source).expect("guard");
        fs::write(guard.staging_path(), b"x").expect("write staging");
        let staging = guard.staging_path().to_path_buf();
        guard.discard().expect("discard");
        assert!(!staging.exists());

        let guard = StagingGuard::new(&source).expect("guard");
        fs::write(guard.staging_path(), b"x").expect("write staging");
        drop(guard);
        assert!(!staging.exists());
    }

    #[test]
    fn discard_tolerates_missing_staging_file() {
        let temp = tempdir().expect("tempdir");
        let guard = StagingGuard::new(&temp.path().join("a.txt")).expect("guard");
        guard.discard().expect("discard");
    }

    #[test]
    fn remove_if_exists_tolerates_missing_file() {
        let temp = tempdir().expect("tempdir");
        remove_if_exists("remove", &temp.path().join("missing")).expect("missing ok");
    }
}
