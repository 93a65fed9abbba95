//! Preservation of replaced files, as `.bak` siblings or in a zip archive.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use zip::ZipWriter;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;

use crate::error::EngineError;
use crate::staging::remove_if_exists;

/// Suffix appended to a target path to form its backup path.
pub const BACKUP_SUFFIX: &str = ".bak";

const ARCHIVE_TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year][month][day]-[hour][minute][second]");

/// Returns the `.bak` path for `target`.
#[must_use]
pub fn backup_path(target: &Path) -> PathBuf {
    let mut backup = OsString::from(target.as_os_str());
    backup.push(BACKUP_SUFFIX);
    PathBuf::from(backup)
}

/// Renames `target` to its backup path, replacing an older backup.
///
/// Returns the backup path, or `None` when there was no target to preserve.
pub(crate) fn backup_to_file(target: &Path) -> Result<Option<PathBuf>, EngineError> {
    let backup = backup_path(target);
    remove_if_exists("remove previous backup", &backup)?;
    match fs::rename(target, &backup) {
        Ok(()) => Ok(Some(backup)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(EngineError::io("create backup", backup, error)),
    }
}

/// File name of an archive created at `now`.
pub(crate) fn archive_file_name(now: OffsetDateTime) -> Result<String, time::error::Format> {
    Ok(format!("backup_{}.zip", now.format(ARCHIVE_TIMESTAMP_FORMAT)?))
}

/// One zip archive per run, created on first use.
pub(crate) struct BackupArchive {
    root: PathBuf,
    path: PathBuf,
    writer: Option<ZipWriter<File>>,
}

impl BackupArchive {
    /// Prepares an archive named after the current local time inside `root`.
    pub(crate) fn for_root(root: &Path) -> Result<Self, EngineError> {
        let root = std::path::absolute(root)
            .map_err(|error| EngineError::io("resolve archive folder", root.to_path_buf(), error))?;
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        let name = archive_file_name(now).map_err(|error| {
            EngineError::io("name backup archive", root.clone(), io::Error::other(error))
        })?;
        let path = root.join(name);
        Ok(Self {
            root,
            path,
            writer: None,
        })
    }

    /// Adds the current content of `target` under its path relative to the
    /// archive folder. Returns the entry name, or `None` if `target` does not
    /// exist.
    pub(crate) fn add(&mut self, target: &Path) -> Result<Option<String>, EngineError> {
        let content = match fs::read(target) {
            Ok(content) => content,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(EngineError::io("read file for backup", target.to_path_buf(), error));
            }
        };
        let name = self.entry_name(target)?;

        let writer = match self.writer.take() {
            Some(writer) => writer,
            None => {
                let file = File::create(&self.path).map_err(|error| {
                    EngineError::io("create backup archive", self.path.clone(), error)
                })?;
                ZipWriter::new(file)
            }
        };
        let writer = self.writer.insert(writer);

        writer
            .start_file(name.clone(), SimpleFileOptions::default())
            .map_err(|error| archive_error(&self.path, error))?;
        writer
            .write_all(&content)
            .map_err(|error| EngineError::io("write backup archive", self.path.clone(), error))?;
        Ok(Some(name))
    }

    /// Writes the central directory. Returns the archive path if anything was
    /// added. Later calls do nothing.
    pub(crate) fn finish(&mut self) -> Result<Option<PathBuf>, EngineError> {
        let Some(writer) = self.writer.take() else {
            return Ok(None);
        };
        writer
            .finish()
            .map_err(|error| archive_error(&self.path, error))?;
        Ok(Some(self.path.clone()))
    }

    fn entry_name(&self, target: &Path) -> Result<String, EngineError> {
        let absolute = std::path::absolute(target)
            .map_err(|error| EngineError::io("resolve backup entry", target.to_path_buf(), error))?;
        let relative = absolute.strip_prefix(&self.root).unwrap_or(&absolute);
        let parts: Vec<_> = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect();
        Ok(parts.join("/"))
    }
}

fn archive_error(path: &Path, error: ZipError) -> EngineError {
    let source = match error {
        ZipError::Io(source) => source,
        other => io::Error::other(other),
    };
    EngineError::io("write backup archive", path.to_path_buf(), source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use time::macros::datetime;

    #[test]
    fn backup_path_appends_suffix() {
        assert_eq!(
            backup_path(Path::new("src/a.c")),
            PathBuf::from("src/a.c.bak")
        );
    }

    #[test]
    fn backup_to_file_replaces_older_backup() {
        let temp = tempdir().expect("tempdir");
        let target = temp.path().join("a.txt");
        fs::write(&target, b"current").expect("write target");
        fs::write(backup_path(&target), b"older").expect("write old backup");

        let backup = backup_to_file(&target).expect("backup").expect("created");
        assert_eq!(fs::read(&backup).expect("read backup"), b"current");
        assert!(!target.exists());
    }

    #[test]
    fn backup_to_file_without_target_is_noop() {
        let temp = tempdir().expect("tempdir");
        let target = temp.path().join("missing.txt");
        assert!(backup_to_file(&target).expect("backup").is_none());
    }

    #[test]
    fn archive_name_uses_compact_timestamp() {
        let name = archive_file_name(datetime!(2024-03-05 07:08:09 UTC)).expect("format");
        assert_eq!(name, "backup_20240305-070809.zip");
    }

    #[test]
    fn archive_is_created_lazily() {
        let temp = tempdir().expect("tempdir");
        let mut archive = BackupArchive::for_root(temp.path()).expect("archive");
        assert!(archive.add(&temp.path().join("missing")).expect("add").is_none());
        assert!(archive.finish().expect("finish").is_none());
        assert_eq!(fs::read_dir(temp.path()).expect("read dir").count(), 0);
    }

    #[test]
    fn archive_entries_are_relative_to_root() {
        let temp = tempdir().expect("tempdir");
        let nested = temp.path().join("sub").join("deeper");
        fs::create_dir_all(&nested).expect("mkdir");
        fs::write(nested.join("a.txt"), b"alpha").expect("write");
        fs::write(temp.path().join("b.txt"), b"beta").expect("write");

        let mut archive = BackupArchive::for_root(temp.path()).expect("archive");
        let first = archive.add(&nested.join("a.txt")).expect("add a");
        let second = archive.add(&temp.path().join("b.txt")).expect("add b");
        assert_eq!(first.as_deref(), Some("sub/deeper/a.txt"));
        assert_eq!(second.as_deref(), Some("b.txt"));

        let path = archive.finish().expect("finish").expect("archive written");
        assert!(archive.finish().expect("second finish").is_none());

        let file = File::open(&path).expect("open archive");
        let mut zip = zip::ZipArchive::new(file).expect("read archive");
        assert_eq!(zip.len(), 2);
        let mut content = String::new();
        std::io::Read::read_to_string(
            &mut zip.by_name("sub/deeper/a.txt").expect("entry"),
            &mut content,
        )
        .expect("read entry");
        assert_eq!(content, "alpha");
    }
}
