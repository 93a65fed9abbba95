//! The traversal: direct, flat, and recursive modes over a [`FileTransform`].

use std::path::{Path, PathBuf};
use std::time::Instant;

use walk::{DirectoryListing, EntryKind, VisitedDirectories};

use crate::backup::{BackupArchive, backup_to_file};
use crate::error::{EngineError, ProcessError};
use crate::options::{BackupMode, WalkerOptions};
use crate::staging::{StagingGuard, is_staging_path};
use crate::stats::RunStats;
use crate::transform::{FileTransform, TransformRequest};

/// Runs `transform` over every candidate reachable from `paths`.
///
/// The mode follows from `options`:
///
/// - recursive: every path is a directory walked depth first, files before
///   subdirectories, each level in name order;
/// - match patterns without recursion: the single directory in `paths` is
///   listed once;
/// - otherwise every path is a file processed directly.
///
/// Each candidate goes through the staging protocol: the transform writes to
/// `<source>.$temp`, which is then committed onto the target (after an
/// optional backup) or discarded. A zip backup archive, if any, is finished
/// exactly once before this function returns.
///
/// Inputs are expected to have passed [`validate`](crate::validate).
///
/// # Errors
///
/// Without [`WalkerOptions::ignore_errors`] the first failure stops the run
/// and is returned with the counters accumulated so far. With it, failures
/// are counted in [`RunStats::exceptions`], logged, and skipped.
pub fn process<T>(
    paths: &[PathBuf],
    options: &WalkerOptions,
    transform: &mut T,
) -> Result<RunStats, ProcessError>
where
    T: FileTransform + ?Sized,
{
    let started = Instant::now();

    let archive = match (options.zip_backup(), paths.first()) {
        (true, Some(root)) => match BackupArchive::for_root(root) {
            Ok(archive) => Some(archive),
            Err(error) => return Err(ProcessError::new(error, RunStats::new())),
        },
        _ => None,
    };

    let mut walker = Walker {
        options,
        transform,
        stats: RunStats::new(),
        archive,
        visited: VisitedDirectories::new(),
    };

    let outcome = walker.run(paths);
    let finished = walker.finish_archive();
    let mut stats = walker.stats;
    stats.elapsed = started.elapsed();

    match (outcome, finished) {
        (Ok(()), Ok(())) => Ok(stats),
        (Err(error), _) => Err(ProcessError::new(error, stats)),
        (Ok(()), Err(error)) => {
            stats.exceptions += 1;
            Err(ProcessError::new(error, stats))
        }
    }
}

struct Walker<'a, T: ?Sized> {
    options: &'a WalkerOptions,
    transform: &'a mut T,
    stats: RunStats,
    archive: Option<BackupArchive>,
    visited: VisitedDirectories,
}

impl<T> Walker<'_, T>
where
    T: FileTransform + ?Sized,
{
    fn run(&mut self, paths: &[PathBuf]) -> Result<(), EngineError> {
        if self.options.is_recursive() {
            for path in paths {
                self.process_folder(path)?;
            }
        } else if !self.options.match_patterns().is_empty() {
            if let Some(path) = paths.first() {
                self.process_folder(path)?;
            }
        } else {
            for path in paths {
                self.process_operand(path)?;
            }
        }
        Ok(())
    }

    /// Lists `dir`, processes its candidate files, then recurses when enabled.
    fn process_folder(&mut self, dir: &Path) -> Result<(), EngineError> {
        match self.visited.first_visit(dir) {
            Ok(true) => {}
            Ok(false) => return Ok(()),
            Err(error) => return self.recover(error.into()),
        }

        self.stats.dirs_processed += 1;
        let listing = match DirectoryListing::read(dir) {
            Ok(listing) => listing,
            Err(error) => return self.recover(error.into()),
        };

        let mut subdirectories = Vec::new();
        for entry in listing.entries() {
            let name = entry.file_name();
            if self.options.ignore_patterns().matches_name(name) {
                match entry.kind() {
                    EntryKind::File => self.stats.files_ignored += 1,
                    EntryKind::Directory => self.stats.dirs_ignored += 1,
                    EntryKind::Other => {}
                }
                continue;
            }

            match entry.kind() {
                EntryKind::File => {
                    if is_staging_path(Path::new(name))
                        || !self.options.match_patterns().matches_name(name)
                    {
                        self.stats.files_ignored += 1;
                        continue;
                    }
                    self.process_file(entry.full_path())?;
                }
                EntryKind::Directory if self.options.is_recursive() => {
                    subdirectories.push(entry.full_path().to_path_buf());
                }
                EntryKind::Directory | EntryKind::Other => {}
            }
        }

        for subdirectory in subdirectories {
            self.process_folder(&subdirectory)?;
        }
        Ok(())
    }

    /// Handles a file named directly on the command line.
    fn process_operand(&mut self, path: &Path) -> Result<(), EngineError> {
        if self.options.ignore_patterns().matches(path) || is_staging_path(path) {
            self.stats.files_ignored += 1;
            return Ok(());
        }
        match EntryKind::of_root(path) {
            Ok(EntryKind::File) => self.process_file(path),
            Ok(_) => self.recover(EngineError::invalid_path(
                path.to_path_buf(),
                "not a regular file",
            )),
            Err(error) => self.recover(error.into()),
        }
    }

    fn process_file(&mut self, source: &Path) -> Result<(), EngineError> {
        match self.apply(source) {
            Ok(()) => Ok(()),
            Err(error) => self.recover(error),
        }
    }

    /// The per-file protocol: stage, transform, then commit or discard.
    fn apply(&mut self, source: &Path) -> Result<(), EngineError> {
        let options = self.options;
        let target = options.target_path().unwrap_or(source);
        let staging = StagingGuard::new(source)?;

        self.stats.files_processed += 1;
        logging::trace_visit!("{}", source.display());
        let request = TransformRequest {
            source,
            staging: staging.staging_path(),
            options,
        };
        let outcome = self
            .transform
            .apply(&request, &mut self.stats)
            .map_err(|error| EngineError::transform(source.to_path_buf(), error))?;

        if !outcome.is_changed() {
            return staging.discard();
        }
        logging::trace_name!("{}", source.display());
        if options.is_dry_run() {
            return staging.discard();
        }

        match options.backup_mode_value() {
            BackupMode::None => {}
            BackupMode::File => {
                if let Some(backup) = backup_to_file(target)? {
                    logging::trace_backup!("    Backup: {}", backup.display());
                }
            }
            BackupMode::Zip => {
                if let Some(archive) = self.archive.as_mut()
                    && let Some(entry) = archive.add(target)?
                {
                    logging::trace_backup!("    Archived as {entry}");
                }
            }
        }

        staging.commit(target)?;
        self.stats.files_modified += 1;
        Ok(())
    }

    /// Counts a failure and decides whether the walk continues.
    fn recover(&mut self, error: EngineError) -> Result<(), EngineError> {
        self.stats.exceptions += 1;
        if self.options.ignores_errors() {
            logging::trace_error!("Skipping due to error: {error}");
            Ok(())
        } else {
            Err(error)
        }
    }

    fn finish_archive(&mut self) -> Result<(), EngineError> {
        let Some(archive) = self.archive.as_mut() else {
            return Ok(());
        };
        if let Some(path) = archive.finish()? {
            self.stats.zip_archive = Some(path);
        }
        Ok(())
    }
}
