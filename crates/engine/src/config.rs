//! Boundary validation of inputs against [`WalkerOptions`].

use std::path::PathBuf;

use thiserror::Error;
use walk::{EntryKind, WalkError};

use crate::options::WalkerOptions;
use crate::staging::is_staging_path;

/// A combination of inputs and options that cannot be processed.
///
/// Every variant is detected before any file is touched.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No input path was given.
    #[error("missing required PATH")]
    MissingPath,
    /// A redirect target was combined with more than one input.
    #[error("a target path requires exactly one source file")]
    TargetNeedsSingleInput,
    /// Recursion was requested without match patterns.
    #[error("recursive mode requires a match pattern")]
    RecursiveWithoutMatch,
    /// A redirect target was combined with match patterns.
    #[error("match patterns and a target path are mutually exclusive")]
    MatchWithTarget,
    /// A redirect target was combined with exclude patterns.
    #[error("exclude patterns and a target path are mutually exclusive")]
    IgnoreWithTarget,
    /// An input path does not exist.
    #[error("input not found: '{}'", .0.display())]
    InputNotFound(PathBuf),
    /// An input path exists but could not be inspected.
    #[error(transparent)]
    Inspect(WalkError),
    /// A directory was given without match patterns.
    #[error("must specify a match pattern if source is a folder: '{}'", .0.display())]
    DirectoryWithoutMatch(PathBuf),
    /// A file was given together with match patterns.
    #[error("must not specify a match pattern if source is a file: '{}'", .0.display())]
    FileWithMatch(PathBuf),
    /// An input is neither a file nor a directory.
    #[error("input is neither a file nor a folder: '{}'", .0.display())]
    UnsupportedInput(PathBuf),
    /// Flat mode was given more than one directory.
    #[error("match patterns without recursion require exactly one source folder")]
    FlatNeedsSingleDirectory,
    /// Zip backups were requested for something other than one directory.
    #[error("zip backup requires exactly one source folder")]
    ZipNeedsSingleDirectory,
    /// An input or the target uses the reserved staging suffix.
    #[error("refusing to process staging file '{}'", .0.display())]
    StagingPath(PathBuf),
}

impl ConfigError {
    /// Reports whether the error is about an input that does not exist or
    /// cannot be inspected, as opposed to conflicting options.
    #[must_use]
    pub const fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InputNotFound(_) | Self::Inspect(_))
    }
}

/// Checks `paths` and `options` for conflicts before a run.
///
/// # Errors
///
/// Returns the first [`ConfigError`] found, checking option conflicts that
/// need no filesystem access first.
pub fn validate(paths: &[PathBuf], options: &WalkerOptions) -> Result<(), ConfigError> {
    let has_match = !options.match_patterns().is_empty();

    if paths.is_empty() {
        return Err(ConfigError::MissingPath);
    }
    if options.target_path().is_some() && paths.len() != 1 {
        return Err(ConfigError::TargetNeedsSingleInput);
    }
    if options.is_recursive() && !has_match {
        return Err(ConfigError::RecursiveWithoutMatch);
    }
    if options.target_path().is_some() && has_match {
        return Err(ConfigError::MatchWithTarget);
    }
    if options.target_path().is_some() && !options.ignore_patterns().is_empty() {
        return Err(ConfigError::IgnoreWithTarget);
    }
    if let Some(target) = options.target_path()
        && is_staging_path(target)
    {
        return Err(ConfigError::StagingPath(target.to_path_buf()));
    }

    let mut kinds = Vec::with_capacity(paths.len());
    for path in paths {
        let kind = EntryKind::of_root(path).map_err(|error| {
            if error.io_error().kind() == std::io::ErrorKind::NotFound {
                ConfigError::InputNotFound(path.clone())
            } else {
                ConfigError::Inspect(error)
            }
        })?;
        match kind {
            EntryKind::Directory if !has_match => {
                return Err(ConfigError::DirectoryWithoutMatch(path.clone()));
            }
            EntryKind::File if has_match => {
                return Err(ConfigError::FileWithMatch(path.clone()));
            }
            EntryKind::File if is_staging_path(path) => {
                return Err(ConfigError::StagingPath(path.clone()));
            }
            EntryKind::Other => return Err(ConfigError::UnsupportedInput(path.clone())),
            EntryKind::Directory | EntryKind::File => {}
        }
        kinds.push(kind);
    }

    if has_match && !options.is_recursive() && paths.len() != 1 {
        return Err(ConfigError::FlatNeedsSingleDirectory);
    }
    if options.zip_backup() && (kinds.len() != 1 || kinds[0] != EntryKind::Directory) {
        return Err(ConfigError::ZipNeedsSingleDirectory);
    }

    Ok(())
}
