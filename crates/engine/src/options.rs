//! Walker configuration.

use std::path::{Path, PathBuf};

use filters::PatternSet;
use logging::DEFAULT_VERBOSITY;

/// How the previous content of a rewritten file is preserved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackupMode {
    /// Overwrite without keeping a copy.
    #[default]
    None,
    /// Rename the old file to `<name>.bak` next to it.
    File,
    /// Add the old content to a single zip archive for the whole run.
    Zip,
}

/// Configuration for one [`process`](crate::process) run.
///
/// Built once at the boundary with the chained setters and then passed by
/// shared reference.
///
/// ```
/// use engine::{BackupMode, WalkerOptions};
/// use filters::PatternSet;
///
/// let options = WalkerOptions::new()
///     .recursive(true)
///     .with_match_patterns(PatternSet::from_patterns(["*.rs"]).unwrap())
///     .backup_mode(BackupMode::File);
/// assert!(options.backup());
/// assert!(!options.zip_backup());
/// ```
#[derive(Clone, Debug)]
pub struct WalkerOptions {
    backup_mode: BackupMode,
    dry_run: bool,
    recursive: bool,
    match_patterns: PatternSet,
    ignore_patterns: PatternSet,
    target_path: Option<PathBuf>,
    ignore_errors: bool,
    verbosity: u8,
}

impl Default for WalkerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl WalkerOptions {
    /// Creates options for a plain, non-recursive run without backups.
    #[must_use]
    pub fn new() -> Self {
        Self {
            backup_mode: BackupMode::None,
            dry_run: false,
            recursive: false,
            match_patterns: PatternSet::default(),
            ignore_patterns: PatternSet::default(),
            target_path: None,
            ignore_errors: false,
            verbosity: DEFAULT_VERBOSITY,
        }
    }

    /// Selects how replaced files are preserved.
    #[must_use]
    #[doc(alias = "--backup")]
    #[doc(alias = "--zip-backup")]
    pub const fn backup_mode(mut self, mode: BackupMode) -> Self {
        self.backup_mode = mode;
        self
    }

    /// Computes and reports changes without touching any target.
    #[must_use]
    #[doc(alias = "--dry-run")]
    #[doc(alias = "-n")]
    pub const fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Descends into subdirectories.
    #[must_use]
    #[doc(alias = "--recursive")]
    #[doc(alias = "-r")]
    pub const fn recursive(mut self, enabled: bool) -> Self {
        self.recursive = enabled;
        self
    }

    /// Keeps going after a failing file or directory.
    #[must_use]
    #[doc(alias = "--ignore-errors")]
    pub const fn ignore_errors(mut self, enabled: bool) -> Self {
        self.ignore_errors = enabled;
        self
    }

    /// Records the verbosity level (0-5) the run was configured with.
    #[must_use]
    #[doc(alias = "--verbose")]
    pub const fn verbosity(mut self, level: u8) -> Self {
        self.verbosity = level;
        self
    }

    /// Replaces the patterns that select candidate files.
    #[must_use]
    #[doc(alias = "--match")]
    pub fn with_match_patterns(mut self, patterns: PatternSet) -> Self {
        self.match_patterns = patterns;
        self
    }

    /// Replaces the patterns that exclude files and directories.
    #[must_use]
    #[doc(alias = "--exclude")]
    pub fn with_ignore_patterns(mut self, patterns: PatternSet) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Writes the result of the single input file to `path` instead.
    #[must_use]
    #[doc(alias = "--target")]
    pub fn with_target_path<P: Into<PathBuf>>(mut self, path: Option<P>) -> Self {
        self.target_path = path.map(Into::into);
        self
    }

    /// Returns the configured backup mode.
    #[must_use]
    pub const fn backup_mode_value(&self) -> BackupMode {
        self.backup_mode
    }

    /// Reports whether replaced files are preserved in any form.
    #[must_use]
    pub const fn backup(&self) -> bool {
        !matches!(self.backup_mode, BackupMode::None)
    }

    /// Reports whether replaced files go into a zip archive.
    #[must_use]
    pub const fn zip_backup(&self) -> bool {
        matches!(self.backup_mode, BackupMode::Zip)
    }

    /// Reports whether the run is a dry run.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Reports whether subdirectories are visited.
    #[must_use]
    pub const fn is_recursive(&self) -> bool {
        self.recursive
    }

    /// Reports whether failures are logged and skipped.
    #[must_use]
    pub const fn ignores_errors(&self) -> bool {
        self.ignore_errors
    }

    /// Returns the configured verbosity level.
    #[must_use]
    pub const fn verbosity_level(&self) -> u8 {
        self.verbosity
    }

    /// Returns the patterns selecting candidate files.
    #[must_use]
    pub const fn match_patterns(&self) -> &PatternSet {
        &self.match_patterns
    }

    /// Returns the patterns excluding files and directories.
    #[must_use]
    pub const fn ignore_patterns(&self) -> &PatternSet {
        &self.ignore_patterns
    }

    /// Returns the redirect target, if any.
    #[must_use]
    pub fn target_path(&self) -> Option<&Path> {
        self.target_path.as_deref()
    }
}
