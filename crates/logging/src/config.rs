//! crates/logging/src/config.rs
//! Verbosity configuration derived from the command-line verbosity level.

use super::levels::{InfoFlag, InfoLevels};

/// Highest verbosity level understood by [`VerbosityConfig::from_verbose_level`].
pub const MAX_VERBOSITY: u8 = 5;

/// Verbosity used when neither `-v` nor `-q` is given.
pub const DEFAULT_VERBOSITY: u8 = 3;

/// Per-flag verbosity configuration.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct VerbosityConfig {
    /// Info flag levels.
    pub info: InfoLevels,
    level: u8,
}

impl VerbosityConfig {
    /// Create a configuration from a verbose level (0-5).
    ///
    /// | level | output |
    /// |-------|--------|
    /// | 0 | nothing |
    /// | 1 | errors |
    /// | 2 | errors and summary |
    /// | 3 | errors, changed files, and summary |
    /// | 4 | errors, visited files, and summary |
    /// | 5 | debug output including per-line diffs |
    ///
    /// Levels above 5 are clamped.
    pub fn from_verbose_level(level: u8) -> Self {
        let level = level.min(MAX_VERBOSITY);
        let mut config = Self {
            info: InfoLevels::default(),
            level,
        };

        if level >= 1 {
            config.info.error = 1;
        }
        // From level 4 on every visited file is named, changed or not.
        if level == 3 {
            config.info.name = 1;
        }
        if level >= 4 {
            config.info.visit = 1;
            config.info.skip = 1;
            config.info.lines = 1;
            config.info.backup = 1;
        }
        if level >= 5 {
            config.info.diff = 2;
            config.info.backup = 2;
        }

        config
    }

    /// Returns the verbose level this configuration was derived from.
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Whether the end-of-run summary should be printed.
    pub const fn shows_summary(&self) -> bool {
        self.level >= 2
    }

    /// Whether the summary names the backup archive.
    pub const fn shows_archive(&self) -> bool {
        self.level >= 3
    }

    /// Check if `flag` is enabled at `level` or above.
    pub fn enabled(&self, flag: InfoFlag, level: u8) -> bool {
        self.info.get(flag) >= level
    }
}
