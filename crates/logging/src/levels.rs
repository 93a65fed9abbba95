//! crates/logging/src/levels.rs
//! Flag enums and level structures for diagnostic verbosity.

/// Info flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InfoFlag {
    /// Backup files and archive entries.
    Backup,
    /// Per-line before/after renderings of rewritten lines.
    Diff,
    /// Failures reported while processing continues or aborts.
    Error,
    /// Per-file line counts and line-separator changes.
    Lines,
    /// Names of files whose content changed.
    Name,
    /// Files skipped because they are not text.
    Skip,
    /// Every file handed to the transform.
    Visit,
}

impl InfoFlag {
    /// All flags in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Backup,
        Self::Diff,
        Self::Error,
        Self::Lines,
        Self::Name,
        Self::Skip,
        Self::Visit,
    ];

    /// Lower-case flag name as used in tracing targets.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Backup => "backup",
            Self::Diff => "diff",
            Self::Error => "error",
            Self::Lines => "lines",
            Self::Name => "name",
            Self::Skip => "skip",
            Self::Visit => "visit",
        }
    }
}

/// Info verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct InfoLevels {
    /// Backup operations level.
    pub backup: u8,
    /// Line diff level.
    pub diff: u8,
    /// Error reporting level.
    pub error: u8,
    /// Line statistics level.
    pub lines: u8,
    /// Changed file names level.
    pub name: u8,
    /// Skipped files level.
    pub skip: u8,
    /// Visited files level.
    pub visit: u8,
}

impl InfoLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: InfoFlag) -> u8 {
        match flag {
            InfoFlag::Backup => self.backup,
            InfoFlag::Diff => self.diff,
            InfoFlag::Error => self.error,
            InfoFlag::Lines => self.lines,
            InfoFlag::Name => self.name,
            InfoFlag::Skip => self.skip,
            InfoFlag::Visit => self.visit,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: InfoFlag, level: u8) {
        match flag {
            InfoFlag::Backup => self.backup = level,
            InfoFlag::Diff => self.diff = level,
            InfoFlag::Error => self.error = level,
            InfoFlag::Lines => self.lines = level,
            InfoFlag::Name => self.name = level,
            InfoFlag::Skip => self.skip = level,
            InfoFlag::Visit => self.visit = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        for flag in InfoFlag::ALL {
            self.set(flag, level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_levels_are_zero() {
        let levels = InfoLevels::default();
        for flag in InfoFlag::ALL {
            assert_eq!(levels.get(flag), 0, "{flag:?}");
        }
    }

    #[test]
    fn set_then_get_round_trips_each_flag() {
        let mut levels = InfoLevels::default();
        for (index, flag) in InfoFlag::ALL.into_iter().enumerate() {
            levels.set(flag, index as u8 + 1);
        }
        for (index, flag) in InfoFlag::ALL.into_iter().enumerate() {
            assert_eq!(levels.get(flag), index as u8 + 1);
        }
    }

    #[test]
    fn set_all_overwrites_every_flag() {
        let mut levels = InfoLevels::default();
        levels.set(InfoFlag::Diff, 4);
        levels.set_all(2);
        assert!(InfoFlag::ALL.iter().all(|flag| levels.get(*flag) == 2));
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = InfoFlag::ALL.iter().map(|flag| flag.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), InfoFlag::ALL.len());
    }
}
