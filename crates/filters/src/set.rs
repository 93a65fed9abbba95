use std::ffi::OsStr;
use std::path::Path;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::FilterError;

/// Compiled collection of shell-style patterns matched against file names.
///
/// Only the final component of a path is considered, so `*.txt` matches
/// `notes.txt` and `docs/notes.txt` alike while `docs/*.txt` matches
/// nothing. Matching is case-sensitive; `*`, `?`, `[...]` and `[!...]`
/// behave as in a POSIX shell and a backslash is an ordinary character.
///
/// An empty set matches nothing.
///
/// # Examples
///
/// ```
/// use filters::PatternSet;
///
/// let set = PatternSet::from_patterns(["*.c", "*.h"]).unwrap();
/// assert!(set.matches("src/main.c"));
/// assert!(!set.matches("Makefile"));
/// assert!(!PatternSet::default().matches("anything"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PatternSet {
    patterns: Vec<String>,
    globs: GlobSet,
}

impl PatternSet {
    /// Compiles `patterns` in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] for the first pattern that is not a valid glob.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        let mut sources = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .backslash_escape(false)
                .case_insensitive(false)
                .build()
                .map_err(|error| FilterError::new(pattern.to_string(), error))?;
            builder.add(glob);
            sources.push(pattern.to_string());
        }

        let globs = builder
            .build()
            .map_err(|error| FilterError::new(sources.join(","), error))?;

        Ok(Self {
            patterns: sources,
            globs,
        })
    }

    /// Returns `true` when no patterns were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns the source patterns in the order they were supplied.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Returns `true` if the final component of `path` matches any pattern.
    #[must_use]
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        let name = path.file_name().unwrap_or(path.as_os_str());
        self.matches_name(name)
    }

    /// Returns `true` if `name`, taken as a single path component, matches any
    /// pattern.
    #[must_use]
    pub fn matches_name(&self, name: &OsStr) -> bool {
        !self.patterns.is_empty() && self.globs.is_match(Path::new(name))
    }
}

/// Splits command-line pattern arguments on commas.
///
/// Each argument may hold several comma-separated patterns. Empty pieces are
/// dropped and duplicates keep their first position.
///
/// ```
/// use filters::split_pattern_list;
///
/// let patterns = split_pattern_list(["*.c,*.h", "*.c", "Makefile,"]);
/// assert_eq!(patterns, ["*.c", "*.h", "Makefile"]);
/// ```
#[must_use]
pub fn split_pattern_list<I, S>(arguments: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut patterns: Vec<String> = Vec::new();
    for argument in arguments {
        for piece in argument.as_ref().split(',') {
            let piece = piece.trim();
            if !piece.is_empty() && !patterns.iter().any(|existing| existing == piece) {
                patterns.push(piece.to_string());
            }
        }
    }
    patterns
}
