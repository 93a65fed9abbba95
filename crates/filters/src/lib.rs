#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` decides which directory entries `tabfix` looks at. The match
//! list selects candidate files and the exclude list removes files and
//! directories from the walk. Both are lists of shell-style patterns tested
//! against the final component of a path.
//!
//! # Design
//!
//! - [`PatternSet`] compiles a list of patterns into a single
//!   [`globset::GlobSet`] and remembers the source text for diagnostics.
//! - [`split_pattern_list`] turns repeated, comma-separated command-line
//!   arguments into a de-duplicated pattern list.
//!
//! # Invariants
//!
//! - Matching is case-sensitive and only sees the final path component.
//! - An empty [`PatternSet`] matches nothing. Callers that want "everything"
//!   must say `*`.
//!
//! # Errors
//!
//! [`PatternSet::from_patterns`] reports [`FilterError`] when a pattern is
//! not a valid glob, for example an unterminated `[`.
//!
//! # Examples
//!
//! ```
//! use filters::{PatternSet, split_pattern_list};
//!
//! let exclude = PatternSet::from_patterns(split_pattern_list(["*.html,*.js"])).unwrap();
//! assert!(exclude.matches("site/index.html"));
//! assert!(!exclude.matches("site/style.css"));
//! ```

mod error;
mod set;

pub use error::FilterError;
pub use set::{PatternSet, split_pattern_list};
