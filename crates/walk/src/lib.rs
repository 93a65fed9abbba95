#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` gives the `tabfix` traversal a deterministic view of the
//! filesystem. Each directory is read once into a [`DirectoryListing`] whose
//! entries are sorted by name and already classified as files, directories,
//! or something else, so the caller can process files first and then recurse
//! into subdirectories in a stable order on every platform.
//!
//! # Design
//!
//! - [`DirectoryListing::read`] snapshots one directory. Recursion is left to
//!   the caller, which decides per directory whether to descend, skip, or
//!   stop after an error.
//! - [`EntryKind::of_root`] classifies paths named on the command line.
//! - [`VisitedDirectories`] remembers canonical paths so a symbolic link that
//!   points at an ancestor does not cause an endless walk.
//!
//! # Invariants
//!
//! - Listings are sorted by raw file name bytes.
//! - Symbolic links are followed for classification. Dangling links are
//!   [`EntryKind::Other`] and never fail a listing.
//!
//! # Errors
//!
//! [`WalkError`] carries the offending path and the underlying
//! [`std::io::Error`].
//!
//! # Examples
//!
//! ```
//! use walk::DirectoryListing;
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! fs::create_dir(temp.path().join("nested"))?;
//! fs::write(temp.path().join("b.txt"), b"b")?;
//! fs::write(temp.path().join("a.txt"), b"a")?;
//!
//! let listing = DirectoryListing::read(temp.path())?;
//! let files: Vec<_> = listing.files().map(|entry| entry.file_name().to_owned()).collect();
//! assert_eq!(files, ["a.txt", "b.txt"]);
//! assert_eq!(listing.directories().count(), 1);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod entry;
mod error;
mod listing;

pub use entry::{DirEntry, EntryKind};
pub use error::{WalkError, WalkErrorKind};
pub use listing::{DirectoryListing, VisitedDirectories};
