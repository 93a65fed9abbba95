#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` is the walker behind `tabfix`. It finds candidate files (one file
//! at a time, one directory filtered by patterns, or a whole tree), hands
//! each one to a [`FileTransform`], and then either commits the transform's
//! output over the original or throws it away. Backups, dry runs, error
//! tolerance, and the run's [`RunStats`] are handled here so transforms stay
//! pure byte rewrites.
//!
//! # Design
//!
//! - [`WalkerOptions`] is built once with chained setters and shared
//!   immutably by the run.
//! - [`validate`] rejects conflicting options and bad inputs before anything
//!   is touched.
//! - [`process`] drives the traversal. Every candidate gets a staging file
//!   `<source>.$temp` that the transform writes to. A changed result is
//!   committed by rename, after the old target was preserved as
//!   `<target>.bak` or added to one `backup_<YYYYMMDD-HHMMSS>.zip` archive.
//!   Unchanged results, dry runs, and failures remove the staging file.
//! - [`is_text_file`] is the NUL-byte check transforms use to skip binaries.
//!
//! # Invariants
//!
//! - A target is only replaced when the transform reported
//!   [`TransformOutcome::Changed`] and the run is not a dry run.
//! - No staging file survives a call to [`process`].
//! - The zip archive is created on first use and finished exactly once.
//! - Counters are owned by a single run and returned to the caller even when
//!   the run fails.
//!
//! # Errors
//!
//! [`validate`] reports [`ConfigError`]. [`process`] reports
//! [`ProcessError`], which wraps the [`EngineError`] that stopped the run
//! together with the statistics gathered until then.
//!
//! # Examples
//!
//! Upper-case every `*.txt` file in a directory:
//!
//! ```
//! use engine::{RunStats, TransformOutcome, TransformRequest, WalkerOptions, process};
//! use filters::PatternSet;
//! use std::{fs, io};
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! fs::write(temp.path().join("a.txt"), "shout\n")?;
//! fs::write(temp.path().join("B.TXT"), "LOUD\n")?;
//!
//! let options = WalkerOptions::new().with_match_patterns(PatternSet::from_patterns(["*.txt"])?);
//! let mut upper = |request: &TransformRequest<'_>, _stats: &mut RunStats| -> io::Result<TransformOutcome> {
//!     let text = fs::read_to_string(request.source)?;
//!     let shouted = text.to_uppercase();
//!     if shouted == text {
//!         return Ok(TransformOutcome::Unchanged);
//!     }
//!     fs::write(request.staging, &shouted)?;
//!     Ok(TransformOutcome::Changed { bytes_written: shouted.len() as u64, lines_changed: 1 })
//! };
//!
//! let paths = [temp.path().to_path_buf()];
//! engine::validate(&paths, &options)?;
//! let stats = process(&paths, &options, &mut upper)?;
//! assert_eq!(stats.files_processed, 1);
//! assert_eq!(stats.files_modified, 1);
//! assert_eq!(stats.files_ignored, 1);
//! assert_eq!(fs::read_to_string(temp.path().join("a.txt"))?, "SHOUT\n");
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod backup;
mod config;
mod error;
mod options;
mod process;
mod staging;
mod stats;
mod text;
mod transform;

pub use backup::{BACKUP_SUFFIX, backup_path};
pub use config::{ConfigError, validate};
pub use error::{
    EngineError, EngineErrorKind, INVALID_PATH_EXIT_CODE, IO_FAILURE_EXIT_CODE, ProcessError,
};
pub use options::{BackupMode, WalkerOptions};
pub use process::process;
pub use staging::{TEMP_SUFFIX, staging_path_for};
pub use stats::RunStats;
pub use text::{TEXT_SNIFF_LEN, is_text_file};
pub use transform::{FileTransform, TransformOutcome, TransformRequest};
