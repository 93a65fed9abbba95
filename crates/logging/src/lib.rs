#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` maps the single `-v`/`-q` verbosity number of the `tabfix`
//! command line onto per-category diagnostic flags and collects the messages
//! emitted through [`tracing`] into a per-thread buffer that the front end
//! drains and prints.
//!
//! # Design
//!
//! - [`InfoFlag`] names the diagnostic categories (changed names, visited
//!   files, skips, line statistics, line diffs, backups, errors).
//! - [`VerbosityConfig::from_verbose_level`] converts a level in `0..=5`
//!   into [`InfoLevels`].
//! - [`DiagnosticLayer`] is a `tracing-subscriber` layer. Events targeting
//!   `tabfix::<flag>` are recorded as [`DiagnosticEvent`]s when the calling
//!   thread's configuration enables the flag.
//! - The `trace_*` macros emit events with the right target so call sites
//!   never spell targets by hand.
//! - [`render_line`] and [`render_hex`] make whitespace and control bytes
//!   visible in diagnostics.
//!
//! # Invariants
//!
//! - Configuration and event buffers are thread-local. A run that calls
//!   [`init_tracing`] and then processes files on the same thread sees only
//!   its own events.
//! - [`init_tracing`] never panics when a global subscriber already exists.
//!
//! # Examples
//!
//! ```
//! use logging::{InfoFlag, VerbosityConfig, drain_events, emit_info, info_gte, init};
//!
//! init(VerbosityConfig::from_verbose_level(4));
//! assert!(info_gte(InfoFlag::Visit, 1));
//! assert!(!info_gte(InfoFlag::Diff, 1));
//!
//! emit_info(InfoFlag::Visit, 1, "notes.txt".to_string());
//! assert_eq!(drain_events().len(), 1);
//! ```

mod config;
mod display;
mod levels;
mod thread_local;
mod tracing_bridge;
mod tracing_macros;

pub use config::{DEFAULT_VERBOSITY, MAX_VERBOSITY, VerbosityConfig};
pub use display::{render_hex, render_line};
pub use levels::{InfoFlag, InfoLevels};
pub use thread_local::{DiagnosticEvent, drain_events, emit_info, info_gte, init};
pub use tracing_bridge::{DiagnosticLayer, TARGET_PREFIX, init_tracing};
