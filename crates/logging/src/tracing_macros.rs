//! crates/logging/src/tracing_macros.rs
//! Convenience macros that emit tracing events under the `tabfix::*` targets.
//!
//! Callers must depend on `tracing` directly; the macros expand to
//! `::tracing::*` invocations.

/// Report a file whose content changed.
///
/// # Example
/// ```ignore
/// trace_name!("{}", path.display());
/// ```
#[macro_export]
macro_rules! trace_name {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "tabfix::name", $($arg)*);
    };
}

/// Report a file handed to the transform.
#[macro_export]
macro_rules! trace_visit {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "tabfix::visit", $($arg)*);
    };
}

/// Report a file skipped because it is not text.
#[macro_export]
macro_rules! trace_skip {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "tabfix::skip", $($arg)*);
    };
}

/// Report per-file line statistics.
#[macro_export]
macro_rules! trace_lines {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "tabfix::lines", $($arg)*);
    };
}

/// Report a rewritten line. Only visible at the highest verbosity.
#[macro_export]
macro_rules! trace_diff {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "tabfix::diff", $($arg)*);
    };
}

/// Report a backup file or archive entry.
///
/// # Example
/// ```ignore
/// trace_backup!("archived {}", entry);
/// ```
#[macro_export]
macro_rules! trace_backup {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "tabfix::backup", $($arg)*);
    };
}

/// Report a failure.
#[macro_export]
macro_rules! trace_error {
    ($($arg:tt)*) => {
        ::tracing::error!(target: "tabfix::error", $($arg)*);
    };
}
