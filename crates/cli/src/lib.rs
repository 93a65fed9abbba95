#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` is the command-line front-end of `tabfix`. It parses the switches,
//! turns them into one [`engine::WalkerOptions`] and one
//! [`normalize::NormalizeOptions`] value, validates them against the given
//! paths, runs the walk with [`normalize::WhitespaceTransform`], and prints
//! the collected diagnostics and the end-of-run summary.
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for
//! standard output and error and returns the process exit code, so the binary
//! stays a two-line `main` and tests can drive the whole tool in-process.
//! Argument parsing uses a [`clap`] builder definition with the built-in help
//! and version flags replaced by plain switches.
//!
//! Diagnostics travel through `tracing`: the engine and the normaliser emit
//! events under the `tabfix::*` targets, the `logging` layer keeps the ones the
//! chosen verbosity enables, and [`run`] prints them after every file.
//! Error events go to standard error, everything else to standard output.
//!
//! # Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | [`SUCCESS_EXIT_CODE`] | every candidate was processed |
//! | [`USAGE_EXIT_CODE`] | bad switches or conflicting options |
//! | [`engine::INVALID_PATH_EXIT_CODE`] | an input path does not exist or has the wrong kind |
//! | [`engine::IO_FAILURE_EXIT_CODE`] | the run stopped at an I/O failure |
//! | [`IGNORED_ERRORS_EXIT_CODE`] | the run finished but `--ignore-errors` skipped failures |
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(["tabfix", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(String::from_utf8(stdout).unwrap().starts_with("tabfix "));
//! assert!(stderr.is_empty());
//! ```

mod arguments;
mod defaults;
mod diagnostics;
mod summary;

use std::ffi::OsString;
use std::io::{self, Write};

use engine::{BackupMode, ConfigError, RunStats, WalkerOptions};
use filters::PatternSet;
use logging::VerbosityConfig;
use normalize::{IndentStyle, NormalizeOptions, WhitespaceTransform};

use arguments::{ParsedArgs, clap_command, parse_args, usage_message};
use defaults::PROGRAM_NAME;
use diagnostics::FlushingTransform;
use summary::write_summary;

/// Exit code of a run without failures.
pub const SUCCESS_EXIT_CODE: i32 = 0;

/// Exit code for invalid switches and option conflicts.
pub const USAGE_EXIT_CODE: i32 = 1;

/// Exit code of a run that skipped failed files because of `--ignore-errors`.
pub const IGNORED_ERRORS_EXIT_CODE: i32 = 4;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The first argument is the program name. The return value is the process
/// exit code.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => execute(&parsed, stdout, stderr),
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {}", usage_message(&error));
            USAGE_EXIT_CODE
        }
    }
}

fn execute<Out, Err>(parsed: &ParsedArgs, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    if parsed.show_help {
        let help = clap_command().render_help();
        return match write!(stdout, "{help}") {
            Ok(()) => SUCCESS_EXIT_CODE,
            Err(_) => engine::IO_FAILURE_EXIT_CODE,
        };
    }

    if parsed.show_version {
        return match writeln!(stdout, "{PROGRAM_NAME} {}", env!("CARGO_PKG_VERSION")) {
            Ok(()) => SUCCESS_EXIT_CODE,
            Err(_) => engine::IO_FAILURE_EXIT_CODE,
        };
    }

    let options = match walker_options(parsed) {
        Ok(options) => options,
        Err(message) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {message}");
            return USAGE_EXIT_CODE;
        }
    };

    if let Err(error) = engine::validate(&parsed.paths, &options) {
        let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
        return config_exit_code(&error);
    }

    let verbosity = VerbosityConfig::from_verbose_level(parsed.verbosity);
    logging::init_tracing(verbosity.clone());
    let _ = logging::drain_events();

    let whitespace = WhitespaceTransform::new(normalize_options(parsed));
    let mut transform = FlushingTransform::new(whitespace, stdout, stderr);
    let result = engine::process(&parsed.paths, &options, &mut transform);
    if !transform.finish() {
        return engine::IO_FAILURE_EXIT_CODE;
    }

    let (stats, status) = match result {
        Ok(stats) => {
            let status = if stats.exceptions > 0 {
                IGNORED_ERRORS_EXIT_CODE
            } else {
                SUCCESS_EXIT_CODE
            };
            (stats, status)
        }
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            let status = error.exit_code();
            let (_, stats) = error.into_parts();
            (stats, status)
        }
    };

    match report(stdout, &stats, parsed.dry_run, &verbosity) {
        Ok(()) => status,
        Err(_) => engine::IO_FAILURE_EXIT_CODE,
    }
}

fn walker_options(parsed: &ParsedArgs) -> Result<WalkerOptions, filters::FilterError> {
    let backup_mode = if parsed.zip_backup {
        BackupMode::Zip
    } else if parsed.backup {
        BackupMode::File
    } else {
        BackupMode::None
    };

    Ok(WalkerOptions::new()
        .backup_mode(backup_mode)
        .dry_run(parsed.dry_run)
        .recursive(parsed.recursive)
        .ignore_errors(parsed.ignore_errors)
        .verbosity(parsed.verbosity)
        .with_match_patterns(PatternSet::from_patterns(&parsed.match_patterns)?)
        .with_ignore_patterns(PatternSet::from_patterns(&parsed.exclude_patterns)?)
        .with_target_path(parsed.target.as_deref()))
}

fn normalize_options(parsed: &ParsedArgs) -> NormalizeOptions {
    let style = if parsed.tabbify {
        IndentStyle::Tabs
    } else {
        IndentStyle::Spaces
    };
    NormalizeOptions::new()
        .tab_width(parsed.tab_size)
        .input_tab_width(parsed.input_tab_size)
        .indent_style(style)
        .line_separator(parsed.line_separator)
}

fn config_exit_code(error: &ConfigError) -> i32 {
    if error.is_invalid_path() {
        engine::INVALID_PATH_EXIT_CODE
    } else {
        USAGE_EXIT_CODE
    }
}

fn report<Out: Write>(
    stdout: &mut Out,
    stats: &RunStats,
    dry_run: bool,
    verbosity: &VerbosityConfig,
) -> io::Result<()> {
    write_summary(stdout, stats, dry_run, verbosity)?;
    stdout.flush()
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}

#[cfg(test)]
mod tests;
