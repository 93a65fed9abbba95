//! Command-line parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};
use normalize::{LineSeparator, ParseLineSeparatorError, TabWidth};

use crate::defaults::{
    AFTER_HELP, BASE_VERBOSITY, DEFAULT_PATH, DEFAULT_TAB_SIZE, MAX_VERBOSITY, PROGRAM_NAME, USAGE,
};

/// Parsed command produced by [`parse_args`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ParsedArgs {
    pub(crate) show_help: bool,
    pub(crate) show_version: bool,
    pub(crate) tab_size: TabWidth,
    pub(crate) input_tab_size: Option<TabWidth>,
    pub(crate) tabbify: bool,
    pub(crate) line_separator: Option<LineSeparator>,
    pub(crate) match_patterns: Vec<String>,
    pub(crate) exclude_patterns: Vec<String>,
    pub(crate) recursive: bool,
    pub(crate) target: Option<PathBuf>,
    pub(crate) backup: bool,
    pub(crate) zip_backup: bool,
    pub(crate) dry_run: bool,
    pub(crate) ignore_errors: bool,
    pub(crate) verbosity: u8,
    pub(crate) paths: Vec<PathBuf>,
}

fn parse_tab_width(value: &str) -> Result<TabWidth, String> {
    let columns: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    TabWidth::try_from(columns).map_err(|error| error.to_string())
}

fn parse_line_separator(value: &str) -> Result<LineSeparator, ParseLineSeparatorError> {
    value.parse()
}

/// Builds the `clap` command used for parsing.
pub(crate) fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalise indentation, trailing whitespace, and line endings of text files.")
        .override_usage(USAGE)
        .after_help(AFTER_HELP)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Show the program's version number and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("tab-size")
                .long("tab-size")
                .short('s')
                .value_name("N")
                .help("Set target tab size (default: 4).")
                .value_parser(parse_tab_width),
        )
        .arg(
            Arg::new("input-tab-size")
                .long("input-tab-size")
                .value_name("N")
                .help("Assume tab size of input files to be N (default: target tab size).")
                .value_parser(parse_tab_width),
        )
        .arg(
            Arg::new("tabbify")
                .long("tabbify")
                .short('t')
                .help("Use tabs for indentation (default: use spaces).")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("line-separator")
                .long("line-separator")
                .value_name("MODE")
                .help(
                    "Line separator used for output files: Unix, Windows, Mac, LF, CRLF, CR \
                     (default: keep mode from input file).",
                )
                .value_parser(parse_line_separator),
        )
        .arg(
            Arg::new("match")
                .long("match")
                .short('m')
                .value_name("PATTERN")
                .help("Match this file name pattern (separate by ',' or repeat this option).")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("exclude")
                .long("exclude")
                .short('x')
                .value_name("PATTERN")
                .help("Skip this file or folder name pattern (separate by ',' or repeat this option).")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("recursive")
                .long("recursive")
                .short('r')
                .help("Visit sub directories.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("target")
                .long("target")
                .short('o')
                .value_name("FILENAME")
                .help("Name of output file.")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("backup")
                .long("backup")
                .short('b')
                .help("Create backup files (*.bak).")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("zip-backup")
                .long("zip-backup")
                .help("Add backups of modified files to a zip file (implies -b).")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .short('n')
                .help("Dry run: just print status messages; don't change anything.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ignore-errors")
                .long("ignore-errors")
                .help("Ignore errors during processing.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increment verbosity to 4 (use -vv for 5).")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Decrease verbosity to 2 (use -qq for 1, ...).")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .num_args(0..)
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Append),
        )
}

/// Computes the verbosity from the number of `-v` and `-q` flags.
pub(crate) fn verbosity_from_counts(verbose: u8, quiet: u8) -> u8 {
    let level = i16::from(BASE_VERBOSITY) + i16::from(verbose) - i16::from(quiet);
    u8::try_from(level.clamp(0, i16::from(MAX_VERBOSITY))).unwrap_or(0)
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let match_patterns = filters::split_pattern_list(
        matches
            .remove_many::<String>("match")
            .into_iter()
            .flatten(),
    );
    let exclude_patterns = filters::split_pattern_list(
        matches
            .remove_many::<String>("exclude")
            .into_iter()
            .flatten(),
    );
    let mut paths: Vec<PathBuf> = matches
        .remove_many::<PathBuf>("paths")
        .map(|values| values.collect())
        .unwrap_or_default();
    if paths.is_empty() && !match_patterns.is_empty() {
        paths.push(PathBuf::from(DEFAULT_PATH));
    }

    let default_tab_size = TabWidth::new(DEFAULT_TAB_SIZE).unwrap_or_default();
    let zip_backup = matches.get_flag("zip-backup");

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        tab_size: matches
            .remove_one::<TabWidth>("tab-size")
            .unwrap_or(default_tab_size),
        input_tab_size: matches.remove_one::<TabWidth>("input-tab-size"),
        tabbify: matches.get_flag("tabbify"),
        line_separator: matches.remove_one::<LineSeparator>("line-separator"),
        match_patterns,
        exclude_patterns,
        recursive: matches.get_flag("recursive"),
        target: matches.remove_one::<PathBuf>("target"),
        backup: matches.get_flag("backup") || zip_backup,
        zip_backup,
        dry_run: matches.get_flag("dry-run"),
        ignore_errors: matches.get_flag("ignore-errors"),
        verbosity: verbosity_from_counts(matches.get_count("verbose"), matches.get_count("quiet")),
        paths,
    })
}

/// Extracts the one-line message from a clap error.
pub(crate) fn usage_message(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
