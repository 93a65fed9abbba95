//! Constants shared across the CLI front-end.

/// Program name used in usage text and diagnostics.
pub(crate) const PROGRAM_NAME: &str = "tabfix";

/// Output tab width when `--tab-size` is absent.
pub(crate) const DEFAULT_TAB_SIZE: usize = normalize::DEFAULT_TAB_WIDTH;

/// Verbosity before `-v` and `-q` are applied.
pub(crate) const BASE_VERBOSITY: u8 = logging::DEFAULT_VERBOSITY;

/// Highest verbosity `-v` can reach.
pub(crate) const MAX_VERBOSITY: u8 = logging::MAX_VERBOSITY;

/// Directory processed when patterns are given without a PATH.
pub(crate) const DEFAULT_PATH: &str = ".";

/// Usage line shown in help output.
pub(crate) const USAGE: &str = "tabfix [OPTIONS] [PATH]...";

/// Text printed after the option list in help output.
pub(crate) const AFTER_HELP: &str = "\
Examples:
  tabfix -m *.py -r src          convert tabs to 4 spaces in every Python file below src
  tabfix -t -s 8 main.c          indent main.c with tabs, 8 columns per tab
  tabfix --line-separator unix -m *.txt -b docs
                                 force LF endings in docs/*.txt, keeping *.bak copies";
