use super::*;
use normalize::{LineSeparator, TabWidth};
use std::path::PathBuf;
use std::time::Duration;

fn parse(args: &[&str]) -> ParsedArgs {
    let mut argv = vec!["tabfix"];
    argv.extend_from_slice(args);
    parse_args(argv).expect("arguments parse")
}

fn parse_error(args: &[&str]) -> String {
    let mut argv = vec!["tabfix"];
    argv.extend_from_slice(args);
    let error = parse_args(argv).expect_err("arguments rejected");
    usage_message(&error)
}

fn summary(stats: &RunStats, dry_run: bool, verbosity: u8) -> String {
    let mut out = Vec::new();
    let verbosity = VerbosityConfig::from_verbose_level(verbosity);
    write_summary(&mut out, stats, dry_run, &verbosity).expect("write summary");
    String::from_utf8(out).expect("utf-8")
}

#[test]
fn defaults_without_switches() {
    let parsed = parse(&["file.txt"]);
    assert_eq!(parsed.tab_size.get(), 4);
    assert_eq!(parsed.input_tab_size, None);
    assert!(!parsed.tabbify);
    assert_eq!(parsed.line_separator, None);
    assert_eq!(parsed.verbosity, 3);
    assert!(!parsed.backup && !parsed.zip_backup && !parsed.dry_run);
    assert_eq!(parsed.paths, [PathBuf::from("file.txt")]);
}

#[test]
fn short_and_long_switches_are_recognised() {
    let parsed = parse(&[
        "-s", "8", "--input-tab-size", "2", "-t", "--line-separator", "windows", "-r", "-n",
        "--ignore-errors", "-m", "*.c", "src",
    ]);
    assert_eq!(parsed.tab_size, TabWidth::new(8).expect("width"));
    assert_eq!(parsed.input_tab_size, TabWidth::new(2));
    assert!(parsed.tabbify);
    assert_eq!(parsed.line_separator, Some(LineSeparator::CrLf));
    assert!(parsed.recursive && parsed.dry_run && parsed.ignore_errors);
    assert_eq!(parsed.match_patterns, ["*.c"]);
    assert_eq!(parsed.paths, [PathBuf::from("src")]);
}

#[test]
fn patterns_split_on_commas_and_dedupe() {
    let parsed = parse(&["-m", "*.py,*.txt", "--match", "*.py", "-x", "build, .git", "-x", "build"]);
    assert_eq!(parsed.match_patterns, ["*.py", "*.txt"]);
    assert_eq!(parsed.exclude_patterns, ["build", ".git"]);
}

#[test]
fn match_without_path_defaults_to_current_directory() {
    let parsed = parse(&["-m", "*.py"]);
    assert_eq!(parsed.paths, [PathBuf::from(".")]);

    let parsed = parse(&[]);
    assert!(parsed.paths.is_empty());
}

#[test]
fn zip_backup_implies_backup() {
    let parsed = parse(&["--zip-backup", "-m", "*.txt", "docs"]);
    assert!(parsed.zip_backup);
    assert!(parsed.backup);
    let options = walker_options(&parsed).expect("options");
    assert_eq!(options.backup_mode_value(), BackupMode::Zip);
}

#[test]
fn verbosity_counts_are_clamped() {
    assert_eq!(parse(&["-v"]).verbosity, 4);
    assert_eq!(parse(&["-vvvv"]).verbosity, 5);
    assert_eq!(parse(&["-q"]).verbosity, 2);
    assert_eq!(parse(&["-qqqqq"]).verbosity, 0);
    assert_eq!(parse(&["-vv", "-q"]).verbosity, 4);
}

#[test]
fn invalid_values_are_usage_errors() {
    assert!(parse_error(&["--line-separator", "dos"]).contains("line separator must be one of"));
    assert!(parse_error(&["-s", "0"]).contains("tab size must be between 1 and 256"));
    assert!(parse_error(&["-s", "1000000000"]).contains("tab size must be between 1 and 256"));
    assert!(
        parse_error(&["--input-tab-size", "257"]).contains("tab size must be between 1 and 256")
    );
    assert!(parse_error(&["-s", "four"]).contains("'four' is not a number"));
    assert!(parse_error(&["--bogus"]).contains("--bogus"));
}

#[test]
fn run_reports_usage_errors_with_program_prefix() {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let status = run(["tabfix", "--line-separator", "dos", "x"], &mut stdout, &mut stderr);
    assert_eq!(status, USAGE_EXIT_CODE);
    assert!(stdout.is_empty());
    assert!(String::from_utf8_lossy(&stderr).starts_with("tabfix: "));
}

#[test]
fn run_prints_help() {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let status = run(["tabfix", "--help"], &mut stdout, &mut stderr);
    assert_eq!(status, SUCCESS_EXIT_CODE);
    let help = String::from_utf8(stdout).expect("utf-8");
    assert!(help.contains("tabfix [OPTIONS] [PATH]..."));
    assert!(help.contains("--line-separator"));
}

#[test]
fn normalize_options_follow_switches() {
    let parsed = parse(&["-t", "-s", "2", "--line-separator", "mac", "f"]);
    let options = normalize_options(&parsed);
    assert_eq!(options.indent_style_value(), IndentStyle::Tabs);
    assert_eq!(options.tab_width_value().get(), 2);
    assert_eq!(options.input_tab_width_value().get(), 2);
    assert_eq!(options.line_separator_value(), Some(LineSeparator::Cr));
}

#[test]
fn summary_is_silent_below_level_two() {
    assert_eq!(summary(&RunStats::new(), true, 1), "");
}

#[test]
fn summary_reports_counts_and_ratio() {
    let stats = RunStats {
        files_processed: 10,
        files_modified: 5,
        files_skipped: 1,
        dirs_processed: 1,
        lines_processed: 40,
        lines_modified: 7,
        bytes_read: 200,
        bytes_written_if_unmodified: 150,
        elapsed: Duration::from_millis(1250),
        ..RunStats::new()
    };
    assert_eq!(
        summary(&stats, false, 2),
        "\nModified 7/40 lines, 5/10 files in 1 folders, skipped: 1\n         \
         200 bytes -> 150 bytes (-25%), elapsed: 1.250 sec\n"
    );
}

#[test]
fn summary_shows_archive_and_dry_run_banner() {
    let stats = RunStats {
        zip_archive: Some(PathBuf::from("/data/backup_20240102-030405.zip")),
        ..RunStats::new()
    };
    let text = summary(&stats, true, 3);
    assert!(text.starts_with("\nBackup archive:\n    /data/backup_20240102-030405.zip\n"));
    assert!(text.contains("0 bytes -> 0 bytes (+0%)"));
    assert!(text.ends_with("\n*** Dry-run mode: no files have been modified! ***\n\n"));

    let text = summary(&stats, false, 2);
    assert!(!text.contains("Backup archive"));
}

#[test]
fn exit_codes_map_config_errors() {
    assert_eq!(config_exit_code(&ConfigError::MissingPath), USAGE_EXIT_CODE);
    assert_eq!(
        config_exit_code(&ConfigError::InputNotFound(PathBuf::from("nope"))),
        engine::INVALID_PATH_EXIT_CODE
    );
}
