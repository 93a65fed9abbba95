use super::*;
use engine::{BackupMode, WalkerOptions, process};
use std::str::FromStr;
use test_support::TestDir;

fn width(columns: usize) -> TabWidth {
    TabWidth::new(columns).expect("non-zero width")
}

fn spaces(content: &[u8]) -> Vec<u8> {
    normalize_line(content, width(4), width(4), IndentStyle::Spaces)
}

fn native(text: &str) -> Vec<u8> {
    text.replace('\n', std::str::from_utf8(LineSeparator::native().as_bytes()).expect("ascii"))
        .into_bytes()
}

#[test]
fn split_prefers_crlf_over_lone_cr() {
    let (lines, stats) = split_lines(b"a\r\nb\n\rc\r");
    let parts: Vec<_> = lines.iter().map(|line| (line.content(), line.ending())).collect();
    assert_eq!(
        parts,
        [
            (&b"a"[..], LineEnding::CrLf),
            (&b"b"[..], LineEnding::Lf),
            (&b""[..], LineEnding::Cr),
            (&b"c"[..], LineEnding::Cr),
        ]
    );
    assert_eq!(stats, LineEndingStats { cr: 2, lf: 1, crlf: 1 });
    assert!(stats.is_mixed());
    assert_eq!(stats.detected(), None);
}

#[test]
fn split_keeps_unterminated_tail() {
    let (lines, stats) = split_lines(b"one\ntwo");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].content(), b"two");
    assert_eq!(lines[1].ending(), LineEnding::None);
    assert_eq!(stats.detected(), Some(LineSeparator::Lf));
}

#[test]
fn split_of_empty_input_has_no_lines() {
    let (lines, stats) = split_lines(b"");
    assert!(lines.is_empty());
    assert_eq!(stats, LineEndingStats::default());
    assert_eq!(stats.detected(), None);
    assert!(!stats.is_mixed());
}

#[test]
fn line_endings_map_to_separators() {
    assert_eq!(LineEnding::CrLf.separator(), Some(LineSeparator::CrLf));
    assert_eq!(LineEnding::None.separator(), None);
    assert_eq!(LineEnding::Cr.as_bytes(), b"\r");
    assert_eq!(LineEnding::None.as_bytes(), b"");
}

#[test]
fn trailing_spaces_and_tabs_are_stripped() {
    assert_eq!(spaces(b"code \t \t"), b"code");
    assert_eq!(spaces(b" \t "), b"");
    assert_eq!(spaces(b""), b"");
}

#[test]
fn tabs_advance_to_next_stop() {
    assert_eq!(spaces(b"\tx"), b"    x");
    assert_eq!(spaces(b"  \tx"), b"    x");
    assert_eq!(spaces(b"    \tx"), b"        x");
    assert_eq!(spaces(b" \t \tx"), b"        x");
}

#[test]
fn inner_whitespace_is_preserved() {
    assert_eq!(spaces(b"\ta\tb  c"), b"    a\tb  c");
}

#[test]
fn no_break_space_counts_as_indentation() {
    assert_eq!(spaces(b"\xA0\xA0x"), b"  x");
    assert_eq!(spaces(b"x\xA0"), b"x\xA0");
    assert_eq!(spaces(b" \xA0"), b"");
}

#[test]
fn tabbify_emits_tabs_then_remainder() {
    let line = normalize_line(b"          x", width(4), width(4), IndentStyle::Tabs);
    assert_eq!(line, b"\t\t  x");
    let line = normalize_line(b"   x", width(4), width(4), IndentStyle::Tabs);
    assert_eq!(line, b"   x");
}

#[test]
fn input_tab_width_is_independent_of_output() {
    let line = normalize_line(b"\tx", width(8), width(4), IndentStyle::Spaces);
    assert_eq!(line, b"        x");
    let line = normalize_line(b"\tx", width(8), width(4), IndentStyle::Tabs);
    assert_eq!(line, b"\t\tx");
    let line = normalize_line(b"\t\tx", width(2), width(8), IndentStyle::Tabs);
    assert_eq!(line, b"    x");
}

#[test]
fn line_separator_parses_aliases_case_insensitively() {
    for (name, expected) in [
        ("cr", LineSeparator::Cr),
        ("Mac", LineSeparator::Cr),
        ("LF", LineSeparator::Lf),
        ("unix", LineSeparator::Lf),
        ("crlf", LineSeparator::CrLf),
        ("WINDOWS", LineSeparator::CrLf),
    ] {
        assert_eq!(LineSeparator::from_str(name), Ok(expected), "{name}");
    }
    let error = LineSeparator::from_str("dos").expect_err("unknown name");
    assert!(error.to_string().contains("'dos'"));
    assert_eq!(LineSeparator::CrLf.to_string(), "CRLF");
}

#[test]
fn tab_width_rejects_zero_and_oversized() {
    assert_eq!(TabWidth::new(0), None);
    assert_eq!(TabWidth::try_from(0), Err(InvalidTabWidth));
    assert_eq!(TabWidth::new(MAX_TAB_WIDTH).map(TabWidth::get), Some(MAX_TAB_WIDTH));
    assert_eq!(TabWidth::new(MAX_TAB_WIDTH + 1), None);
    assert_eq!(TabWidth::try_from(usize::MAX), Err(InvalidTabWidth));
    assert_eq!(InvalidTabWidth.to_string(), "tab size must be between 1 and 256");
    assert_eq!(TabWidth::default().get(), DEFAULT_TAB_WIDTH);
}

#[test]
fn input_tab_width_defaults_to_output_width() {
    let options = NormalizeOptions::new().tab_width(width(2));
    assert_eq!(options.input_tab_width_value(), width(2));
    let options = options.input_tab_width(Some(width(8)));
    assert_eq!(options.input_tab_width_value(), width(8));
    assert_eq!(options.tab_width_value(), width(2));
}

#[test]
fn clean_input_produces_no_output() {
    let result = normalize_bytes(b"    a\nb\n", &NormalizeOptions::new());
    assert_eq!(result.output, None);
    assert_eq!(result.lines_processed, 2);
    assert_eq!(result.lines_modified, 0);
    assert_eq!(result.detected, Some(LineSeparator::Lf));
    assert!(!result.separator_changed());
}

#[test]
fn empty_input_becomes_one_line_break() {
    let result = normalize_bytes(b"", &NormalizeOptions::new());
    assert_eq!(result.output, Some(native("\n")));
    assert_eq!(result.lines_processed, 1);
    assert_eq!(result.lines_modified, 0);
    assert!(result.separator_changed());

    let options = NormalizeOptions::new().line_separator(Some(LineSeparator::Cr));
    let result = normalize_bytes(b"", &options);
    assert_eq!(result.output.as_deref(), Some(&b"\r"[..]));

    let once = normalize_bytes(b"", &NormalizeOptions::new()).output.expect("rewritten");
    assert_eq!(normalize_bytes(&once, &NormalizeOptions::new()).output, None);
}

#[test]
fn missing_final_delimiter_is_added() {
    let result = normalize_bytes(b"a\r\nb", &NormalizeOptions::new());
    assert_eq!(result.output.as_deref(), Some(&b"a\r\nb\r\n"[..]));
    assert_eq!(result.lines_modified, 1);
    assert!(!result.separator_changed());
}

#[test]
fn single_unterminated_line_uses_native_delimiter() {
    let result = normalize_bytes(b"x", &NormalizeOptions::new());
    assert_eq!(result.output, Some(native("x\n")));
    assert_eq!(result.detected, None);
}

#[test]
fn mixed_delimiters_fall_back_to_native() {
    let result = normalize_bytes(b"a\r\nb\nc\r", &NormalizeOptions::new());
    assert_eq!(result.output, Some(native("a\nb\nc\n")));
    assert!(result.separator_changed());
    assert_eq!(result.lines_processed, 3);
}

#[test]
fn forced_separator_rewrites_every_line() {
    let options = NormalizeOptions::new().line_separator(Some(LineSeparator::CrLf));
    let result = normalize_bytes(b"a\nb\n", &options);
    assert_eq!(result.output.as_deref(), Some(&b"a\r\nb\r\n"[..]));
    assert_eq!(result.lines_modified, 2);
    assert!(result.separator_changed());
}

#[test]
fn trailing_blank_lines_collapse() {
    let result = normalize_bytes(b"a\n\n  \n\t\n", &NormalizeOptions::new());
    assert_eq!(result.output.as_deref(), Some(&b"a\n"[..]));
    assert_eq!(result.lines_processed, 1);
    assert_eq!(result.lines_modified, 2);
}

#[test]
fn blank_only_file_keeps_one_line_break() {
    let result = normalize_bytes(b"\n\n\n", &NormalizeOptions::new());
    assert_eq!(result.output.as_deref(), Some(&b"\n"[..]));
    assert_eq!(result.lines_processed, 1);

    let result = normalize_bytes(b"\n", &NormalizeOptions::new());
    assert_eq!(result.output, None);
}

#[test]
fn changes_record_numbered_lines() {
    let (result, changes) =
        normalize_bytes_with_changes(b"ok\n\tbad \nok\n", &NormalizeOptions::new());
    assert_eq!(result.lines_modified, 1);
    assert_eq!(
        changes,
        [LineChange {
            number: 2,
            before: b"\tbad ".to_vec(),
            after: b"    bad".to_vec(),
        }]
    );
}

#[test]
fn transform_rewrites_text_and_counts_bytes() {
    let dir = TestDir::new();
    let file = dir.write("a.py", "if x:\n\ty = 1   \n\n\n");

    let mut transform = WhitespaceTransform::new(NormalizeOptions::new());
    let stats = process(&[file], &WalkerOptions::new(), &mut transform).expect("process");

    assert_eq!(dir.read("a.py"), b"if x:\n    y = 1\n");
    assert_eq!(stats.files_modified, 1);
    assert_eq!(stats.lines_processed, 2);
    assert_eq!(stats.lines_modified, 1);
    assert_eq!(stats.bytes_read, 18);
    assert_eq!(stats.bytes_written, 16);
    assert_eq!(stats.bytes_written_if_unmodified, 16);
}

#[test]
fn transform_skips_binary_files() {
    let dir = TestDir::new();
    let file = dir.write("blob.txt", b"\0\t  \n");

    let mut transform = WhitespaceTransform::default();
    let stats = process(&[file], &WalkerOptions::new(), &mut transform).expect("process");

    assert_eq!(dir.read("blob.txt"), b"\0\t  \n");
    assert_eq!(stats.files_processed, 1);
    assert_eq!(stats.files_skipped, 1);
    assert_eq!(stats.files_modified, 0);
    assert_eq!(stats.bytes_read, 0);
}

#[test]
fn transform_leaves_clean_file_and_counts_source_size() {
    let dir = TestDir::new();
    let file = dir.write("clean.txt", "a\nb\n");

    let options = WalkerOptions::new().backup_mode(BackupMode::File);
    let mut transform = WhitespaceTransform::default();
    let stats = process(&[file], &options, &mut transform).expect("process");

    assert_eq!(stats.files_modified, 0);
    assert_eq!(stats.bytes_read, 4);
    assert_eq!(stats.bytes_written, 0);
    assert_eq!(stats.bytes_written_if_unmodified, 4);
    assert!(!dir.exists("clean.txt.bak"));
}

#[test]
fn dry_run_reports_would_be_size() {
    let dir = TestDir::new();
    let file = dir.write("a.txt", "x   \n");

    let options = WalkerOptions::new().dry_run(true);
    let mut transform = WhitespaceTransform::default();
    let stats = process(&[file], &options, &mut transform).expect("process");

    assert_eq!(dir.read("a.txt"), b"x   \n");
    assert_eq!(stats.files_modified, 0);
    assert_eq!(stats.bytes_written_if_unmodified, 2);
    assert_eq!(stats.lines_modified, 1);
}

#[test]
fn trailing_blanks_stripped_for_every_configuration() {
    for columns in 3..=8 {
        for style in [IndentStyle::Spaces, IndentStyle::Tabs] {
            for separator in [LineSeparator::Cr, LineSeparator::Lf, LineSeparator::CrLf] {
                let options = NormalizeOptions::new()
                    .tab_width(width(columns))
                    .indent_style(style)
                    .line_separator(Some(separator));
                let mut input = b"  text\t \t".to_vec();
                input.extend_from_slice(separator.as_bytes());
                let mut expected = b"  text".to_vec();
                expected.extend_from_slice(separator.as_bytes());

                let result = normalize_bytes(&input, &options);
                assert_eq!(result.output, Some(expected), "{columns} {style:?} {separator}");
            }
        }
    }
}

#[test]
fn six_carriage_returns_detect_mac_endings() {
    let (_, stats) = split_lines(b"1\r2\r3\r4\r5\r6\r");
    assert_eq!(stats.cr, 6);
    assert_eq!(stats.detected(), Some(LineSeparator::Cr));

    let result = normalize_bytes(b"1\r2\r3\r4\r5\r6\r", &NormalizeOptions::new());
    assert_eq!(result.output, None);
    assert_eq!(result.separator, LineSeparator::Cr);
}

#[test]
fn indentation_round_trips_through_tabs() {
    for columns in 1..=8 {
        for stops in 0..4 {
            let spaces_line = format!("{}x", " ".repeat(stops * columns));
            let tabs_line = format!("{}x", "\t".repeat(stops));
            let w = width(columns);
            assert_eq!(
                normalize_line(spaces_line.as_bytes(), w, w, IndentStyle::Tabs),
                tabs_line.as_bytes()
            );
            assert_eq!(
                normalize_line(tabs_line.as_bytes(), w, w, IndentStyle::Spaces),
                spaces_line.as_bytes()
            );
        }
    }
}

#[test]
fn widest_tabs_expand_without_overflow() {
    let widest = width(MAX_TAB_WIDTH);
    let line = normalize_line(b"\t\tx", widest, widest, IndentStyle::Spaces);
    assert_eq!(line.len(), 2 * MAX_TAB_WIDTH + 1);
    let line = normalize_line(b"\t\tx", widest, widest, IndentStyle::Tabs);
    assert_eq!(line, b"\t\tx");
}
