use engine::{BackupMode, WalkerOptions, process};
use filters::PatternSet;
use normalize::{IndentStyle, NormalizeOptions, WhitespaceTransform};
use test_support::{FileTree, TestDir};

fn patterns(list: &[&str]) -> PatternSet {
    PatternSet::from_patterns(list).expect("patterns")
}

#[test]
fn flat_directory_run_with_backups() {
    let dir = TestDir::new();
    let mut tree = FileTree::new();
    for index in 0..5 {
        tree = tree
            .file(format!("clean{index}.py"), "def f():\n    return 1\n")
            .file(format!("dirty{index}.py"), "def f():\n\treturn 1  \n");
    }
    dir.populate(&tree.file("notes.md", "\tkeep  \n"));

    let options = WalkerOptions::new()
        .backup_mode(BackupMode::File)
        .with_match_patterns(patterns(&["*.py"]));
    let mut transform = WhitespaceTransform::default();
    let stats =
        process(&[dir.path().to_path_buf()], &options, &mut transform).expect("process");

    assert_eq!(stats.dirs_processed, 1);
    assert_eq!(stats.files_processed, 10);
    assert_eq!(stats.files_modified, 5);
    assert_eq!(stats.files_ignored, 1);
    assert_eq!(stats.lines_processed, 20);
    assert_eq!(stats.lines_modified, 5);
    for index in 0..5 {
        assert_eq!(dir.read(format!("dirty{index}.py")), b"def f():\n    return 1\n");
        assert_eq!(dir.read(format!("dirty{index}.py.bak")), b"def f():\n\treturn 1  \n");
        assert!(!dir.exists(format!("clean{index}.py.bak")));
    }
    assert_eq!(dir.read("notes.md"), b"\tkeep  \n");
}

#[test]
fn recursive_run_tabbifies_and_honours_ignore() {
    let dir = TestDir::new();
    dir.populate(
        &FileTree::new()
            .file("src/a.c", "        x;\n")
            .file("src/nested/b.c", "    y;\n")
            .file("build/gen.c", "        z;\n"),
    );

    let options = WalkerOptions::new()
        .recursive(true)
        .with_match_patterns(patterns(&["*.c"]))
        .with_ignore_patterns(patterns(&["build"]));
    let mut transform =
        WhitespaceTransform::new(NormalizeOptions::new().indent_style(IndentStyle::Tabs));
    let stats =
        process(&[dir.path().to_path_buf()], &options, &mut transform).expect("process");

    assert_eq!(dir.read("src/a.c"), b"\t\tx;\n");
    assert_eq!(dir.read("src/nested/b.c"), b"\ty;\n");
    assert_eq!(dir.read("build/gen.c"), b"        z;\n");
    assert_eq!(stats.dirs_processed, 3);
    assert_eq!(stats.dirs_ignored, 1);
    assert_eq!(stats.files_modified, 2);
}
