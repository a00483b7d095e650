//! End-to-end tests that run the `graphql-normalize` binary against files in
//! a temporary directory.

use std::path::Path;
use std::process::Command;
use std::process::Output;

const DUPLICATED_QUERY: &str = "query Q { viewer { id id ...F } } fragment F on Viewer { name }";
const NORMALIZED_QUERY: &str = "query Q {\n  viewer {\n    id\n    name\n  }\n}";

fn run_cli(args: &[&str], current_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_graphql-normalize"))
        .args(args)
        .current_dir(current_dir)
        .env_remove("LOG_LEVEL")
        .output()
        .expect("failed to execute graphql-normalize")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ── normalize ─────────────────────────────────────────────

#[test]
fn normalize_prints_single_file_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("query.graphql"), DUPLICATED_QUERY).unwrap();

    let output = run_cli(&["normalize", "query.graphql"], dir.path());

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), format!("{NORMALIZED_QUERY}\n"));
}

#[test]
fn normalize_prefixes_each_file_when_walking_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("queries")).unwrap();
    std::fs::write(dir.path().join("queries/a.graphql"), "{ v { a a } }").unwrap();
    std::fs::write(dir.path().join("queries/b.gql"), "{ b }").unwrap();
    std::fs::write(dir.path().join("queries/README.md"), "# docs").unwrap();

    let output = run_cli(&["normalize", "queries"], dir.path());

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        [
            "# queries/a.graphql",
            "{",
            "  v {",
            "    a",
            "  }",
            "}",
            "",
            "# queries/b.gql",
            "{",
            "  b",
            "}",
            "",
        ].join("\n"),
    );
}

#[test]
fn normalize_leaves_top_level_duplicates_in_place() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("query.graphql"), "{ a a }").unwrap();

    let output = run_cli(&["normalize", "query.graphql"], dir.path());

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "{\n  a\n  a\n}\n");
}

#[test]
fn normalize_keep_duplicates_only_inlines_fragments() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("query.graphql"), DUPLICATED_QUERY).unwrap();

    let output = run_cli(
        &["normalize", "--keep-duplicates", "query.graphql"],
        dir.path(),
    );

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "query Q {\n  viewer {\n    id\n    id\n    name\n  }\n}\n",
    );
}

#[test]
fn normalize_accepts_lone_file_with_other_extension() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("query.txt"), "{ v { a a } }").unwrap();

    let output = run_cli(&["normalize", "query.txt"], dir.path());

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "{\n  v {\n    a\n  }\n}\n");
}

#[test]
fn normalize_write_rewrites_files_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("query.graphql");
    std::fs::write(&path, DUPLICATED_QUERY).unwrap();

    let output = run_cli(&["normalize", "--write", "query.graphql"], dir.path());

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("Normalized 1 files"));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        format!("{NORMALIZED_QUERY}\n"),
    );
}

#[test]
fn normalize_reports_unknown_fragment() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("query.graphql"),
        "{ viewer { ...Fragment1 } }",
    ).unwrap();

    let output = run_cli(&["normalize", "query.graphql"], dir.path());

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(
        stderr_of(&output).contains("Found usage of unknown fragment Fragment1"),
        "stderr: {}",
        stderr_of(&output),
    );
}

#[test]
fn normalize_reports_syntax_errors() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("query.graphql"), "{ viewer { id }").unwrap();

    let output = run_cli(&["normalize", "query.graphql"], dir.path());

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("Failed to normalize"));
}

#[test]
fn normalize_fails_when_no_files_are_found() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("empty")).unwrap();

    let output = run_cli(&["normalize", "empty"], dir.path());

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("No GraphQL files found"));
}

// ── check ─────────────────────────────────────────────────

#[test]
fn check_lists_files_that_are_not_normalized() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("dirty.graphql"), DUPLICATED_QUERY).unwrap();
    std::fs::write(
        dir.path().join("clean.graphql"),
        format!("{NORMALIZED_QUERY}\n"),
    ).unwrap();

    let output = run_cli(&["check", "."], dir.path());

    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("1 of 2 files are not normalized"), "stderr: {stderr}");
    assert!(stderr.contains("dirty.graphql"));
    assert!(!stderr.contains("clean.graphql"));
}

#[test]
fn check_passes_after_write() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("query.graphql"), DUPLICATED_QUERY).unwrap();

    let write_output = run_cli(&["normalize", "--write", "."], dir.path());
    assert!(write_output.status.success());

    let output = run_cli(&["check", "."], dir.path());

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("All 1 files are normalized"));
}

#[test]
fn check_keep_duplicates_accepts_inlined_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("query.graphql"),
        "{\n  viewer {\n    id\n    id\n  }\n}\n",
    ).unwrap();

    let strict = run_cli(&["check", "query.graphql"], dir.path());
    let lenient = run_cli(&["check", "--keep-duplicates", "query.graphql"], dir.path());

    assert!(!strict.status.success());
    assert!(lenient.status.success(), "stderr: {}", stderr_of(&lenient));
}

// ── No subcommand ─────────────────────────────────────────

#[test]
fn no_subcommand_prints_help() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_cli(&[], dir.path());

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("normalize"));
    assert!(stdout.contains("check"));
}
