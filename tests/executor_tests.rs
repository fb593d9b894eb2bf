//! Integration tests for the execution engine
//!
//! Checkers are stubbed with `true`, `false`, and small `sh -c` scripts so
//! the tests exercise dispatch, gating, and aggregation without requiring
//! real linters on the host.

mod common;

use checkrun::checkers::checker::{Checker, Target};
use checkrun::checkers::registry::CheckerRegistry;
use checkrun::engine::executor::{CheckerOutcome, ExecutionEngine, SkipCause};
use checkrun::engine::file_walker::FileEntry;
use checkrun::error::CheckerError;
use checkrun::types::{Category, CheckerId};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn stub(id: &str, category: Category, command: &[&str], target: Target) -> Checker {
    Checker {
        id: CheckerId::new(id).unwrap(),
        description: format!("stub {id}"),
        category,
        command: command.iter().map(|s| s.to_string()).collect(),
        target,
        fix: false,
    }
}

fn entries(names: &[&str]) -> Vec<FileEntry> {
    names
        .iter()
        .map(|n| FileEntry::new(PathBuf::from(n)))
        .collect()
}

#[test]
fn aggregation_is_or_of_exit_statuses() {
    let temp = TempDir::new().unwrap();
    let registry = CheckerRegistry::from_checkers(vec![
        stub("a", Category::Generic, &["true"], Target::Tree),
        stub("b", Category::Generic, &["false"], Target::Tree),
        stub("c", Category::Generic, &["true"], Target::Tree),
    ]);
    let engine = ExecutionEngine::new(registry, temp.path(), false);

    let result = assert_ok!(engine.execute(&entries(&["x.txt"])));
    assert!(!result.passed);
    assert_eq!(result.failures(), 1);
    // Best-effort: all three ran
    assert_eq!(result.reports[0].outcome, CheckerOutcome::Passed);
    assert!(result.reports[1].outcome.is_failure());
    assert_eq!(result.reports[2].outcome, CheckerOutcome::Passed);
}

#[test]
fn all_passing_checkers_pass_the_run() {
    let temp = TempDir::new().unwrap();
    let registry = CheckerRegistry::from_checkers(vec![
        stub("a", Category::Generic, &["true"], Target::Tree),
        stub("b", Category::Generic, &["true"], Target::Tree),
    ]);
    let engine = ExecutionEngine::new(registry, temp.path(), false);

    let result = assert_ok!(engine.execute(&entries(&["x.txt"])));
    assert!(result.passed);
    assert_eq!(result.failures(), 0);
}

#[test]
fn category_without_files_skips_its_checker() {
    let temp = TempDir::new().unwrap();
    // "false" would fail if invoked; skipping must shield it
    let registry = CheckerRegistry::from_checkers(vec![
        stub("py", Category::Python, &["false"], Target::Tree),
        stub("yml", Category::Yaml, &["false"], Target::Tree),
        stub("any", Category::Generic, &["true"], Target::Tree),
    ]);
    let engine = ExecutionEngine::new(registry, temp.path(), false);

    let result = assert_ok!(engine.execute(&entries(&["deploy.sh", "notes.txt"])));
    assert!(result.passed);
    assert_eq!(
        result.reports[0].outcome,
        CheckerOutcome::Skipped(SkipCause::NoFiles)
    );
    assert_eq!(
        result.reports[1].outcome,
        CheckerOutcome::Skipped(SkipCause::NoFiles)
    );
    assert_eq!(result.reports[2].outcome, CheckerOutcome::Passed);
}

#[test]
fn empty_tree_skips_everything_and_passes() {
    let temp = TempDir::new().unwrap();
    let registry = CheckerRegistry::from_checkers(vec![
        stub("py", Category::Python, &["false"], Target::Tree),
        stub("any", Category::Generic, &["false"], Target::Tree),
    ]);
    let engine = ExecutionEngine::new(registry, temp.path(), false);

    let result = assert_ok!(engine.execute(&[]));
    assert!(result.passed);
    assert!(result
        .reports
        .iter()
        .all(|r| r.outcome == CheckerOutcome::Skipped(SkipCause::NoFiles)));
}

#[test]
fn fail_fast_short_circuits() {
    let temp = TempDir::new().unwrap();
    let registry = CheckerRegistry::from_checkers(vec![
        stub("first", Category::Generic, &["false"], Target::Tree),
        stub("second", Category::Generic, &["true"], Target::Tree),
        stub("third", Category::Generic, &["true"], Target::Tree),
    ]);
    let engine = ExecutionEngine::new(registry, temp.path(), true);

    let result = assert_ok!(engine.execute(&entries(&["x.txt"])));
    assert!(!result.passed);
    for report in &result.reports[1..] {
        assert_eq!(
            report.outcome,
            CheckerOutcome::Skipped(SkipCause::EarlierFailure)
        );
    }
}

#[test]
fn file_list_checker_receives_only_its_category() {
    let temp = TempDir::new().unwrap();
    // Passes only if invoked with exactly the two shell files
    let registry = CheckerRegistry::from_checkers(vec![stub(
        "shell-args",
        Category::Shell,
        &["sh", "-c", "test $# -eq 2", "sh"],
        Target::FileList,
    )]);
    let engine = ExecutionEngine::new(registry, temp.path(), false);

    let files = entries(&["a.sh", ".bashrc", "main.py", "notes.txt"]);
    let result = assert_ok!(engine.execute(&files));
    assert!(result.passed);
    assert_eq!(result.reports[0].files, 2);
}

#[test]
fn empty_command_is_rejected_not_a_panic() {
    let temp = TempDir::new().unwrap();
    let registry = CheckerRegistry::from_checkers(vec![stub(
        "hollow",
        Category::Generic,
        &[],
        Target::Tree,
    )]);
    let engine = ExecutionEngine::new(registry, temp.path(), false);

    let result = engine.execute(&entries(&["x.txt"]));
    assert!(matches!(result, Err(CheckerError::InvalidDefinition(_))));
}

#[test]
fn missing_checker_binary_is_fatal_not_a_finding() {
    let temp = TempDir::new().unwrap();
    let registry = CheckerRegistry::from_checkers(vec![stub(
        "ghost",
        Category::Generic,
        &["checkrun-no-such-binary-462"],
        Target::Tree,
    )]);
    let engine = ExecutionEngine::new(registry, temp.path(), false);

    match engine.execute(&entries(&["x.txt"])) {
        Err(CheckerError::MissingTool { id, program }) => {
            assert_eq!(id.as_str(), "ghost");
            assert_eq!(program, "checkrun-no-such-binary-462");
        }
        other => panic!("expected MissingTool, got {:?}", other.map(|r| r.passed)),
    }
}

#[test]
fn checker_runs_in_the_root_directory() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("marker.txt"), "").unwrap();

    let registry = CheckerRegistry::from_checkers(vec![stub(
        "cwd-check",
        Category::Generic,
        &["sh", "-c", "test -f marker.txt"],
        Target::Tree,
    )]);
    let engine = ExecutionEngine::new(registry, temp.path(), false);

    let result = assert_ok!(engine.execute(&entries(&["marker.txt"])));
    assert!(result.passed);
}

#[test]
fn exit_status_of_failing_checker_is_reported() {
    let temp = TempDir::new().unwrap();
    let registry = CheckerRegistry::from_checkers(vec![stub(
        "status",
        Category::Generic,
        &["sh", "-c", "exit 42"],
        Target::Tree,
    )]);
    let engine = ExecutionEngine::new(registry, temp.path(), false);

    let result = assert_ok!(engine.execute(&entries(&["x.txt"])));
    assert_eq!(
        result.reports[0].outcome,
        CheckerOutcome::Findings { exit_code: 42 }
    );
}

#[test]
fn run_is_idempotent_on_unchanged_tree() {
    let temp = TempDir::new().unwrap();
    let registry = CheckerRegistry::from_checkers(vec![
        stub("ok", Category::Generic, &["true"], Target::Tree),
        stub("bad", Category::Generic, &["sh", "-c", "exit 7"], Target::Tree),
    ]);
    let engine = ExecutionEngine::new(registry, temp.path(), false);

    let files = entries(&["x.txt"]);
    let first = assert_ok!(engine.execute(&files));
    let second = assert_ok!(engine.execute(&files));

    assert_eq!(first.passed, second.passed);
    for (a, b) in first.reports.iter().zip(second.reports.iter()) {
        assert_eq!(a.outcome, b.outcome);
        assert_eq!(a.files, b.files);
    }
}
