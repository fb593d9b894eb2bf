#![forbid(unsafe_code)]

//! Sequential execution engine for dispatching checkers
//!
//! The engine partitions discovered files by category, gates each checker on
//! its category having any files, and invokes each applicable checker as a
//! blocking subprocess. Checker stdout/stderr are inherited so diagnostics
//! reach the user unmodified; the engine only collects exit statuses.

use crate::checkers::checker::{Checker, Target};
use crate::checkers::registry::CheckerRegistry;
use crate::engine::file_walker::FileEntry;
use crate::error::CheckerError;
use crate::types::{Category, CheckerId};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Why a checker was not invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipCause {
    /// No discovered files in the checker's category
    NoFiles,
    /// A previous checker failed and fail-fast is active
    EarlierFailure,
}

impl SkipCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipCause::NoFiles => "no matching files",
            SkipCause::EarlierFailure => "earlier failure (fail-fast)",
        }
    }
}

/// Verdict for a single checker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckerOutcome {
    /// Checker ran and exited zero
    Passed,
    /// Checker ran and reported findings via a non-zero exit
    Findings { exit_code: i32 },
    /// Checker was not invoked
    Skipped(SkipCause),
}

impl CheckerOutcome {
    /// True when this outcome fails the run
    pub fn is_failure(&self) -> bool {
        matches!(self, CheckerOutcome::Findings { .. })
    }
}

/// Report for one checker in a run
#[derive(Debug, Clone)]
pub struct CheckerReport {
    pub id: CheckerId,
    pub description: String,
    pub category: Category,
    /// Number of discovered files in the checker's category
    pub files: usize,
    pub outcome: CheckerOutcome,
}

/// Result of executing the checker sequence
#[derive(Debug, Clone)]
pub struct RunResult {
    /// One report per configured checker, in invocation order
    pub reports: Vec<CheckerReport>,
    /// Total number of discovered files
    pub files_discovered: usize,
    /// Logical AND over the checker verdicts: true iff no checker failed
    pub passed: bool,
}

impl RunResult {
    /// Number of checkers that reported findings
    pub fn failures(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.outcome.is_failure())
            .count()
    }
}

/// Execution engine driving the checker sequence
///
/// Checkers run sequentially as blocking subprocesses, in registry order.
/// The default policy is best-effort continuation: a failing checker does
/// not stop the remaining checkers. With fail-fast, checkers after the
/// first failure are recorded as skipped.
pub struct ExecutionEngine {
    registry: CheckerRegistry,
    root: PathBuf,
    fail_fast: bool,
}

impl ExecutionEngine {
    /// Creates a new ExecutionEngine
    ///
    /// # Arguments
    ///
    /// * `registry` - The enabled checkers in invocation order
    /// * `root` - Directory the checkers run in; tree-scoped checkers
    ///   receive `.` relative to it
    /// * `fail_fast` - Stop invoking checkers after the first failure
    pub fn new(registry: CheckerRegistry, root: impl Into<PathBuf>, fail_fast: bool) -> Self {
        Self {
            registry,
            root: root.into(),
            fail_fast,
        }
    }

    /// Execute the checker sequence against the discovered files
    ///
    /// Findings are reported in the returned `RunResult`; the `Err` case is
    /// reserved for fatal problems such as a missing checker binary.
    pub fn execute(&self, files: &[FileEntry]) -> Result<RunResult, CheckerError> {
        let files_discovered = files.len();
        let mut reports = Vec::with_capacity(self.registry.len());
        let mut failed = false;

        for checker in self.registry.iter() {
            let category_files = self.category_files(checker, files);
            let files_in_category = category_files.len();

            let outcome = if files_in_category == 0 {
                // Empty-selection edge case: never invoke a checker with
                // nothing to check
                CheckerOutcome::Skipped(SkipCause::NoFiles)
            } else if failed && self.fail_fast {
                CheckerOutcome::Skipped(SkipCause::EarlierFailure)
            } else {
                self.invoke(checker, &category_files)?
            };

            if outcome.is_failure() {
                failed = true;
            }

            reports.push(CheckerReport {
                id: checker.id.clone(),
                description: checker.description.clone(),
                category: checker.category,
                files: files_in_category,
                outcome,
            });
        }

        Ok(RunResult {
            reports,
            files_discovered,
            passed: !failed,
        })
    }

    /// Files gating this checker.
    ///
    /// Generic (tree-wide) checkers are gated on the tree containing any
    /// file at all; category checkers on their own bucket.
    fn category_files<'a>(&self, checker: &Checker, files: &'a [FileEntry]) -> Vec<&'a FileEntry> {
        match checker.category {
            Category::Generic => files.iter().collect(),
            category => files.iter().filter(|f| f.category == category).collect(),
        }
    }

    /// Invoke a single checker as a blocking subprocess
    fn invoke(
        &self,
        checker: &Checker,
        category_files: &[&FileEntry],
    ) -> Result<CheckerOutcome, CheckerError> {
        // Registries built from config reject empty templates, but this
        // invariant must also hold for registries assembled directly
        if checker.command.is_empty() {
            return Err(CheckerError::InvalidDefinition(format!(
                "checker '{}' has an empty command",
                checker.id.as_str()
            )));
        }

        let program = checker.program();
        let mut command = Command::new(program);
        command.args(&checker.command[1..]).current_dir(&self.root);

        match checker.target {
            Target::Tree => {
                command.arg(".");
            }
            Target::FileList => {
                for file in category_files {
                    command.arg(self.display_path(&file.path));
                }
            }
        }

        let status = command.status().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CheckerError::MissingTool {
                    id: checker.id.clone(),
                    program: program.to_string(),
                }
            } else {
                CheckerError::Launch {
                    id: checker.id.clone(),
                    source: e,
                }
            }
        })?;

        if status.success() {
            Ok(CheckerOutcome::Passed)
        } else {
            // A signal-terminated checker has no code; report it as -1
            Ok(CheckerOutcome::Findings {
                exit_code: status.code().unwrap_or(-1),
            })
        }
    }

    /// Render a discovered path relative to the run root when possible,
    /// since the subprocess runs with the root as its working directory.
    fn display_path<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::builtin::builtin_checkers;
    use crate::config::checkrun_toml::Config;
    use tempfile::TempDir;

    fn stub_checker(id: &str, category: Category, command: &[&str], target: Target) -> Checker {
        Checker {
            id: CheckerId::new(id).unwrap(),
            description: format!("stub {id}"),
            category,
            command: command.iter().map(|s| s.to_string()).collect(),
            target,
            fix: false,
        }
    }

    fn registry_of(checkers: Vec<Checker>) -> CheckerRegistry {
        CheckerRegistry::from_checkers(checkers)
    }

    fn entry(name: &str) -> FileEntry {
        FileEntry::new(PathBuf::from(name))
    }

    #[test]
    fn test_execute_empty_tree_passes_with_all_skipped() {
        let registry = CheckerRegistry::build_from_config(&Config::default()).unwrap();
        let temp_dir = TempDir::new().unwrap();
        let engine = ExecutionEngine::new(registry, temp_dir.path(), false);

        let result = engine.execute(&[]).unwrap();
        assert!(result.passed);
        assert_eq!(result.files_discovered, 0);
        assert!(result
            .reports
            .iter()
            .all(|r| r.outcome == CheckerOutcome::Skipped(SkipCause::NoFiles)));
    }

    #[test]
    fn test_empty_category_skips_checker() {
        // A shell checker with only python files discovered is never run;
        // "false" would fail if it were invoked.
        let registry = registry_of(vec![stub_checker(
            "stub-shell",
            Category::Shell,
            &["false"],
            Target::FileList,
        )]);
        let temp_dir = TempDir::new().unwrap();
        let engine = ExecutionEngine::new(registry, temp_dir.path(), false);

        let result = engine.execute(&[entry("main.py")]).unwrap();
        assert!(result.passed);
        assert_eq!(
            result.reports[0].outcome,
            CheckerOutcome::Skipped(SkipCause::NoFiles)
        );
    }

    #[test]
    fn test_single_failure_fails_run() {
        let registry = registry_of(vec![
            stub_checker("stub-pass", Category::Generic, &["true"], Target::Tree),
            stub_checker("stub-fail", Category::Generic, &["false"], Target::Tree),
            stub_checker("stub-pass2", Category::Generic, &["true"], Target::Tree),
        ]);
        let temp_dir = TempDir::new().unwrap();
        let engine = ExecutionEngine::new(registry, temp_dir.path(), false);

        let result = engine.execute(&[entry("README.md")]).unwrap();
        assert!(!result.passed);
        assert_eq!(result.failures(), 1);

        // Best-effort continuation: the checker after the failure still ran
        assert_eq!(result.reports[2].outcome, CheckerOutcome::Passed);
    }

    #[test]
    fn test_fail_fast_skips_remaining() {
        let registry = registry_of(vec![
            stub_checker("stub-fail", Category::Generic, &["false"], Target::Tree),
            stub_checker("stub-after", Category::Generic, &["true"], Target::Tree),
        ]);
        let temp_dir = TempDir::new().unwrap();
        let engine = ExecutionEngine::new(registry, temp_dir.path(), true);

        let result = engine.execute(&[entry("README.md")]).unwrap();
        assert!(!result.passed);
        assert_eq!(
            result.reports[1].outcome,
            CheckerOutcome::Skipped(SkipCause::EarlierFailure)
        );
    }

    #[test]
    fn test_exit_code_captured() {
        let registry = registry_of(vec![stub_checker(
            "stub-code",
            Category::Generic,
            &["sh", "-c", "exit 3"],
            Target::Tree,
        )]);
        let temp_dir = TempDir::new().unwrap();
        let engine = ExecutionEngine::new(registry, temp_dir.path(), false);

        let result = engine.execute(&[entry("README.md")]).unwrap();
        assert_eq!(
            result.reports[0].outcome,
            CheckerOutcome::Findings { exit_code: 3 }
        );
    }

    #[test]
    fn test_missing_tool_is_fatal() {
        let registry = registry_of(vec![stub_checker(
            "stub-missing",
            Category::Generic,
            &["checkrun-no-such-binary-462"],
            Target::Tree,
        )]);
        let temp_dir = TempDir::new().unwrap();
        let engine = ExecutionEngine::new(registry, temp_dir.path(), false);

        let result = engine.execute(&[entry("README.md")]);
        assert!(matches!(result, Err(CheckerError::MissingTool { .. })));
    }

    #[test]
    fn test_file_list_passed_as_arguments() {
        // `sh -c 'test $# -eq 2' sh` receives the shell files as positional
        // parameters; any other count fails.
        let registry = registry_of(vec![stub_checker(
            "stub-args",
            Category::Shell,
            &["sh", "-c", "test $# -eq 2", "sh"],
            Target::FileList,
        )]);
        let temp_dir = TempDir::new().unwrap();
        let engine = ExecutionEngine::new(registry, temp_dir.path(), false);

        let files = vec![entry("a.sh"), entry("b.bash"), entry("main.py")];
        let result = engine.execute(&files).unwrap();
        assert!(result.passed, "expected exactly two shell files passed");
    }

    #[test]
    fn test_tree_target_receives_dot() {
        let registry = registry_of(vec![stub_checker(
            "stub-dot",
            Category::Generic,
            &["sh", "-c", "test \"$1\" = .", "sh"],
            Target::Tree,
        )]);
        let temp_dir = TempDir::new().unwrap();
        let engine = ExecutionEngine::new(registry, temp_dir.path(), false);

        let result = engine.execute(&[entry("README.md")]).unwrap();
        assert!(result.passed);
    }

    #[test]
    fn test_idempotent_on_unchanged_tree() {
        let registry = registry_of(vec![
            stub_checker("stub-pass", Category::Generic, &["true"], Target::Tree),
            stub_checker("stub-fail", Category::Generic, &["false"], Target::Tree),
        ]);
        let temp_dir = TempDir::new().unwrap();
        let engine = ExecutionEngine::new(registry, temp_dir.path(), false);

        let files = vec![entry("README.md")];
        let first = engine.execute(&files).unwrap();
        let second = engine.execute(&files).unwrap();

        assert_eq!(first.passed, second.passed);
        let outcomes =
            |r: &RunResult| r.reports.iter().map(|c| c.outcome).collect::<Vec<_>>();
        assert_eq!(outcomes(&first), outcomes(&second));
    }

    #[test]
    fn test_category_gating_counts() {
        let registry = CheckerRegistry::build_from_config(&Config::default()).unwrap();
        let temp_dir = TempDir::new().unwrap();
        let engine = ExecutionEngine::new(registry, temp_dir.path(), false);

        let files = vec![entry("deploy.sh"), entry("notes.txt")];
        // Python and YAML checkers must be gated off; the shell and generic
        // checkers would be invoked, so only inspect gating here.
        for checker in builtin_checkers() {
            let count = engine.category_files(&checker, &files).len();
            match checker.category {
                Category::Python | Category::Yaml => assert_eq!(count, 0),
                Category::Shell => assert_eq!(count, 1),
                Category::Generic => assert_eq!(count, 2),
            }
        }
    }
}
