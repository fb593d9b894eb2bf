//! The built-in checker sequence
//!
//! The six invocations run in this fixed order. Order only affects which
//! failure is reported first; each checker is independent.

use crate::checkers::checker::{Checker, Target};
use crate::types::{Category, CheckerId};

fn checker(
    id: &str,
    description: &str,
    category: Category,
    command: &[&str],
    target: Target,
    fix: bool,
) -> Checker {
    let id = CheckerId::new(id).unwrap_or_else(|| panic!("invalid builtin checker id '{id}'"));
    Checker {
        id,
        description: description.to_string(),
        category,
        command: command.iter().map(|s| s.to_string()).collect(),
        target,
        fix,
    }
}

/// Returns the built-in checkers in invocation order.
///
/// - `ruff check` and `ruff format --check` delegate file discovery to ruff
///   (invoked on the root), but are still gated on the python file count.
/// - `shellcheck` runs with a style-level severity threshold and dialect
///   auto-detection (no `--shell` flag).
/// - `shfmt -d` reports a diff without rewriting, 4-space indent, indented
///   switch cases. It always receives the discovered shell file list.
/// - `yamllint` scans the tree and honors its own ignore rules.
/// - `dclint` attempts auto-fix, then fails unless zero warnings remain.
pub fn builtin_checkers() -> Vec<Checker> {
    vec![
        checker(
            "ruff-check",
            "Python style check (report-only)",
            Category::Python,
            &["ruff", "check"],
            Target::Tree,
            false,
        ),
        checker(
            "ruff-format",
            "Python formatting check (report-only)",
            Category::Python,
            &["ruff", "format", "--check"],
            Target::Tree,
            false,
        ),
        checker(
            "shellcheck",
            "Shell static analysis (style severity, dialect auto-detected)",
            Category::Shell,
            &["shellcheck", "--severity=style"],
            Target::FileList,
            false,
        ),
        checker(
            "shfmt",
            "Shell formatting check (diff-only, 4-space indent, case indent)",
            Category::Shell,
            &["shfmt", "-d", "-i", "4", "-ci"],
            Target::FileList,
            false,
        ),
        checker(
            "yamllint",
            "YAML style check over the tree",
            Category::Yaml,
            &["yamllint"],
            Target::Tree,
            false,
        ),
        checker(
            "dclint",
            "Compose-file lint with zero-tolerance auto-fix",
            Category::Generic,
            &["dclint", "--fix", "--max-warnings", "0"],
            Target::Tree,
            true,
        ),
    ]
}
