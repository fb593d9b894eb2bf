//! Integration tests for checkrun.toml parsing and its effect on the
//! checker registry

mod common;

use checkrun::checkers::registry::CheckerRegistry;
use checkrun::config::checkrun_toml::Config;
use checkrun::error::ConfigError;
use checkrun::types::DiscoveryStrategy;
use std::fs;
use tempfile::TempDir;

#[test]
fn full_config_loads_from_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("checkrun.toml");
    fs::write(
        &path,
        r#"
[checkrun]
version = "1"
discovery = "filesystem-walk"
include = ["scripts/**"]
exclude = ["**/vendor/**"]
fail_fast = true

[checkers]
ruff-check = false
ruff-format = false
dclint = { command = ["npx", "--yes", "dclint"], args = ["--fix", "--max-warnings", "0"] }

[output]
format = "jsonl"
color = "never"
"#,
    )
    .unwrap();

    let config = assert_ok!(Config::load(&path));
    assert_eq!(config.checkrun.discovery, DiscoveryStrategy::FilesystemWalk);
    assert!(config.checkrun.fail_fast);

    let registry = assert_ok!(CheckerRegistry::build_from_config(&config));
    let ids: Vec<&str> = registry.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["shellcheck", "shfmt", "yamllint", "dclint"]);

    let dclint = assert_some!(registry.iter().find(|c| c.id.as_str() == "dclint"));
    assert_eq!(dclint.program(), "npx");
}

#[test]
fn defaults_apply_when_sections_are_missing() {
    let config = assert_ok!(Config::parse("[checkrun]\nversion = \"1\"\n"));
    assert_eq!(config.checkrun.discovery, DiscoveryStrategy::VcsAware);
    assert!(!config.checkrun.fail_fast);
    assert!(config.checkrun.include.is_empty());

    let registry = assert_ok!(CheckerRegistry::build_from_config(&config));
    assert_eq!(registry.len(), 6);
}

#[test]
fn version_mismatch_is_validation_error() {
    let result = Config::parse("[checkrun]\nversion = \"0\"\n");
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn bad_toml_is_parse_error() {
    let result = Config::parse("[checkrun\nversion =");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn bad_globs_are_rejected() {
    for section in ["include", "exclude"] {
        let toml = format!("[checkrun]\nversion = \"1\"\n{section} = [\"[oops\"]\n");
        let result = Config::parse(&toml);
        assert!(
            matches!(result, Err(ConfigError::Validation(_))),
            "expected {section} glob rejection"
        );
    }
}

#[test]
fn unknown_checker_id_is_rejected_at_registry_build() {
    let config = assert_ok!(Config::parse(
        "[checkrun]\nversion = \"1\"\n\n[checkers]\nmystery-tool = true\n"
    ));
    assert!(CheckerRegistry::build_from_config(&config).is_err());
}

#[test]
fn disabling_every_checker_yields_empty_registry() {
    let config = assert_ok!(Config::parse(
        r#"
[checkrun]
version = "1"

[checkers]
ruff-check = false
ruff-format = false
shellcheck = false
shfmt = false
yamllint = false
dclint = false
"#
    ));
    let registry = assert_ok!(CheckerRegistry::build_from_config(&config));
    assert!(registry.is_empty());
}
