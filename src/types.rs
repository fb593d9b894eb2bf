#![forbid(unsafe_code)]

//! Core domain types for checkrun
//!
//! This module defines the fundamental types used throughout the dispatcher.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// File name suffixes that classify a file into the shell category.
///
/// Suffix matching (rather than extension matching) covers both dotfiles like
/// `.bashrc` and suffixed names like `deploy.bash_profile`.
const SHELL_SUFFIXES: &[&str] = &[
    ".sh",
    ".bash",
    ".ksh",
    ".bashrc",
    ".bash_profile",
    ".bash_login",
    ".bash_logout",
];

/// Classification bucket determining which checkers apply to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Python,
    Shell,
    Yaml,
    /// Fallback bucket; covered only by tree-wide checkers
    Generic,
}

impl Category {
    /// All categories, in a stable order
    pub fn all() -> [Category; 4] {
        [
            Category::Python,
            Category::Shell,
            Category::Yaml,
            Category::Generic,
        ]
    }

    /// Classifies a path by its file name.
    ///
    /// Every path lands in exactly one category; `Generic` is the fallback.
    pub fn of(path: &Path) -> Category {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return Category::Generic;
        };

        if SHELL_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
            return Category::Shell;
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some("py") | Some("pyi") => Category::Python,
            Some("yml") | Some("yaml") => Category::Yaml,
            _ => Category::Generic,
        }
    }

    /// Returns the category name as used in config and JSONL output
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Python => "python",
            Category::Shell => "shell",
            Category::Yaml => "yaml",
            Category::Generic => "generic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How candidate files are enumerated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DiscoveryStrategy {
    /// Tracked files plus untracked-but-not-ignored files (gitignore honored)
    #[default]
    VcsAware,
    /// Raw recursive walk; ignore rules are not consulted
    FilesystemWalk,
}

impl DiscoveryStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscoveryStrategy::VcsAware => "vcs-aware",
            DiscoveryStrategy::FilesystemWalk => "filesystem-walk",
        }
    }
}

impl fmt::Display for DiscoveryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated checker identifier
///
/// Checker IDs must be non-empty and contain only alphanumeric characters,
/// hyphens, and underscores.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CheckerId(String);

impl CheckerId {
    /// Creates a new CheckerId, validating the input
    ///
    /// Returns None if the input is empty or contains invalid characters
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            return None;
        }
        if !id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }
        Some(CheckerId(id))
    }

    /// Returns the checker ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CheckerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CheckerId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CheckerId::new(value).ok_or_else(|| "Invalid checker ID".to_string())
    }
}

impl From<CheckerId> for String {
    fn from(id: CheckerId) -> Self {
        id.0
    }
}

/// A glob pattern for file matching
///
/// A thin wrapper around a string that is compiled with the `globset` crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobPattern(String);

impl GlobPattern {
    /// Creates a new GlobPattern
    pub fn new(pattern: impl Into<String>) -> Self {
        GlobPattern(pattern.into())
    }

    /// Returns the pattern as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for GlobPattern {
    fn from(pattern: String) -> Self {
        GlobPattern(pattern)
    }
}

impl From<&str> for GlobPattern {
    fn from(pattern: &str) -> Self {
        GlobPattern(pattern.to_string())
    }
}
