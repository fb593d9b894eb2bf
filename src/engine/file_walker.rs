//! File discovery and traversal
//!
//! This module enumerates candidate files under a root using one of two
//! strategies: a gitignore-aware walk (tracked plus untracked-not-ignored
//! files) or a raw filesystem walk. Both honor the configured include and
//! exclude glob patterns and classify each file into a category.

use crate::types::{Category, DiscoveryStrategy, GlobPattern};
use globset::{Glob, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during file walking
#[derive(Debug, Error)]
pub enum FileWalkerError {
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        source: globset::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reason why a file was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// File did not match the include/exclude patterns
    ExcludedByPattern,
    /// File is not a regular file (e.g. directory, symlink)
    NotAFile,
}

/// Result of file walking - either a candidate file or a skipped entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkResult {
    /// Candidate file
    File(FileEntry),
    /// Entry that was skipped with reason
    Skipped { path: PathBuf, reason: SkipReason },
}

/// A discovered file with its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path to the file
    pub path: PathBuf,
    /// Classification bucket; `Generic` is the fallback
    pub category: Category,
}

impl FileEntry {
    /// Creates a new FileEntry, classifying the path
    pub fn new(path: PathBuf) -> Self {
        let category = Category::of(&path);
        Self { path, category }
    }
}

/// Iterator over discovered files
pub struct FileWalker {
    walker: ignore::Walk,
    root: PathBuf,
    include_set: Option<globset::GlobSet>,
    exclude_set: Option<globset::GlobSet>,
    verbose: bool,
}

impl FileWalker {
    /// Creates a new FileWalker
    ///
    /// Include and exclude patterns are matched against paths relative to
    /// the root, so `src/**` selects `<root>/src/...` for any root.
    ///
    /// # Arguments
    /// * `root` - Root directory to walk
    /// * `strategy` - `VcsAware` honors gitignore rules; `FilesystemWalk` does not
    /// * `include` - Include patterns (empty means include all)
    /// * `exclude` - Exclude patterns (applied after include)
    pub fn new(
        root: &Path,
        strategy: DiscoveryStrategy,
        include: &[GlobPattern],
        exclude: &[GlobPattern],
    ) -> Result<Self, FileWalkerError> {
        Self::with_verbose(root, strategy, include, exclude, false)
    }

    /// Creates a new FileWalker with verbose mode option
    ///
    /// In verbose mode skipped entries are reported instead of silently
    /// dropped.
    pub fn with_verbose(
        root: &Path,
        strategy: DiscoveryStrategy,
        include: &[GlobPattern],
        exclude: &[GlobPattern],
        verbose: bool,
    ) -> Result<Self, FileWalkerError> {
        let mut builder = WalkBuilder::new(root);
        match strategy {
            DiscoveryStrategy::VcsAware => {
                builder
                    .hidden(false) // Don't skip dotfiles; .bashrc is a candidate
                    .require_git(false); // Honor .gitignore even outside a repo
            }
            DiscoveryStrategy::FilesystemWalk => {
                builder.standard_filters(false);
            }
        }
        let walker = builder.build();

        let include_set = if include.is_empty() {
            None
        } else {
            Some(Self::build_globset(include)?)
        };

        // Always exclude the .git directory, merging with user excludes
        let mut exclude_patterns = Vec::from(exclude);
        exclude_patterns.push(GlobPattern::new("**/.git/**"));

        let exclude_set = Some(Self::build_globset(&exclude_patterns)?);

        Ok(Self {
            walker,
            root: root.to_path_buf(),
            include_set,
            exclude_set,
            verbose,
        })
    }

    /// Builds a GlobSet from patterns
    fn build_globset(patterns: &[GlobPattern]) -> Result<globset::GlobSet, FileWalkerError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern.as_str()).map_err(|e| FileWalkerError::InvalidGlob {
                pattern: pattern.as_str().to_string(),
                source: e,
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|e| FileWalkerError::InvalidGlob {
            pattern: "<globset>".to_string(),
            source: e,
        })
    }

    /// Walks the directory tree and returns an iterator over candidate files
    pub fn walk(self) -> impl Iterator<Item = Result<FileEntry, FileWalkerError>> {
        self.walk_with_skip_info()
            .filter_map(|result| match result {
                Ok(WalkResult::File(file)) => Some(Ok(file)),
                Ok(WalkResult::Skipped { .. }) => None,
                Err(e) => Some(Err(e)),
            })
    }

    /// Walks the directory tree and returns an iterator with skip information
    pub fn walk_with_skip_info(self) -> impl Iterator<Item = Result<WalkResult, FileWalkerError>> {
        let root = self.root;
        let include_set = self.include_set;
        let exclude_set = self.exclude_set;
        let verbose = self.verbose;

        self.walker.filter_map(move |result| {
            match result {
                Ok(entry) => {
                    // Only process files (not directories)
                    if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                        if verbose {
                            return Some(Ok(WalkResult::Skipped {
                                path: entry.path().to_path_buf(),
                                reason: SkipReason::NotAFile,
                            }));
                        } else {
                            return None;
                        }
                    }

                    let path = entry.path();
                    // Patterns are root-relative
                    let candidate = path.strip_prefix(&root).unwrap_or(path);

                    // If include patterns are specified, path must match one
                    if let Some(ref include_set) = include_set
                        && !include_set.is_match(candidate)
                    {
                        if verbose {
                            return Some(Ok(WalkResult::Skipped {
                                path: path.to_path_buf(),
                                reason: SkipReason::ExcludedByPattern,
                            }));
                        } else {
                            return None;
                        }
                    }

                    // If path matches any exclude pattern, reject it
                    if let Some(ref exclude_set) = exclude_set
                        && exclude_set.is_match(candidate)
                    {
                        if verbose {
                            return Some(Ok(WalkResult::Skipped {
                                path: path.to_path_buf(),
                                reason: SkipReason::ExcludedByPattern,
                            }));
                        } else {
                            return None;
                        }
                    }

                    Some(Ok(WalkResult::File(FileEntry::new(path.to_path_buf()))))
                }
                Err(e) => Some(Err(FileWalkerError::Walk(e))),
            }
        })
    }
}
