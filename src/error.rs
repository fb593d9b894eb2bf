//! Error types for checkrun
//!
//! This module defines the error types used throughout the dispatcher,
//! following a hierarchical structure with specific error variants for
//! different error categories.

use crate::types::CheckerId;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid configuration syntax
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Semantically invalid configuration
    #[error("Invalid configuration: {0}")]
    Validation(String),

    /// I/O error while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Checker invocation errors
///
/// These are fatal for the run, as opposed to checker findings which are
/// reported through exit statuses.
#[derive(Debug, thiserror::Error)]
pub enum CheckerError {
    /// The checker binary is not on the execution path
    #[error("Checker '{id}' not found: '{program}' is not installed or not on PATH")]
    MissingTool { id: CheckerId, program: String },

    /// The checker binary exists but could not be started
    #[error("Checker '{id}' failed to start: {source}")]
    Launch {
        id: CheckerId,
        #[source]
        source: std::io::Error,
    },

    /// Invalid checker definition (empty command, unknown ID)
    #[error("Invalid checker definition: {0}")]
    InvalidDefinition(String),
}

/// Top-level error type for checkrun
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Checker invocation error
    #[error("Checker error: {0}")]
    Checker(#[from] CheckerError),

    /// File discovery error
    #[error("Discovery error: {0}")]
    Walk(#[from] crate::engine::file_walker::FileWalkerError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
