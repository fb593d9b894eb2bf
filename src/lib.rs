#![forbid(unsafe_code)]

//! checkrun: dispatch repository files to external checkers
//!
//! checkrun discovers candidate files (via a vcs-aware or raw filesystem
//! walk), partitions them by category, and invokes a fixed sequence of
//! external checkers, aggregating their exit statuses into one verdict.

pub mod checkers;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod types;

// Re-export error types for convenient access
pub use error::{CheckerError, ConfigError, DispatchError};

// Re-export core domain types for convenient access
pub use types::{Category, CheckerId, DiscoveryStrategy, GlobPattern};
