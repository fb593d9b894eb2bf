//! CLI argument parsing and command dispatch

pub mod args;
pub mod common;
pub mod init;
pub mod list;
pub mod run;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, Command, DiscoveryMode, OutputFormatArg};
