//! File discovery and checker execution

pub mod executor;
pub mod file_walker;

pub use executor::{CheckerOutcome, CheckerReport, ExecutionEngine, RunResult, SkipCause};
pub use file_walker::{FileEntry, FileWalker, FileWalkerError};
