#![forbid(unsafe_code)]

//! Checker definitions and registry

pub mod builtin;
pub mod checker;
pub mod registry;

pub use builtin::builtin_checkers;
pub use checker::{Checker, Target};
pub use registry::CheckerRegistry;
