//! Checker registry: the effective, ordered checker set for a run
//!
//! The registry starts from the built-in sequence and applies configuration
//! (disable, argv override, extra args) and command-line selection. Built-in
//! order is preserved throughout; configuration never reorders checkers.

use crate::checkers::builtin::builtin_checkers;
use crate::checkers::checker::Checker;
use crate::config::checkrun_toml::{CheckerValue, Config};
use crate::error::CheckerError;
use crate::types::CheckerId;

/// Ordered collection of enabled checkers
#[derive(Debug, Clone, Default)]
pub struct CheckerRegistry {
    checkers: Vec<Checker>,
}

impl CheckerRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            checkers: Vec::new(),
        }
    }

    /// Creates a registry from an explicit checker sequence, preserving order
    pub fn from_checkers(checkers: impl IntoIterator<Item = Checker>) -> Self {
        Self {
            checkers: checkers.into_iter().collect(),
        }
    }

    /// Builds the registry from the built-in set with config applied.
    ///
    /// # Errors
    ///
    /// Returns `CheckerError::InvalidDefinition` if the config names an
    /// unknown checker or overrides a command with an empty argv.
    pub fn build_from_config(config: &Config) -> Result<Self, CheckerError> {
        let mut checkers = builtin_checkers();
        let mut disabled: Vec<CheckerId> = Vec::new();

        for (id, value) in &config.checkers {
            let Some(checker) = checkers.iter_mut().find(|c| &c.id == id) else {
                return Err(CheckerError::InvalidDefinition(format!(
                    "unknown checker '{}' in configuration",
                    id.as_str()
                )));
            };

            match value {
                CheckerValue::Enabled(true) => {}
                CheckerValue::Enabled(false) => disabled.push(id.clone()),
                CheckerValue::Settings(settings) => {
                    if let Some(command) = &settings.command {
                        if command.is_empty() {
                            return Err(CheckerError::InvalidDefinition(format!(
                                "checker '{}' has an empty command override",
                                id.as_str()
                            )));
                        }
                        checker.command = command.clone();
                    }
                    if let Some(args) = &settings.args {
                        checker.command.extend(args.iter().cloned());
                    }
                }
            }
        }

        checkers.retain(|c| !disabled.contains(&c.id));

        Ok(Self { checkers })
    }

    /// Restricts the registry to the given checker IDs, preserving order.
    ///
    /// # Errors
    ///
    /// Returns `CheckerError::InvalidDefinition` if an ID does not name an
    /// enabled checker.
    pub fn retain_only(&mut self, only: &[CheckerId]) -> Result<(), CheckerError> {
        if only.is_empty() {
            return Ok(());
        }

        for id in only {
            if !self.checkers.iter().any(|c| &c.id == id) {
                return Err(CheckerError::InvalidDefinition(format!(
                    "checker '{}' is not enabled or does not exist",
                    id.as_str()
                )));
            }
        }

        self.checkers.retain(|c| only.contains(&c.id));
        Ok(())
    }

    /// Number of enabled checkers
    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    /// Whether the registry has no enabled checkers
    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }

    /// Iterates over the checkers in invocation order
    pub fn iter(&self) -> impl Iterator<Item = &Checker> {
        self.checkers.iter()
    }
}
