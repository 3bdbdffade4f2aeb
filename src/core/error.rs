//! Configuration errors.

use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single structural problem found while validating a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Initial state '{initial}' is not declared")]
    UnknownInitialState { initial: String },

    #[error("Transition '{event}' from '{state}' targets undeclared state '{target}'")]
    UnknownTransitionTarget {
        state: String,
        event: String,
        target: String,
    },
}

/// Errors that can occur when constructing a state machine.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// No configuration was supplied
    #[error("No configuration supplied")]
    Missing,

    /// Configuration is structurally inconsistent
    #[error("Invalid configuration: {}", join_violations(.0))]
    Invalid(NonEmptyVec<ConfigViolation>),

    /// Configuration document could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Configuration could not be written back out as JSON
    #[error("Failed to serialize configuration: {0}")]
    Serialization(String),
}

fn join_violations(violations: &NonEmptyVec<ConfigViolation>) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
