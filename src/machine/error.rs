//! Transition errors.

use thiserror::Error;

/// Errors that can occur when changing state.
///
/// A failed transition never mutates the machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Unknown state '{state}'")]
    UnknownState { state: String },

    #[error("No transition for event '{event}' from state '{state}'")]
    UnknownTransition { state: String, event: String },
}
