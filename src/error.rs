//! Crate-level error type.

use crate::core::ConfigurationError;
use crate::machine::TransitionError;

/// Any error produced by this crate.
///
/// Useful when one function both builds a machine and drives it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

pub type Result<T> = std::result::Result<T, Error>;
