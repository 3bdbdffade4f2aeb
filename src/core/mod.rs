//! Core configuration and history types.
//!
//! This module contains the data the state machine is built from:
//! - Declarative configuration (`MachineConfig`, `StateTable`, `StateDefinition`)
//! - Consistency checks that report every violation at once
//! - The two-stack undo/redo history
//!
//! Nothing in this module logs or performs I/O.

mod config;
mod error;
mod history;

pub use config::{MachineConfig, StateDefinition, StateTable};
pub use error::{ConfigViolation, ConfigurationError};
pub use history::UndoHistory;
