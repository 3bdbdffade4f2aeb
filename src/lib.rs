//! Stepwise: a small string-keyed finite state machine with undo/redo
//!
//! A machine is described by a configuration: an initial state plus, for
//! every state, a table mapping event names to destination states. The
//! machine can then be driven two ways:
//!
//! - **Direct jumps** with [`StateMachine::set_state`], to any declared state
//! - **Events** with [`StateMachine::fire`], following the current state's table
//!
//! Every successful move is recorded in a linear undo/redo history. A new
//! forward move discards the redo stack. [`StateMachine::reset`] returns to
//! the initial state but deliberately leaves both history stacks in place.
//!
//! Configurations are validated once at construction, reporting every
//! inconsistency together; afterwards each operation either applies fully
//! or fails without changing anything.
//!
//! # Example
//!
//! ```rust
//! use stepwise::StateMachine;
//!
//! let mut light = StateMachine::from_json(r#"{
//!     "initial": "green",
//!     "states": {
//!         "green":  { "transitions": { "next": "yellow" } },
//!         "yellow": { "transitions": { "next": "red" } },
//!         "red":    { "transitions": { "next": "green" } }
//!     }
//! }"#).unwrap();
//!
//! light.fire("next").unwrap();
//! light.fire("next").unwrap();
//! assert_eq!(light.current_state(), "red");
//!
//! assert!(light.undo());
//! assert!(light.undo());
//! assert_eq!(light.current_state(), "green");
//! assert!(!light.undo());
//!
//! assert_eq!(light.list_states(Some("next")), vec!["green", "yellow", "red"]);
//! assert!(light.list_states(Some("missing")).is_empty());
//! ```

pub mod builder;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use self::builder::ConfigBuilder;
pub use self::core::{
    ConfigViolation, ConfigurationError, MachineConfig, StateDefinition, StateTable, UndoHistory,
};
pub use self::error::{Error, Result};
pub use self::machine::{StateMachine, TransitionError};
