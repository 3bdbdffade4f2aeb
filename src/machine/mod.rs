//! The state machine and its operations.
//!
//! A [`StateMachine`] owns its configuration, its current state, and an
//! [`UndoHistory`]. Forward moves (`set_state`, `fire`) push the departed
//! state onto the undo stack and invalidate redo; `undo`/`redo` move between
//! the two stacks; `reset` jumps back to the initial state without touching
//! either stack.

mod error;

pub use error::TransitionError;

use crate::builder::ConfigBuilder;
use crate::core::{ConfigurationError, MachineConfig, StateTable, UndoHistory};
use std::mem;
use stillwater::validation::Validation;
use tracing::debug;

/// String-keyed finite state machine with linear undo/redo history.
///
/// # Example
///
/// ```rust
/// use stepwise::StateMachine;
///
/// let mut light = StateMachine::builder()
///     .initial("green")
///     .state("green", [("next", "yellow")])
///     .state("yellow", [("next", "red")])
///     .state("red", [("next", "green")])
///     .build()
///     .unwrap();
///
/// light.fire("next").unwrap();
/// light.fire("next").unwrap();
/// assert_eq!(light.current_state(), "red");
///
/// assert!(light.undo());
/// assert_eq!(light.current_state(), "yellow");
/// assert!(light.redo());
/// assert_eq!(light.current_state(), "red");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: MachineConfig,
    current: String,
    history: UndoHistory,
}

impl StateMachine {
    /// Create a machine in the configured initial state.
    ///
    /// Fails with [`ConfigurationError::Invalid`] if the initial state is
    /// not declared or any transition targets an undeclared state.
    pub fn new(config: MachineConfig) -> Result<Self, ConfigurationError> {
        if let Validation::Failure(violations) = config.validate() {
            debug!(violations = violations.len(), "rejected machine configuration");
            return Err(ConfigurationError::Invalid(violations));
        }

        let current = config.initial.clone();
        debug!(initial = %current, states = config.states.len(), "state machine created");

        Ok(Self {
            config,
            current,
            history: UndoHistory::new(),
        })
    }

    /// Parse a JSON configuration document and build a machine from it.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        Self::new(MachineConfig::from_json(json)?)
    }

    /// Start a fluent configuration.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    pub fn current_state(&self) -> &str {
        &self.current
    }

    pub fn initial_state(&self) -> &str {
        &self.config.initial
    }

    pub fn states(&self) -> &StateTable {
        &self.config.states
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Jump directly to `state`, ignoring the transition table.
    ///
    /// Records the departed state for undo and discards redo history.
    pub fn set_state(&mut self, state: &str) -> Result<(), TransitionError> {
        if !self.config.states.contains(state) {
            debug!(from = %self.current, to = state, "rejected jump to unknown state");
            return Err(TransitionError::UnknownState {
                state: state.to_string(),
            });
        }

        self.advance(state.to_string(), None);
        Ok(())
    }

    /// Follow the current state's transition for `event`.
    ///
    /// Records the departed state for undo and discards redo history.
    pub fn fire(&mut self, event: &str) -> Result<(), TransitionError> {
        let Some(target) = self
            .config
            .states
            .get(&self.current)
            .and_then(|definition| definition.target(event))
        else {
            debug!(state = %self.current, event, "no transition for event");
            return Err(TransitionError::UnknownTransition {
                state: self.current.clone(),
                event: event.to_string(),
            });
        };

        let target = target.to_string();
        self.advance(target, Some(event));
        Ok(())
    }

    fn advance(&mut self, to: String, event: Option<&str>) {
        let from = mem::replace(&mut self.current, to);
        debug!(from = %from, to = %self.current, event, "state changed");
        self.history.record(from);
    }

    /// Return to the initial state.
    ///
    /// Undo and redo history are left exactly as they were, so an `undo`
    /// right after `reset` restores whatever preceded the last recorded
    /// move, not the state that was active when `reset` was called.
    pub fn reset(&mut self) {
        debug!(from = %self.current, to = %self.config.initial, "reset to initial state");
        self.current.clone_from(&self.config.initial);
    }

    /// State names in declaration order.
    ///
    /// With `Some(event)`, only states whose transition table handles
    /// `event` are listed.
    pub fn list_states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            None => self.config.states.names().collect(),
            Some(event) => self
                .config
                .states
                .iter()
                .filter(|(_, definition)| definition.handles(event))
                .map(|(name, _)| name)
                .collect(),
        }
    }

    /// Step back to the previous state. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        let from = self.current.clone();
        let moved = self.history.undo(&mut self.current);
        if moved {
            debug!(from = %from, to = %self.current, "undo");
        }
        moved
    }

    /// Re-apply the last undone move. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        let from = self.current.clone();
        let moved = self.history.redo(&mut self.current);
        if moved {
            debug!(from = %from, to = %self.current, "redo");
        }
        moved
    }

    /// Forget all undo and redo entries. The current state is unchanged.
    pub fn clear_history(&mut self) {
        debug!(
            undo = self.history.undo_stack().len(),
            redo = self.history.redo_stack().len(),
            "history cleared"
        );
        self.history.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Whether `event` has a transition from the current state.
    pub fn can_fire(&self, event: &str) -> bool {
        self.config
            .states
            .get(&self.current)
            .is_some_and(|definition| definition.handles(event))
    }

    /// Events with a transition from the current state, sorted by name.
    pub fn available_events(&self) -> Vec<&str> {
        self.config
            .states
            .get(&self.current)
            .map(|definition| definition.events().collect())
            .unwrap_or_default()
    }

    /// Whether the current state has no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        self.available_events().is_empty()
    }
}

impl TryFrom<MachineConfig> for StateMachine {
    type Error = ConfigurationError;

    fn try_from(config: MachineConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

impl TryFrom<Option<MachineConfig>> for StateMachine {
    type Error = ConfigurationError;

    fn try_from(config: Option<MachineConfig>) -> Result<Self, Self::Error> {
        Self::new(config.ok_or(ConfigurationError::Missing)?)
    }
}
