//! Builder for assembling machine configurations.

use crate::core::{ConfigurationError, MachineConfig, StateDefinition, StateTable};
use crate::machine::StateMachine;

/// Builder for constructing configurations and machines with a fluent API.
///
/// States appear in [`StateMachine::list_states`] in the order they are
/// first declared here.
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<String>,
    states: StateTable,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with its full transition table.
    ///
    /// Declaring the same state again replaces its table but keeps its
    /// position.
    pub fn state<I, E, T>(mut self, name: impl Into<String>, transitions: I) -> Self
    where
        I: IntoIterator<Item = (E, T)>,
        E: Into<String>,
        T: Into<String>,
    {
        self.states
            .insert(name, StateDefinition::with_transitions(transitions));
        self
    }

    /// Declare a state with no outgoing transitions.
    ///
    /// Leaves an existing declaration untouched.
    pub fn terminal(mut self, name: impl Into<String>) -> Self {
        self.states.entry(name);
        self
    }

    /// Add a single transition, declaring `from` if needed.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .entry(from)
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Finish without validating.
    ///
    /// Fails with [`ConfigurationError::Missing`] if no initial state was set.
    pub fn config(self) -> Result<MachineConfig, ConfigurationError> {
        let initial = self.initial.ok_or(ConfigurationError::Missing)?;
        Ok(MachineConfig::new(initial, self.states))
    }

    /// Build and validate the state machine.
    pub fn build(self) -> Result<StateMachine, ConfigurationError> {
        StateMachine::new(self.config()?)
    }
}
