//! Declarative machine configuration.
//!
//! A configuration is a named initial state plus a table of state
//! definitions, each carrying its own event -> destination mapping. The
//! serialized shape is:
//!
//! ```json
//! {
//!   "initial": "green",
//!   "states": {
//!     "green":  { "transitions": { "next": "yellow" } },
//!     "yellow": { "transitions": { "next": "red" } },
//!     "red":    { "transitions": { "next": "green" } }
//!   }
//! }
//! ```
//!
//! State order in the document is preserved, since `list_states` reports
//! states in declaration order.

use super::error::{ConfigViolation, ConfigurationError};
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Transition table for a single state.
///
/// Maps event names to destination state names. A state whose document
/// entry omits `transitions` has an empty table; an event listed twice in
/// the same table is rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    #[serde(default, deserialize_with = "unique_transitions")]
    pub transitions: BTreeMap<String, String>,
}

struct TransitionsVisitor;

impl<'de> Visitor<'de> for TransitionsVisitor {
    type Value = BTreeMap<String, String>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of event names to destination states")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut transitions = BTreeMap::new();
        while let Some((event, target)) = access.next_entry::<String, String>()? {
            if transitions.contains_key(&event) {
                return Err(de::Error::custom(format!("duplicate event `{event}`")));
            }
            transitions.insert(event, target);
        }
        Ok(transitions)
    }
}

fn unique_transitions<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, String>, D::Error> {
    deserializer.deserialize_map(TransitionsVisitor)
}

impl StateDefinition {
    /// Create a definition with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a definition from `(event, target)` pairs.
    pub fn with_transitions<I, E, T>(transitions: I) -> Self
    where
        I: IntoIterator<Item = (E, T)>,
        E: Into<String>,
        T: Into<String>,
    {
        Self {
            transitions: transitions
                .into_iter()
                .map(|(event, target)| (event.into(), target.into()))
                .collect(),
        }
    }

    /// Destination for `event`, if this state defines one.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Whether this state reacts to `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// Event names this state reacts to, in sorted order.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.transitions.keys().map(String::as_str)
    }
}

/// Insertion-ordered table of state definitions keyed by state name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateTable {
    order: Vec<String>,
    definitions: HashMap<String, StateDefinition>,
}

impl StateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a definition.
    ///
    /// A replaced state keeps its original position. Returns the previous
    /// definition, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        definition: StateDefinition,
    ) -> Option<StateDefinition> {
        let name = name.into();
        match self.definitions.insert(name.clone(), definition) {
            Some(previous) => Some(previous),
            None => {
                self.order.push(name);
                None
            }
        }
    }

    /// Mutable access to a definition, inserting an empty one if absent.
    pub fn entry(&mut self, name: impl Into<String>) -> &mut StateDefinition {
        let name = name.into();
        if !self.definitions.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.definitions.entry(name).or_default()
    }

    pub fn get(&self, name: &str) -> Option<&StateDefinition> {
        self.definitions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// State names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(name, definition)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateDefinition)> {
        self.order
            .iter()
            .filter_map(|name| self.definitions.get(name).map(|def| (name.as_str(), def)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, StateDefinition)> for StateTable {
    fn from_iter<I: IntoIterator<Item = (N, StateDefinition)>>(iter: I) -> Self {
        let mut table = StateTable::new();
        for (name, definition) in iter {
            table.insert(name, definition);
        }
        table
    }
}

impl Serialize for StateTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, definition) in self.iter() {
            map.serialize_entry(name, definition)?;
        }
        map.end()
    }
}

struct StateTableVisitor;

impl<'de> Visitor<'de> for StateTableVisitor {
    type Value = StateTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of state names to state definitions")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StateTable, A::Error> {
        let mut table = StateTable::new();
        while let Some((name, definition)) = access.next_entry::<String, StateDefinition>()? {
            if table.contains(&name) {
                return Err(de::Error::custom(format!("duplicate state `{name}`")));
            }
            table.insert(name, definition);
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for StateTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StateTableVisitor)
    }
}

/// Initial state plus the full state table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub initial: String,
    pub states: StateTable,
}

impl MachineConfig {
    pub fn new(initial: impl Into<String>, states: StateTable) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Parse a configuration document.
    ///
    /// A document that is `null` is reported as a missing configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str::<Option<Self>>(json)
            .map_err(|e| ConfigurationError::Parse(e.to_string()))?
            .ok_or(ConfigurationError::Missing)
    }

    /// Same as [`MachineConfig::from_json`], for an already-parsed value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigurationError> {
        serde_json::from_value::<Option<Self>>(value)
            .map_err(|e| ConfigurationError::Parse(e.to_string()))?
            .ok_or(ConfigurationError::Missing)
    }

    pub fn to_json(&self) -> Result<String, ConfigurationError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConfigurationError::Serialization(e.to_string()))
    }

    /// Check structural consistency, collecting every violation.
    ///
    /// The initial state must be declared, and every transition must
    /// target a declared state.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        let initial_check = if self.states.contains(&self.initial) {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::UnknownInitialState {
                initial: self.initial.clone(),
            })
        };
        checks.push(initial_check);

        for (state, definition) in self.states.iter() {
            for (event, target) in &definition.transitions {
                let check = if self.states.contains(target) {
                    Validation::success(())
                } else {
                    Validation::fail(ConfigViolation::UnknownTransitionTarget {
                        state: state.to_string(),
                        event: event.clone(),
                        target: target.clone(),
                    })
                };
                checks.push(check);
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
