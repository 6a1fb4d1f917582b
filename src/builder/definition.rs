//! Builder for constructing state machine definitions.

use crate::builder::error::BuildError;
use crate::builder::transition::EventBuilder;
use crate::core::{Definition, EventDef, Policy, StateDef};
use std::collections::HashSet;

/// Builder for constructing definitions with a fluent API.
#[derive(Debug)]
pub struct DefinitionBuilder {
    status_property: String,
    states: Vec<StateDef>,
    events: Vec<EventDef>,
    policy: Policy,
}

impl DefinitionBuilder {
    /// Create a new builder for a machine stored in `status_property`.
    pub fn new(status_property: impl Into<String>) -> Self {
        Self {
            status_property: status_property.into(),
            states: Vec::new(),
            events: Vec::new(),
            policy: Policy::default(),
        }
    }

    /// Declare a state. Declaration order is kept.
    pub fn state(mut self, state: StateDef) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = StateDef>) -> Self {
        self.states.extend(states);
        self
    }

    /// Add an event using a builder.
    /// Returns an error if the builder fails validation.
    pub fn event(mut self, builder: EventBuilder) -> Result<Self, BuildError> {
        let event = builder.build()?;
        self.events.push(event);
        Ok(self)
    }

    /// Add a pre-built event.
    pub fn add_event(mut self, event: EventDef) -> Self {
        self.events.push(event);
        self
    }

    /// Return `Ok(false)` instead of an error when an event has no
    /// transition from the current status.
    pub fn whiny_transitions(mut self, enabled: bool) -> Self {
        self.policy.whiny_transitions = enabled;
        self
    }

    /// Reject every direct status assignment.
    pub fn no_direct_assignment(mut self, enabled: bool) -> Self {
        self.policy.no_direct_assignment = enabled;
        self
    }

    /// Build the definition.
    /// Returns an error if it is structurally incomplete.
    pub fn build(self) -> Result<Definition, BuildError> {
        if self.status_property.is_empty() {
            return Err(BuildError::MissingStatusProperty);
        }
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut state_names = HashSet::new();
        for state in &self.states {
            if state.name.is_empty() {
                return Err(BuildError::EmptyStateName);
            }
            if !state_names.insert(state.name.as_str()) {
                return Err(BuildError::DuplicateState {
                    name: state.name.clone(),
                });
            }
        }

        let mut event_names = HashSet::new();
        for event in &self.events {
            if event.name.is_empty() {
                return Err(BuildError::EmptyEventName);
            }
            if !event_names.insert(event.name.as_str()) {
                return Err(BuildError::DuplicateEvent {
                    name: event.name.clone(),
                });
            }
            if event.transitions.is_empty() {
                return Err(BuildError::NoTransitions {
                    event: event.name.clone(),
                });
            }
            for transition in &event.transitions {
                if transition.from.is_empty() {
                    return Err(BuildError::MissingFromState);
                }
                if transition.to.is_empty() {
                    return Err(BuildError::MissingToState);
                }
            }
        }

        Ok(Definition::new(
            self.status_property,
            self.states,
            self.events,
            self.policy,
        ))
    }
}
