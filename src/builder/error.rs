//! Build errors for definition, event and transition builders.

use thiserror::Error;

/// Errors that can occur when building definitions, events and transitions.
///
/// Only structural completeness is checked here. Whether a transition
/// refers to declared states is left to [`validate`](crate::validation::validate).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Status property not specified. Pass a non-empty name to DefinitionBuilder::new")]
    MissingStatusProperty,

    #[error("No states defined. Add at least one state with .state()")]
    NoStates,

    #[error("State name is empty")]
    EmptyStateName,

    #[error("State '{name}' declared more than once")]
    DuplicateState { name: String },

    #[error("Event name is empty")]
    EmptyEventName,

    #[error("Event '{name}' declared more than once")]
    DuplicateEvent { name: String },

    #[error("Event '{event}' has no transitions. Add at least one with .transition()")]
    NoTransitions { event: String },

    #[error("Transition source state not specified. Call .from(state) or .from_any(states)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,
}
