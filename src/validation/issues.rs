//! Problems a definition can have.

use serde::Serialize;
use thiserror::Error;

/// A structural problem found by [`validate`](crate::validation::validate).
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
pub enum DefinitionIssue {
    #[error("status property name is empty")]
    EmptyStatusProperty,

    #[error("no states declared")]
    NoStates,

    #[error("state #{index} has an empty name")]
    EmptyStateName { index: usize },

    #[error("state '{name}' is declared more than once")]
    DuplicateState { name: String },

    #[error("event #{index} has an empty name")]
    EmptyEventName { index: usize },

    #[error("event '{name}' is declared more than once")]
    DuplicateEvent { name: String },

    #[error("event '{event}' has no transitions")]
    NoTransitions { event: String },

    #[error("transition #{transition} of event '{event}' has no source state")]
    EmptySource { event: String, transition: usize },

    #[error("event '{event}' leaves from undeclared state '{state}'")]
    UnknownSourceState { event: String, state: String },

    #[error("event '{event}' leads to undeclared state '{state}'")]
    UnknownTargetState { event: String, state: String },
}

/// Two transitions of one event that both admit `state`.
///
/// Resolution always picks transition `winner`, so transition `shadowed`
/// can never run from `state`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overlap {
    pub event: String,
    pub state: String,
    pub winner: usize,
    pub shadowed: usize,
}
