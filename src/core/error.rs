//! Errors reported by the state machine engine.

use thiserror::Error;

/// Errors that can occur while binding or driving a state machine.
///
/// Every variant is returned to the immediate caller of the operation.
/// The one exception is [`MachineError::InvalidTransition`], which is
/// turned into `Ok(false)` when the definition enables whiny transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    /// The entity type declares no state machine.
    #[error("no state machine declared for entity type '{entity}'")]
    MissingDefinition { entity: String },

    #[error("state not found: '{state}'")]
    StateNotFound { state: String },

    #[error("event not found: '{event}'")]
    EventNotFound { event: String },

    /// A hook identifier used by the definition has no registered callable.
    #[error("hook not found: '{hook}'")]
    HookNotFound { hook: String },

    #[error("invalid transition: event '{event}' from state '{from}'")]
    InvalidTransition { event: String, from: String },

    #[error("direct assignment is disabled for this state machine")]
    DirectAssignmentDisabled,

    #[error("cannot assign status directly: current '{current}', requested '{requested}'")]
    DirectAssignmentInvalid { current: String, requested: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_transition_message_names_event_and_state() {
        let err = MachineError::InvalidTransition {
            event: "clean".to_string(),
            from: "sleeping".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "invalid transition: event 'clean' from state 'sleeping'"
        );
    }

    #[test]
    fn direct_assignment_message_names_both_statuses() {
        let err = MachineError::DirectAssignmentInvalid {
            current: "sleeping".to_string(),
            requested: "cleaning".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "cannot assign status directly: current 'sleeping', requested 'cleaning'"
        );
    }
}
