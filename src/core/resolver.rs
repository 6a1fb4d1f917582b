//! Transition resolution.
//!
//! Both functions are pure: they read the definition and a status value
//! and never touch an entity. Event execution and the capability check
//! share [`resolve`], so "can" and "does" cannot drift apart.

use super::definition::Definition;
use super::error::MachineError;
use super::transition::TransitionDef;

/// Find the transition `event` takes from `current`.
///
/// Transitions are tried in declaration order and the first one whose
/// source set admits `current` wins, even when a later transition would
/// also match. Returns `Ok(None)` when no transition applies and
/// [`MachineError::EventNotFound`] when the event is not declared.
///
/// # Example
///
/// ```rust
/// use statemark::builder::{simple_transition, DefinitionBuilder, EventBuilder};
/// use statemark::core::{resolve, StateDef};
///
/// let definition = DefinitionBuilder::new("status")
///     .state(StateDef::new("sleeping"))
///     .state(StateDef::new("running"))
///     .event(EventBuilder::new("run").add_transition(simple_transition("sleeping", "running")))
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let transition = resolve(&definition, "sleeping", "run").unwrap();
/// assert_eq!(transition.map(|t| t.to.as_str()), Some("running"));
/// assert!(resolve(&definition, "running", "run").unwrap().is_none());
/// ```
pub fn resolve<'d>(
    definition: &'d Definition,
    current: &str,
    event: &str,
) -> Result<Option<&'d TransitionDef>, MachineError> {
    let event = definition.find_event(event)?;
    Ok(event.transition_from(current))
}

/// Find a transition, in any event, that moves `current` to `requested`.
///
/// Events are scanned in declaration order, then their transitions in
/// declaration order; the first match is returned.
pub fn resolve_assignment<'d>(
    definition: &'d Definition,
    current: &str,
    requested: &str,
) -> Option<&'d TransitionDef> {
    definition
        .events()
        .iter()
        .flat_map(|event| event.transitions.iter())
        .find(|transition| transition.admits(current) && transition.to == requested)
}
