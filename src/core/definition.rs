//! The immutable declaration of one entity type's state machine.

use super::error::MachineError;
use super::state::StateDef;
use super::transition::EventDef;
use serde::{Deserialize, Serialize};

/// The two independent safety policies of a definition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    /// When set, an event with no matching transition returns `false`
    /// instead of failing with [`MachineError::InvalidTransition`].
    #[serde(default)]
    pub whiny_transitions: bool,

    /// When set, direct status assignment always fails.
    #[serde(default)]
    pub no_direct_assignment: bool,
}

/// Declarative description of states, events, transitions and policies.
///
/// A definition is built once (with [`DefinitionBuilder`], from a config
/// file, or directly with [`Definition::new`]) and then shared read-only
/// by every entity of the type. State and event references inside
/// transitions are not checked on construction; a dangling reference is
/// reported as [`MachineError::StateNotFound`] when it is first used.
/// Use [`crate::validation::validate`] to check everything up front.
///
/// [`DefinitionBuilder`]: crate::builder::DefinitionBuilder
///
/// # Example
///
/// ```rust
/// use statemark::core::{Definition, EventDef, Policy, StateDef, TransitionDef};
///
/// let mut run = EventDef::new("run");
/// run.transitions.push(TransitionDef::new("sleeping", "running"));
///
/// let definition = Definition::new(
///     "status",
///     vec![StateDef::new("sleeping"), StateDef::new("running")],
///     vec![run],
///     Policy::default(),
/// );
///
/// assert_eq!(definition.status_property(), "status");
/// assert!(definition.find_state("running").is_ok());
/// assert!(definition.find_event("clean").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(rename = "property")]
    status_property: String,
    states: Vec<StateDef>,
    #[serde(default)]
    events: Vec<EventDef>,
    #[serde(flatten)]
    policy: Policy,
}

impl Definition {
    pub fn new(
        status_property: impl Into<String>,
        states: Vec<StateDef>,
        events: Vec<EventDef>,
        policy: Policy,
    ) -> Self {
        Self {
            status_property: status_property.into(),
            states,
            events,
            policy,
        }
    }

    /// Name of the entity field holding the status.
    pub fn status_property(&self) -> &str {
        &self.status_property
    }

    /// States in declaration order.
    pub fn states(&self) -> &[StateDef] {
        &self.states
    }

    /// Events in declaration order.
    pub fn events(&self) -> &[EventDef] {
        &self.events
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn whiny_transitions(&self) -> bool {
        self.policy.whiny_transitions
    }

    pub fn no_direct_assignment(&self) -> bool {
        self.policy.no_direct_assignment
    }

    /// Look up a state by its exact name.
    pub fn find_state(&self, name: &str) -> Result<&StateDef, MachineError> {
        self.states
            .iter()
            .find(|state| state.name == name)
            .ok_or_else(|| MachineError::StateNotFound {
                state: name.to_string(),
            })
    }

    /// Look up an event by its exact name.
    pub fn find_event(&self, name: &str) -> Result<&EventDef, MachineError> {
        self.events
            .iter()
            .find(|event| event.name == name)
            .ok_or_else(|| MachineError::EventNotFound {
                event: name.to_string(),
            })
    }

    /// Every hook identifier referenced anywhere in the definition.
    ///
    /// May contain duplicates when several declarations share a hook.
    pub fn hook_identifiers(&self) -> impl Iterator<Item = &str> {
        self.states
            .iter()
            .flat_map(|state| state.hooks.identifiers())
            .chain(self.events.iter().flat_map(|event| event.hook_identifiers()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TransitionDef;

    fn job_definition() -> Definition {
        let mut run = EventDef::new("run");
        run.transitions.push(TransitionDef::new("sleeping", "running"));
        run.before = Some("before_run".to_string());

        Definition::new(
            "status",
            vec![
                StateDef::new("sleeping").exit("leave_bed"),
                StateDef::new("running"),
            ],
            vec![run],
            Policy::default(),
        )
    }

    #[test]
    fn find_state_returns_declared_state() {
        let definition = job_definition();

        let state = definition.find_state("sleeping").unwrap();
        assert_eq!(state.name, "sleeping");
    }

    #[test]
    fn find_state_reports_missing_state() {
        let definition = job_definition();

        assert_eq!(
            definition.find_state("cleaning"),
            Err(MachineError::StateNotFound {
                state: "cleaning".to_string()
            })
        );
    }

    #[test]
    fn find_event_reports_missing_event() {
        let definition = job_definition();

        assert!(matches!(
            definition.find_event("clean"),
            Err(MachineError::EventNotFound { event }) if event == "clean"
        ));
    }

    #[test]
    fn policies_default_to_strict_and_assignable() {
        let definition = job_definition();

        assert!(!definition.whiny_transitions());
        assert!(!definition.no_direct_assignment());
    }

    #[test]
    fn hook_identifiers_cover_states_and_events() {
        let definition = job_definition();

        let hooks: Vec<&str> = definition.hook_identifiers().collect();
        assert_eq!(hooks, vec!["leave_bed", "before_run"]);
    }

    #[test]
    fn definition_serializes_with_declaration_field_names() {
        let definition = Definition::new(
            "status",
            vec![StateDef::new("idle")],
            Vec::new(),
            Policy {
                whiny_transitions: true,
                no_direct_assignment: false,
            },
        );

        let json = serde_json::to_value(&definition).unwrap();
        assert_eq!(json["property"], "status");
        assert_eq!(json["whinyTransitions"], true);
        assert_eq!(json["noDirectAssignment"], false);

        let back: Definition = serde_json::from_value(json).unwrap();
        assert_eq!(back, definition);
    }

    #[test]
    fn omitted_policies_deserialize_as_false() {
        let definition: Definition = serde_json::from_str(
            r#"{ "property": "status", "states": [{ "name": "idle" }] }"#,
        )
        .unwrap();

        assert_eq!(definition.policy(), Policy::default());
        assert!(definition.events().is_empty());
    }
}
