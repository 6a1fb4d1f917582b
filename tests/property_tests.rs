//! Property-based tests for transition resolution and the engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated definitions and event sequences.

use proptest::prelude::*;
use statemark::core::{
    resolve, resolve_assignment, Definition, EventDef, MachineError, Policy, StateDef,
    TransitionDef,
};
use statemark::engine::{Binding, Machine, StateMachineExt, Stateful};
use statemark::validation::{overlaps, validate};
use std::cell::RefCell;
use std::sync::Arc;

const STATES: [&str; 4] = ["idle", "queued", "active", "done"];
const EVENTS: [&str; 3] = ["push", "pull", "reset"];

prop_compose! {
    fn arbitrary_state()(index in 0..STATES.len()) -> String {
        STATES[index].to_string()
    }
}

prop_compose! {
    fn arbitrary_event()(index in 0..EVENTS.len()) -> String {
        EVENTS[index].to_string()
    }
}

prop_compose! {
    fn arbitrary_transition()(
        from in prop::collection::vec(arbitrary_state(), 1..3),
        to in arbitrary_state(),
    ) -> TransitionDef {
        if from.len() == 1 {
            TransitionDef::new(from[0].clone(), to)
        } else {
            TransitionDef::new(from, to)
        }
    }
}

prop_compose! {
    fn arbitrary_definition()(
        transitions in prop::collection::vec(
            prop::collection::vec(arbitrary_transition(), 1..4),
            EVENTS.len(),
        ),
        whiny in any::<bool>(),
    ) -> Definition {
        let events = EVENTS
            .iter()
            .zip(transitions)
            .map(|(name, transitions)| {
                let mut event = EventDef::new(*name);
                event.transitions = transitions;
                event
            })
            .collect();
        Definition::new(
            "status",
            STATES.iter().map(|name| StateDef::new(*name)).collect(),
            events,
            Policy {
                whiny_transitions: whiny,
                no_direct_assignment: false,
            },
        )
    }
}

thread_local! {
    static MACHINE: RefCell<Option<Arc<Machine<Task>>>> = const { RefCell::new(None) };
}

// Entity whose machine is built once from whatever definition the current
// test case installed.
struct Task {
    status: String,
    binding: Binding<Task>,
}

impl Task {
    fn with_definition(definition: &Definition, status: &str) -> Self {
        let machine = Arc::new(Machine::without_hooks(definition.clone()));
        MACHINE.with(|slot| *slot.borrow_mut() = Some(machine));
        Self {
            status: status.to_string(),
            binding: Binding::new(),
        }
    }
}

impl Stateful for Task {
    type Args = ();

    fn status(&self) -> &str {
        &self.status
    }

    fn set_status_raw(&mut self, status: &str) {
        self.status = status.to_string();
    }

    fn binding(&mut self) -> &mut Binding<Self> {
        &mut self.binding
    }

    fn declaration() -> Option<Arc<Machine<Self>>> {
        MACHINE.with(|slot| slot.borrow().clone())
    }
}

proptest! {
    #[test]
    fn generated_definitions_are_valid(definition in arbitrary_definition()) {
        prop_assert!(validate(&definition).is_success());
    }

    #[test]
    fn resolution_picks_first_admitting_transition(
        definition in arbitrary_definition(),
        state in arbitrary_state(),
        event in arbitrary_event(),
    ) {
        let resolved = resolve(&definition, &state, &event).unwrap();
        let expected = definition
            .find_event(&event)
            .unwrap()
            .transitions
            .iter()
            .find(|t| t.admits(&state));

        prop_assert_eq!(resolved, expected);
    }

    #[test]
    fn shadowed_transitions_are_never_resolved(definition in arbitrary_definition()) {
        for overlap in overlaps(&definition) {
            let event = definition.find_event(&overlap.event).unwrap();
            let resolved = resolve(&definition, &overlap.state, &overlap.event).unwrap();
            prop_assert_eq!(resolved, Some(&event.transitions[overlap.winner]));
            prop_assert!(overlap.winner < overlap.shadowed);
        }
    }

    #[test]
    fn can_trigger_agrees_with_trigger(
        definition in arbitrary_definition(),
        start in arbitrary_state(),
        events in prop::collection::vec(arbitrary_event(), 1..12),
    ) {
        let mut task = Task::with_definition(&definition, &start);

        for event in events {
            let before = task.status.clone();
            let possible = task.can_trigger(&event).unwrap();
            let outcome = task.trigger(&event, &());

            match outcome {
                Ok(true) => {
                    prop_assert!(possible);
                    let expected = resolve(&definition, &before, &event).unwrap().map(|t| t.to.clone());
                    prop_assert_eq!(Some(task.status.clone()), expected);
                }
                Ok(false) => {
                    prop_assert!(!possible);
                    prop_assert!(definition.whiny_transitions());
                    prop_assert_eq!(&task.status, &before);
                }
                Err(error) => {
                    prop_assert!(!possible);
                    prop_assert!(!definition.whiny_transitions());
                    let is_invalid_transition = matches!(error, MachineError::InvalidTransition { .. });
                    prop_assert!(is_invalid_transition);
                    prop_assert_eq!(&task.status, &before);
                }
            }
        }
    }

    #[test]
    fn assignment_succeeds_iff_some_transition_allows_it(
        definition in arbitrary_definition(),
        start in arbitrary_state(),
        target in arbitrary_state(),
    ) {
        let mut task = Task::with_definition(&definition, &start);
        let allowed = start == target
            || resolve_assignment(&definition, &start, &target).is_some();

        let result = task.assign(&target);

        prop_assert_eq!(result.is_ok(), allowed);
        if allowed {
            prop_assert_eq!(&task.status, &target);
        } else {
            prop_assert_eq!(&task.status, &start);
        }
    }

    #[test]
    fn blocked_assignment_never_changes_status(
        definition in arbitrary_definition(),
        start in arbitrary_state(),
        target in arbitrary_state(),
    ) {
        let blocked = Definition::new(
            definition.status_property(),
            definition.states().to_vec(),
            definition.events().to_vec(),
            Policy {
                whiny_transitions: definition.whiny_transitions(),
                no_direct_assignment: true,
            },
        );
        let mut task = Task::with_definition(&blocked, &start);

        prop_assert_eq!(task.assign(&target), Err(MachineError::DirectAssignmentDisabled));
        prop_assert_eq!(&task.status, &start);
    }
}
