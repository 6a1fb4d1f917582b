//! Accumulating validation of definitions.

use crate::core::Definition;
use crate::validation::issues::{DefinitionIssue, Overlap};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<DefinitionIssue>>;

fn check(passes: bool, issue: impl FnOnce() -> DefinitionIssue) -> Check {
    if passes {
        Validation::success(())
    } else {
        Validation::fail(issue())
    }
}

/// Validate a definition, accumulating ALL issues.
///
/// Returns `Validation::Success(())` when the definition is well formed,
/// otherwise `Validation::Failure` with every issue found.
pub fn validate(definition: &Definition) -> Validation<(), NonEmptyVec<DefinitionIssue>> {
    let mut checks: Vec<Check> = Vec::new();

    checks.push(check(!definition.status_property().is_empty(), || {
        DefinitionIssue::EmptyStatusProperty
    }));
    checks.push(check(!definition.states().is_empty(), || {
        DefinitionIssue::NoStates
    }));

    let mut state_names = HashSet::new();
    for (index, state) in definition.states().iter().enumerate() {
        checks.push(check(!state.name.is_empty(), || {
            DefinitionIssue::EmptyStateName { index }
        }));
        checks.push(check(state_names.insert(state.name.as_str()), || {
            DefinitionIssue::DuplicateState {
                name: state.name.clone(),
            }
        }));
    }

    let mut event_names = HashSet::new();
    for (index, event) in definition.events().iter().enumerate() {
        checks.push(check(!event.name.is_empty(), || {
            DefinitionIssue::EmptyEventName { index }
        }));
        checks.push(check(event_names.insert(event.name.as_str()), || {
            DefinitionIssue::DuplicateEvent {
                name: event.name.clone(),
            }
        }));
        checks.push(check(!event.transitions.is_empty(), || {
            DefinitionIssue::NoTransitions {
                event: event.name.clone(),
            }
        }));

        for (position, transition) in event.transitions.iter().enumerate() {
            checks.push(check(!transition.from.is_empty(), || {
                DefinitionIssue::EmptySource {
                    event: event.name.clone(),
                    transition: position,
                }
            }));
            for source in transition.from.names() {
                checks.push(check(state_names.contains(source.as_str()), || {
                    DefinitionIssue::UnknownSourceState {
                        event: event.name.clone(),
                        state: source.clone(),
                    }
                }));
            }
            checks.push(check(state_names.contains(transition.to.as_str()), || {
                DefinitionIssue::UnknownTargetState {
                    event: event.name.clone(),
                    state: transition.to.clone(),
                }
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Every issue [`validate`] finds, in discovery order.
pub fn collect_issues(definition: &Definition) -> Vec<DefinitionIssue> {
    match validate(definition) {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

/// Transitions shadowed by an earlier transition of the same event.
///
/// Overlaps are legal: the earlier transition always wins. They are
/// reported because they usually point at an authoring mistake.
pub fn overlaps(definition: &Definition) -> Vec<Overlap> {
    let mut found = Vec::new();

    for event in definition.events() {
        for (shadowed, later) in event.transitions.iter().enumerate() {
            for state in later.from.names() {
                let winner = event.transitions[..shadowed]
                    .iter()
                    .position(|earlier| earlier.admits(state));
                if let Some(winner) = winner {
                    found.push(Overlap {
                        event: event.name.clone(),
                        state: state.clone(),
                        winner,
                        shadowed,
                    });
                }
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EventDef, FromStates, Policy, StateDef, TransitionDef};

    fn job_definition() -> Definition {
        let mut run = EventDef::new("run");
        run.transitions.push(TransitionDef::new("sleeping", "running"));
        let mut sleep = EventDef::new("sleep");
        sleep
            .transitions
            .push(TransitionDef::new(vec!["running", "cleaning"], "sleeping"));

        Definition::new(
            "status",
            vec![
                StateDef::new("sleeping"),
                StateDef::new("running"),
                StateDef::new("cleaning"),
            ],
            vec![run, sleep],
            Policy::default(),
        )
    }

    #[test]
    fn well_formed_definition_passes() {
        assert!(validate(&job_definition()).is_success());
        assert!(collect_issues(&job_definition()).is_empty());
    }

    #[test]
    fn validation_accumulates_all_issues() {
        let mut run = EventDef::new("run");
        run.transitions.push(TransitionDef::new("sleeping", "flying"));
        run.transitions.push(TransitionDef::new(FromStates::Any(Vec::new()), "running"));
        let empty = EventDef::new("idle");

        let definition = Definition::new(
            "",
            vec![StateDef::new("sleeping"), StateDef::new("running"), StateDef::new("running")],
            vec![run, empty],
            Policy::default(),
        );

        let result = validate(&definition);

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 5);

                let found: Vec<DefinitionIssue> = errors.iter().cloned().collect();
                assert!(found.contains(&DefinitionIssue::EmptyStatusProperty));
                assert!(found.contains(&DefinitionIssue::DuplicateState {
                    name: "running".to_string()
                }));
                assert!(found.contains(&DefinitionIssue::UnknownTargetState {
                    event: "run".to_string(),
                    state: "flying".to_string()
                }));
                assert!(found.contains(&DefinitionIssue::EmptySource {
                    event: "run".to_string(),
                    transition: 1
                }));
                assert!(found.contains(&DefinitionIssue::NoTransitions {
                    event: "idle".to_string()
                }));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn unknown_source_state_is_reported() {
        let mut clean = EventDef::new("clean");
        clean.transitions.push(TransitionDef::new("dirty", "cleaning"));
        let definition = Definition::new(
            "status",
            vec![StateDef::new("cleaning")],
            vec![clean],
            Policy::default(),
        );

        assert_eq!(
            collect_issues(&definition),
            vec![DefinitionIssue::UnknownSourceState {
                event: "clean".to_string(),
                state: "dirty".to_string()
            }]
        );
    }

    #[test]
    fn duplicate_events_and_missing_states_are_reported() {
        let mut first = EventDef::new("go");
        first.transitions.push(TransitionDef::new("a", "a"));
        let second = first.clone();
        let definition = Definition::new("status", Vec::new(), vec![first, second], Policy::default());

        let found = collect_issues(&definition);

        assert!(found.contains(&DefinitionIssue::NoStates));
        assert!(found.contains(&DefinitionIssue::DuplicateEvent {
            name: "go".to_string()
        }));
    }

    #[test]
    fn disjoint_transitions_do_not_overlap() {
        assert!(overlaps(&job_definition()).is_empty());
    }

    #[test]
    fn overlapping_transitions_are_reported() {
        let mut sleep = EventDef::new("sleep");
        sleep
            .transitions
            .push(TransitionDef::new(vec!["running", "cleaning"], "sleeping"));
        sleep.transitions.push(TransitionDef::new("cleaning", "running"));
        let definition = Definition::new(
            "status",
            vec![
                StateDef::new("sleeping"),
                StateDef::new("running"),
                StateDef::new("cleaning"),
            ],
            vec![sleep],
            Policy::default(),
        );

        assert_eq!(
            overlaps(&definition),
            vec![Overlap {
                event: "sleep".to_string(),
                state: "cleaning".to_string(),
                winner: 0,
                shadowed: 1,
            }]
        );
    }
}
