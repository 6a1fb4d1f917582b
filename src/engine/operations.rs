//! The table of operations generated for a bound entity.

use crate::core::Definition;
use serde::{Deserialize, Serialize};

/// What a generated operation does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OperationKind {
    /// Run an event.
    Trigger,
    /// Ask whether an event can run.
    CanTrigger,
    /// Ask whether the entity is in a state.
    IsState,
    /// Get the canonical name of a state.
    StateName,
    /// Assign the status directly.
    Assign,
}

/// Identity of a generated operation: its kind and the event, state or
/// status property it targets.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OperationKey {
    pub kind: OperationKind,
    pub target: String,
}

impl OperationKey {
    pub fn new(kind: OperationKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
        }
    }
}

/// A call on a generated operation, with its arguments.
#[derive(Debug)]
pub enum Operation<'a, A: ?Sized> {
    Trigger { event: &'a str, args: &'a A },
    CanTrigger { event: &'a str },
    IsState { state: &'a str },
    StateName { state: &'a str },
    Assign { status: &'a str },
}

impl<A: ?Sized> Operation<'_, A> {
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Trigger { .. } => OperationKind::Trigger,
            Self::CanTrigger { .. } => OperationKind::CanTrigger,
            Self::IsState { .. } => OperationKind::IsState,
            Self::StateName { .. } => OperationKind::StateName,
            Self::Assign { .. } => OperationKind::Assign,
        }
    }

    /// The event or state this call targets; `None` for assignment,
    /// which targets the status property.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Trigger { event, .. } | Self::CanTrigger { event } => Some(*event),
            Self::IsState { state } | Self::StateName { state } => Some(*state),
            Self::Assign { .. } => None,
        }
    }
}

/// Result of a generated operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperationOutput {
    Flag(bool),
    Name(String),
    Assigned,
}

/// Operations available on an entity, in generation order: for each
/// event a trigger and a can-trigger, for each state an is-state and a
/// state-name, then the assignment keyed by the status property.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperationTable {
    entries: Vec<OperationKey>,
}

impl OperationTable {
    pub fn generate(definition: &Definition) -> Self {
        let capacity = (definition.events().len() + definition.states().len()) * 2 + 1;
        let mut entries = Vec::with_capacity(capacity);

        for event in definition.events() {
            entries.push(OperationKey::new(OperationKind::Trigger, &event.name));
            entries.push(OperationKey::new(OperationKind::CanTrigger, &event.name));
        }
        for state in definition.states() {
            entries.push(OperationKey::new(OperationKind::IsState, &state.name));
            entries.push(OperationKey::new(OperationKind::StateName, &state.name));
        }
        entries.push(OperationKey::new(
            OperationKind::Assign,
            definition.status_property(),
        ));

        Self { entries }
    }

    pub fn contains(&self, kind: OperationKind, target: &str) -> bool {
        self.entries
            .iter()
            .any(|key| key.kind == kind && key.target == target)
    }

    pub fn keys(&self) -> &[OperationKey] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EventDef, Policy, StateDef};

    #[test]
    fn table_has_entries_per_event_state_and_setter() {
        let definition = Definition::new(
            "phase",
            vec![StateDef::new("a"), StateDef::new("b"), StateDef::new("c")],
            vec![EventDef::new("go"), EventDef::new("stop")],
            Policy::default(),
        );

        let table = OperationTable::generate(&definition);

        assert_eq!(table.len(), 2 * 2 + 3 * 2 + 1);
        assert_eq!(
            table.keys()[0],
            OperationKey::new(OperationKind::Trigger, "go")
        );
        assert!(table.contains(OperationKind::CanTrigger, "stop"));
        assert!(table.contains(OperationKind::StateName, "c"));
        assert!(table.contains(OperationKind::Assign, "phase"));
        assert!(!table.contains(OperationKind::Trigger, "a"));
    }

    #[test]
    fn operation_reports_kind_and_target() {
        let trigger: Operation<'_, ()> = Operation::Trigger {
            event: "run",
            args: &(),
        };
        let assign: Operation<'_, ()> = Operation::Assign { status: "running" };

        assert_eq!(trigger.kind(), OperationKind::Trigger);
        assert_eq!(trigger.target(), Some("run"));
        assert_eq!(assign.kind(), OperationKind::Assign);
        assert_eq!(assign.target(), None);
    }
}
