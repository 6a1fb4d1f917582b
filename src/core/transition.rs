//! Transition and event declarations.

use super::source::FromStates;
use serde::{Deserialize, Serialize};

/// An admissible move from one of `from` to `to`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDef {
    pub from: FromStates,
    pub to: String,
    /// Hook fired right after the status has changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl TransitionDef {
    pub fn new(from: impl Into<FromStates>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            after: None,
        }
    }

    pub fn with_after(mut self, hook: impl Into<String>) -> Self {
        self.after = Some(hook.into());
        self
    }

    /// Whether this transition applies from `current` (pure).
    pub fn admits(&self, current: &str) -> bool {
        self.from.admits(current)
    }
}

/// A named trigger holding an ordered list of transitions.
///
/// Transition order is significant: the first transition that admits
/// the current state is the one that runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDef {
    pub name: String,
    #[serde(default)]
    pub transitions: Vec<TransitionDef>,
    /// Hook fired before resolution, whether or not a transition matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    /// Hook fired last, after a transition has been applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl EventDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: Vec::new(),
            before: None,
            after: None,
        }
    }

    /// First transition admitting `current`, in declaration order.
    pub fn transition_from(&self, current: &str) -> Option<&TransitionDef> {
        self.transitions.iter().find(|t| t.admits(current))
    }

    /// Iterate over every hook identifier used by this event and its transitions.
    pub fn hook_identifiers(&self) -> impl Iterator<Item = &str> {
        self.before
            .as_deref()
            .into_iter()
            .chain(self.after.as_deref())
            .chain(self.transitions.iter().filter_map(|t| t.after.as_deref()))
    }
}
