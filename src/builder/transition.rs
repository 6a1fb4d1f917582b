//! Builders for events and their transitions.

use crate::builder::error::BuildError;
use crate::core::{EventDef, FromStates, TransitionDef};

/// Builder for constructing transitions with a fluent API.
#[derive(Debug, Default)]
pub struct TransitionBuilder {
    from: Option<FromStates>,
    to: Option<String>,
    after: Option<String>,
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single source state. Either this or `from_any` is required.
    pub fn from(mut self, state: impl Into<String>) -> Self {
        self.from = Some(FromStates::One(state.into()));
        self
    }

    /// Allow the transition from any of `states`.
    pub fn from_any<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.from = Some(FromStates::Any(states.into_iter().map(Into::into).collect()));
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<String>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Hook run right after the status changes (optional).
    pub fn after(mut self, hook: impl Into<String>) -> Self {
        self.after = Some(hook.into());
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<TransitionDef, BuildError> {
        let from = self
            .from
            .filter(|from| !from.is_empty())
            .ok_or(BuildError::MissingFromState)?;
        let to = self
            .to
            .filter(|to| !to.is_empty())
            .ok_or(BuildError::MissingToState)?;

        Ok(TransitionDef {
            from,
            to,
            after: self.after,
        })
    }
}

/// Builder for an event and its ordered transitions.
#[derive(Debug)]
pub struct EventBuilder {
    name: String,
    transitions: Vec<TransitionDef>,
    before: Option<String>,
    after: Option<String>,
}

impl EventBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: Vec::new(),
            before: None,
            after: None,
        }
    }

    /// Append a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Append a pre-built transition.
    pub fn add_transition(mut self, transition: TransitionDef) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Hook run before the transition is resolved.
    pub fn before(mut self, hook: impl Into<String>) -> Self {
        self.before = Some(hook.into());
        self
    }

    /// Hook run last, after the status has changed.
    pub fn after(mut self, hook: impl Into<String>) -> Self {
        self.after = Some(hook.into());
        self
    }

    /// Build the event. Transition order is kept: the first one admitting
    /// the current status wins.
    pub fn build(self) -> Result<EventDef, BuildError> {
        if self.name.is_empty() {
            return Err(BuildError::EmptyEventName);
        }
        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions { event: self.name });
        }

        Ok(EventDef {
            name: self.name,
            transitions: self.transitions,
            before: self.before,
            after: self.after,
        })
    }
}
