//! State declarations.
//!
//! A state is a name plus up to six optional hook identifiers. The hooks
//! fire while a transition leaves or enters the state; see
//! [`crate::engine::Machine::execute_event`] for the exact order.

use serde::{Deserialize, Serialize};

/// Optional lifecycle hooks attached to a state.
///
/// Each field holds the identifier of a hook registered in the entity's
/// [`HookTable`](crate::hooks::HookTable). `None` means no hook.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateHooks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_exit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_exit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_enter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_enter: Option<String>,
}

impl StateHooks {
    /// Iterate over every hook identifier that is set.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        [
            &self.before_exit,
            &self.exit,
            &self.after_exit,
            &self.before_enter,
            &self.enter,
            &self.after_enter,
        ]
        .into_iter()
        .filter_map(|hook| hook.as_deref())
    }
}

/// A named state of a definition.
///
/// # Example
///
/// ```rust
/// use statemark::core::StateDef;
///
/// let running = StateDef::new("running")
///     .before_enter("warm_up")
///     .after_enter("announce");
///
/// assert_eq!(running.name, "running");
/// assert_eq!(running.hooks.before_enter.as_deref(), Some("warm_up"));
/// assert!(running.hooks.exit.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    /// Unique identifier within the definition.
    pub name: String,
    #[serde(flatten)]
    pub hooks: StateHooks,
}

impl StateDef {
    /// Create a state with no hooks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hooks: StateHooks::default(),
        }
    }

    pub fn before_exit(mut self, hook: impl Into<String>) -> Self {
        self.hooks.before_exit = Some(hook.into());
        self
    }

    pub fn exit(mut self, hook: impl Into<String>) -> Self {
        self.hooks.exit = Some(hook.into());
        self
    }

    pub fn after_exit(mut self, hook: impl Into<String>) -> Self {
        self.hooks.after_exit = Some(hook.into());
        self
    }

    pub fn before_enter(mut self, hook: impl Into<String>) -> Self {
        self.hooks.before_enter = Some(hook.into());
        self
    }

    pub fn enter(mut self, hook: impl Into<String>) -> Self {
        self.hooks.enter = Some(hook.into());
        self
    }

    pub fn after_enter(mut self, hook: impl Into<String>) -> Self {
        self.hooks.after_enter = Some(hook.into());
        self
    }
}
