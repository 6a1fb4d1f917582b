//! Execution of events, capability checks, predicates and assignment.

use crate::core::{resolve, resolve_assignment, Definition, MachineError};
use crate::engine::entity::Stateful;
use crate::hooks::HookTable;
use std::fmt;
use std::sync::Arc;

/// A definition paired with the hooks of one entity type.
///
/// One machine is shared (behind an `Arc`) by every entity of the type.
/// It holds no per-entity data: each method takes the entity whose
/// status it reads or writes.
pub struct Machine<E: Stateful> {
    definition: Arc<Definition>,
    hooks: HookTable<E, E::Args>,
}

impl<E: Stateful> Machine<E> {
    pub fn new(definition: impl Into<Arc<Definition>>, hooks: HookTable<E, E::Args>) -> Self {
        Self {
            definition: definition.into(),
            hooks,
        }
    }

    /// A machine whose definition declares no hooks.
    pub fn without_hooks(definition: impl Into<Arc<Definition>>) -> Self {
        Self::new(definition, HookTable::new())
    }

    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    pub fn hooks(&self) -> &HookTable<E, E::Args> {
        &self.hooks
    }

    /// Fail with [`MachineError::HookNotFound`] for the first hook
    /// identifier in the definition that has no registered callable.
    pub fn verify_hooks(&self) -> Result<(), MachineError> {
        match self
            .definition
            .hook_identifiers()
            .find(|hook| !hook.is_empty() && !self.hooks.contains(hook))
        {
            Some(hook) => Err(MachineError::HookNotFound {
                hook: hook.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Run `event` on `entity`.
    ///
    /// The event's `before` hook runs first, then the transition is
    /// resolved from the entity's status. When one matches, hooks fire in
    /// this order, each receiving `args`:
    ///
    /// ```text
    /// from.beforeExit, from.exit, to.beforeEnter, to.enter,
    /// <status changes>,
    /// transition.after, from.afterExit, to.afterEnter, event.after
    /// ```
    ///
    /// When nothing matches the status is left alone and the call fails
    /// with [`MachineError::InvalidTransition`], or returns `Ok(false)` if
    /// the definition enables whiny transitions. Both state declarations
    /// and all eight transition hooks are looked up before any of those
    /// hooks runs, so a dangling reference or an unregistered hook fails
    /// with the status unchanged.
    pub fn execute_event(
        &self,
        entity: &mut E,
        event: &str,
        args: &E::Args,
    ) -> Result<bool, MachineError> {
        let event_def = self.definition.find_event(event)?;
        self.hooks.invoke(entity, event_def.before.as_deref(), args)?;

        let current = entity.status().to_string();
        let Some(transition) = resolve(&self.definition, &current, event)? else {
            if self.definition.whiny_transitions() {
                tracing::debug!(event = %event, from = %current, "no transition, returning false");
                return Ok(false);
            }
            return Err(MachineError::InvalidTransition {
                event: event.to_string(),
                from: current,
            });
        };

        let from = self.definition.find_state(&current)?;
        let to = self.definition.find_state(&transition.to)?;

        let before_change = self.hooks.sequence([
            from.hooks.before_exit.as_deref(),
            from.hooks.exit.as_deref(),
            to.hooks.before_enter.as_deref(),
            to.hooks.enter.as_deref(),
        ])?;
        let after_change = self.hooks.sequence([
            transition.after.as_deref(),
            from.hooks.after_exit.as_deref(),
            to.hooks.after_enter.as_deref(),
            event_def.after.as_deref(),
        ])?;

        before_change.run(entity, args);
        entity.set_status_raw(&to.name);
        after_change.run(entity, args);

        tracing::debug!(event = %event, from = %current, to = %to.name, "transition applied");
        Ok(true)
    }

    /// Whether `event` has a transition from the entity's current status.
    ///
    /// Uses the same resolution as [`Machine::execute_event`] and runs no hooks.
    pub fn can_execute(&self, entity: &E, event: &str) -> Result<bool, MachineError> {
        Ok(resolve(&self.definition, entity.status(), event)?.is_some())
    }

    /// Exact comparison of the entity's status with `state`.
    pub fn is_state(&self, entity: &E, state: &str) -> bool {
        entity.status() == state
    }

    /// Canonical declared name of `state`.
    pub fn state_name(&self, state: &str) -> Result<&str, MachineError> {
        Ok(self.definition.find_state(state)?.name.as_str())
    }

    /// Set the status without an event.
    ///
    /// Allowed only when some transition (in any event) leads from the
    /// current status to `status`. No hooks fire. Assigning the current
    /// status is a no-op.
    pub fn assign(&self, entity: &mut E, status: &str) -> Result<(), MachineError> {
        if self.definition.no_direct_assignment() {
            return Err(MachineError::DirectAssignmentDisabled);
        }

        let current = entity.status();
        if current == status {
            return Ok(());
        }

        if resolve_assignment(&self.definition, current, status).is_none() {
            return Err(MachineError::DirectAssignmentInvalid {
                current: current.to_string(),
                requested: status.to_string(),
            });
        }

        tracing::debug!(from = %current, to = %status, "status assigned directly");
        entity.set_status_raw(status);
        Ok(())
    }
}

impl<E: Stateful> fmt::Debug for Machine<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("definition", &self.definition)
            .field("hooks", &self.hooks)
            .finish()
    }
}
