//! The entity adapter and the operations every entity gets.

use crate::core::MachineError;
use crate::engine::binding::Binding;
use crate::engine::machine::Machine;
use crate::engine::operations::{Operation, OperationKey, OperationKind, OperationOutput};
use std::sync::Arc;

/// A host type whose status is driven by a declared state machine.
///
/// Implementors own the status value and a [`Binding`], and name the
/// machine shared by all values of the type. Everything else comes from
/// [`StateMachineExt`].
///
/// # Example
///
/// ```rust
/// use statemark::builder::{simple_transition, DefinitionBuilder, EventBuilder};
/// use statemark::core::StateDef;
/// use statemark::engine::{Binding, Machine, StateMachineExt, Stateful};
/// use std::sync::{Arc, OnceLock};
///
/// struct Job {
///     status: String,
///     binding: Binding<Job>,
/// }
///
/// impl Stateful for Job {
///     type Args = ();
///
///     fn status(&self) -> &str {
///         &self.status
///     }
///
///     fn set_status_raw(&mut self, status: &str) {
///         self.status = status.to_string();
///     }
///
///     fn binding(&mut self) -> &mut Binding<Self> {
///         &mut self.binding
///     }
///
///     fn declaration() -> Option<Arc<Machine<Self>>> {
///         static MACHINE: OnceLock<Arc<Machine<Job>>> = OnceLock::new();
///         let machine = MACHINE.get_or_init(|| {
///             let definition = DefinitionBuilder::new("status")
///                 .state(StateDef::new("sleeping"))
///                 .state(StateDef::new("running"))
///                 .event(
///                     EventBuilder::new("run")
///                         .add_transition(simple_transition("sleeping", "running")),
///                 )
///                 .and_then(|builder| builder.build())
///                 .expect("job definition is well formed");
///             Arc::new(Machine::without_hooks(definition))
///         });
///         Some(Arc::clone(machine))
///     }
/// }
///
/// let mut job = Job { status: "sleeping".to_string(), binding: Binding::new() };
///
/// assert!(job.can_trigger("run").unwrap());
/// assert!(job.trigger("run", &()).unwrap());
/// assert!(job.is_in_state("running").unwrap());
/// assert!(job.trigger("run", &()).is_err());
/// ```
pub trait Stateful: Sized {
    /// Arguments forwarded unchanged from a triggering operation to
    /// every hook it fires.
    type Args: ?Sized;

    fn status(&self) -> &str;

    /// Overwrite the status without any checks. The engine calls this
    /// only after it has validated the change.
    fn set_status_raw(&mut self, status: &str);

    fn binding(&mut self) -> &mut Binding<Self>;

    /// The machine declared for this type, or `None` if the type declares
    /// no state machine.
    ///
    /// Every call must return a clone of the same `Arc`: the definition is
    /// built once and shared read-only by all values of the type. Hold it
    /// in a `static OnceLock` as in the example above.
    fn declaration() -> Option<Arc<Machine<Self>>>;
}

/// Operations available on every [`Stateful`] entity.
///
/// The first call binds the entity (see [`Binding`]); every call can
/// therefore fail with a setup error such as
/// [`MachineError::MissingDefinition`] or [`MachineError::HookNotFound`].
pub trait StateMachineExt: Stateful {
    /// Bind the entity if needed and return its machine.
    fn machine(&mut self) -> Result<Arc<Machine<Self>>, MachineError> {
        let status = self.status().to_string();
        let bound = self.binding().ensure(&status)?;
        Ok(Arc::clone(bound.machine()))
    }

    /// Run `event`. See [`Machine::execute_event`].
    fn trigger(&mut self, event: &str, args: &Self::Args) -> Result<bool, MachineError> {
        let machine = self.machine()?;
        machine.execute_event(self, event, args)
    }

    fn can_trigger(&mut self, event: &str) -> Result<bool, MachineError> {
        let machine = self.machine()?;
        machine.can_execute(self, event)
    }

    fn is_in_state(&mut self, state: &str) -> Result<bool, MachineError> {
        let machine = self.machine()?;
        Ok(machine.is_state(self, state))
    }

    fn current_state_name(&mut self) -> Result<String, MachineError> {
        self.machine()?;
        Ok(self.status().to_string())
    }

    /// Canonical declared name of `state`.
    fn state_name(&mut self, state: &str) -> Result<String, MachineError> {
        let machine = self.machine()?;
        machine.state_name(state).map(str::to_string)
    }

    /// Set the status without an event. See [`Machine::assign`].
    fn assign(&mut self, status: &str) -> Result<(), MachineError> {
        let machine = self.machine()?;
        machine.assign(self, status)
    }

    /// Keys of the operations generated for this entity.
    fn operations(&mut self) -> Result<Vec<OperationKey>, MachineError> {
        let status = self.status().to_string();
        let bound = self.binding().ensure(&status)?;
        Ok(bound.operations().keys().to_vec())
    }

    /// Call a generated operation.
    ///
    /// Fails with [`MachineError::EventNotFound`] or
    /// [`MachineError::StateNotFound`] when no operation was generated for
    /// the target, including `IsState` on an undeclared state.
    fn perform(
        &mut self,
        operation: Operation<'_, Self::Args>,
    ) -> Result<OperationOutput, MachineError> {
        let status = self.status().to_string();
        let bound = self.binding().ensure(&status)?;
        let machine = Arc::clone(bound.machine());

        if let Some(target) = operation.target() {
            let kind = operation.kind();
            if !bound.operations().contains(kind, target) {
                return Err(match kind {
                    OperationKind::Trigger | OperationKind::CanTrigger => {
                        MachineError::EventNotFound {
                            event: target.to_string(),
                        }
                    }
                    _ => MachineError::StateNotFound {
                        state: target.to_string(),
                    },
                });
            }
        }

        match operation {
            Operation::Trigger { event, args } => {
                machine.execute_event(self, event, args).map(OperationOutput::Flag)
            }
            Operation::CanTrigger { event } => {
                machine.can_execute(self, event).map(OperationOutput::Flag)
            }
            Operation::IsState { state } => {
                Ok(OperationOutput::Flag(machine.is_state(self, state)))
            }
            Operation::StateName { state } => machine
                .state_name(state)
                .map(|name| OperationOutput::Name(name.to_string())),
            Operation::Assign { status } => {
                machine.assign(self, status).map(|()| OperationOutput::Assigned)
            }
        }
    }
}

impl<T: Stateful> StateMachineExt for T {}
