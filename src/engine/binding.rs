//! Lazy per-entity setup.
//!
//! An entity starts [`Unbound`](BindingPhase::Unbound). Its first
//! operation loads the machine declared for its type
//! ([`DefinitionLoaded`](BindingPhase::DefinitionLoaded)), then checks the
//! hooks, reads the initial status and generates the operation table
//! ([`FullyBound`](BindingPhase::FullyBound)). Later operations reuse the
//! bound state. If the second step fails the binding stays at
//! `DefinitionLoaded` and the next operation retries from there.

use crate::core::MachineError;
use crate::engine::entity::Stateful;
use crate::engine::machine::Machine;
use crate::engine::operations::OperationTable;
use crate::validation::overlaps;
use std::fmt;
use std::sync::Arc;

/// Setup phase of a [`Binding`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingPhase {
    Unbound,
    DefinitionLoaded,
    FullyBound,
}

/// State kept for an entity once setup has completed.
pub struct Bound<E: Stateful> {
    machine: Arc<Machine<E>>,
    initial_status: String,
    operations: OperationTable,
}

impl<E: Stateful> Bound<E> {
    fn new(machine: Arc<Machine<E>>, initial_status: &str) -> Result<Self, MachineError> {
        machine.verify_hooks()?;

        for overlap in overlaps(machine.definition()) {
            tracing::warn!(
                event = %overlap.event,
                state = %overlap.state,
                winner = overlap.winner,
                shadowed = overlap.shadowed,
                "overlapping transitions, the earlier one always wins"
            );
        }

        let operations = OperationTable::generate(machine.definition());
        tracing::debug!(
            entity = std::any::type_name::<E>(),
            property = %machine.definition().status_property(),
            status = %initial_status,
            operations = operations.len(),
            "state machine bound"
        );

        Ok(Self {
            machine,
            initial_status: initial_status.to_string(),
            operations,
        })
    }

    pub fn machine(&self) -> &Arc<Machine<E>> {
        &self.machine
    }

    /// Status the entity had when it was bound.
    pub fn initial_status(&self) -> &str {
        &self.initial_status
    }

    pub fn operations(&self) -> &OperationTable {
        &self.operations
    }
}

enum Slot<E: Stateful> {
    Unbound,
    DefinitionLoaded(Arc<Machine<E>>),
    FullyBound(Bound<E>),
}

/// The per-entity binding to its type's machine.
///
/// Embed one in every entity and hand it out from
/// [`Stateful::binding`]. It is created unbound and binds itself on the
/// entity's first operation.
pub struct Binding<E: Stateful> {
    slot: Slot<E>,
}

impl<E: Stateful> Binding<E> {
    pub fn new() -> Self {
        Self { slot: Slot::Unbound }
    }

    pub fn phase(&self) -> BindingPhase {
        match self.slot {
            Slot::Unbound => BindingPhase::Unbound,
            Slot::DefinitionLoaded(_) => BindingPhase::DefinitionLoaded,
            Slot::FullyBound(_) => BindingPhase::FullyBound,
        }
    }

    /// The bound state, once setup has completed.
    pub fn bound(&self) -> Option<&Bound<E>> {
        match &self.slot {
            Slot::FullyBound(bound) => Some(bound),
            Slot::Unbound | Slot::DefinitionLoaded(_) => None,
        }
    }

    /// Move `Unbound` to `DefinitionLoaded`. No-op in later phases.
    pub fn load(&mut self) -> Result<BindingPhase, MachineError> {
        if let Slot::Unbound = self.slot {
            let machine = E::declaration().ok_or_else(|| MachineError::MissingDefinition {
                entity: std::any::type_name::<E>().to_string(),
            })?;
            self.slot = Slot::DefinitionLoaded(machine);
        }
        Ok(self.phase())
    }

    /// Run whatever setup is left and return the bound state.
    ///
    /// `status` is the entity's current status, recorded as the initial
    /// status when this call completes the binding.
    pub fn ensure(&mut self, status: &str) -> Result<&Bound<E>, MachineError> {
        self.load()?;

        if let Slot::DefinitionLoaded(machine) = &self.slot {
            let bound = Bound::new(Arc::clone(machine), status)?;
            self.slot = Slot::FullyBound(bound);
        }

        match &self.slot {
            Slot::FullyBound(bound) => Ok(bound),
            // load() leaves the slot loaded and the step above completes it
            Slot::Unbound | Slot::DefinitionLoaded(_) => Err(MachineError::MissingDefinition {
                entity: std::any::type_name::<E>().to_string(),
            }),
        }
    }
}

impl<E: Stateful> Default for Binding<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Stateful> fmt::Debug for Binding<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("phase", &self.phase())
            .finish()
    }
}
