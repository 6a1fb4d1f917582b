//! The state machine engine.
//!
//! This module is the imperative shell around the pure definition model:
//! it binds entities to their machine, runs events and their hooks, and
//! applies status changes.
//!
//! # Key Concepts
//!
//! - **Stateful**: the adapter a host type implements (status storage,
//!   binding slot, declared machine)
//! - **Machine**: a shared definition plus the type's hooks
//! - **Binding**: lazy, one-time setup of an entity
//! - **StateMachineExt**: trigger, can-trigger, predicates and assignment
//!   on any `Stateful` value

mod binding;
mod entity;
mod machine;
mod operations;

pub use binding::{Binding, BindingPhase, Bound};
pub use entity::{StateMachineExt, Stateful};
pub use machine::Machine;
pub use operations::{Operation, OperationKey, OperationKind, OperationOutput, OperationTable};
