//! Lifecycle hooks.
//!
//! Definitions refer to hooks by identifier. An entity type supplies the
//! callables in a [`HookTable`], and the engine invokes them through it:
//! an unset identifier is a no-op, an identifier with nothing registered
//! is [`MachineError::HookNotFound`](crate::core::MachineError::HookNotFound).

mod table;

pub use table::{HookSequence, HookTable};
