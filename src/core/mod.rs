//! Definition model and transition resolution.
//!
//! Everything in this module is plain data plus pure functions:
//! - State, transition and event declarations
//! - The shared, immutable `Definition`
//! - The resolver mapping (definition, status, event) to a transition
//!
//! Nothing here touches an entity; that is the engine's job.

mod definition;
mod error;
mod resolver;
mod source;
mod state;
mod transition;

pub use definition::{Definition, Policy};
pub use error::MachineError;
pub use resolver::{resolve, resolve_assignment};
pub use source::FromStates;
pub use state::{StateDef, StateHooks};
pub use transition::{EventDef, TransitionDef};
