//! Builder API for ergonomic definition construction.
//!
//! This module provides fluent builders and a macro for declaring state
//! machines with minimal boilerplate. Builders check that a definition is
//! complete; references between states and events are checked by
//! [`validate`](crate::validation::validate) or on first use.

pub mod definition;
pub mod error;
pub mod macros;
pub mod transition;

pub use definition::DefinitionBuilder;
pub use error::BuildError;
pub use transition::{EventBuilder, TransitionBuilder};

use crate::core::{FromStates, TransitionDef};

/// Create a transition from a single state, with no hook.
///
/// # Example
///
/// ```
/// use statemark::builder::simple_transition;
///
/// let transition = simple_transition("sleeping", "running");
///
/// assert!(transition.admits("sleeping"));
/// assert_eq!(transition.to, "running");
/// ```
pub fn simple_transition(from: impl Into<String>, to: impl Into<String>) -> TransitionDef {
    TransitionDef::new(FromStates::One(from.into()), to)
}

/// Create a transition allowed from any of `from`, with no hook.
///
/// # Example
///
/// ```
/// use statemark::builder::any_transition;
///
/// let transition = any_transition(["running", "cleaning"], "sleeping");
///
/// assert!(transition.admits("running"));
/// assert!(transition.admits("cleaning"));
/// assert!(!transition.admits("sleeping"));
/// ```
pub fn any_transition<I, S>(from: I, to: impl Into<String>) -> TransitionDef
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    TransitionDef::new(
        FromStates::Any(from.into_iter().map(Into::into).collect()),
        to,
    )
}
