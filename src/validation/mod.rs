//! Validation of state machine definitions.
//!
//! Definitions are accepted as-is by the builder and by
//! [`Definition::new`](crate::core::Definition::new); references between
//! states and events are only checked here. Validation uses Stillwater's
//! `Validation` type so that a single pass reports every issue instead of
//! stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use statemark::core::{Definition, EventDef, Policy, StateDef, TransitionDef};
//! use statemark::validation::{validate, DefinitionIssue};
//! use stillwater::validation::Validation;
//!
//! let mut run = EventDef::new("run");
//! run.transitions.push(TransitionDef::new("sleeping", "flying"));
//! let definition = Definition::new(
//!     "status",
//!     vec![StateDef::new("sleeping")],
//!     vec![run],
//!     Policy::default(),
//! );
//!
//! match validate(&definition) {
//!     Validation::Failure(issues) => {
//!         assert!(issues.iter().any(|issue| matches!(
//!             issue,
//!             DefinitionIssue::UnknownTargetState { .. }
//!         )));
//!     }
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

pub mod issues;
pub mod rules;

pub use issues::{DefinitionIssue, Overlap};
pub use rules::{collect_issues, overlaps, validate};
