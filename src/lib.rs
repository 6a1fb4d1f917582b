//! Statemark: declarative finite state machines for plain data entities
//!
//! A host type keeps its status in an ordinary field. A state machine
//! declared for the type governs how that field may change: events move it
//! along declared transitions, lifecycle hooks fire around every change,
//! and direct assignment is limited to moves some transition allows.
//!
//! The crate follows a "pure core, imperative shell" split. The definition
//! model and transition resolution are plain data and pure functions;
//! the engine is the thin shell that reads and writes entities and runs
//! their hooks.
//!
//! # Core Concepts
//!
//! - **Definition**: states, events, ordered transitions and two policies
//!   (whiny transitions, no direct assignment), shared by every entity of
//!   a type
//! - **Hooks**: named callables an entity type registers in a `HookTable`
//! - **Stateful**: the adapter a host type implements
//! - **StateMachineExt**: trigger, can-trigger, predicates and assignment,
//!   available on every `Stateful` value after lazy one-time binding
//!
//! # Example
//!
//! ```rust
//! use statemark::builder::{any_transition, simple_transition, DefinitionBuilder, EventBuilder};
//! use statemark::core::{MachineError, StateDef};
//! use statemark::engine::{Binding, Machine, StateMachineExt, Stateful};
//! use statemark::hooks::HookTable;
//! use std::sync::{Arc, OnceLock};
//!
//! struct Job {
//!     status: String,
//!     log: Vec<String>,
//!     binding: Binding<Job>,
//! }
//!
//! impl Stateful for Job {
//!     type Args = ();
//!
//!     fn status(&self) -> &str {
//!         &self.status
//!     }
//!
//!     fn set_status_raw(&mut self, status: &str) {
//!         self.status = status.to_string();
//!     }
//!
//!     fn binding(&mut self) -> &mut Binding<Self> {
//!         &mut self.binding
//!     }
//!
//!     fn declaration() -> Option<Arc<Machine<Self>>> {
//!         static MACHINE: OnceLock<Option<Arc<Machine<Job>>>> = OnceLock::new();
//!         MACHINE
//!             .get_or_init(|| {
//!                 let definition = DefinitionBuilder::new("status")
//!                     .state(StateDef::new("sleeping"))
//!                     .state(StateDef::new("running").enter("start_clock"))
//!                     .state(StateDef::new("cleaning"))
//!                     .event(EventBuilder::new("run").add_transition(simple_transition("sleeping", "running")))
//!                     .and_then(|b| b.event(EventBuilder::new("clean").add_transition(simple_transition("running", "cleaning"))))
//!                     .and_then(|b| {
//!                         b.event(
//!                             EventBuilder::new("sleep")
//!                                 .add_transition(any_transition(["running", "cleaning"], "sleeping")),
//!                         )
//!                     })
//!                     .and_then(|b| b.build())
//!                     .ok()?;
//!
//!                 let hooks = HookTable::new().register("start_clock", |job: &mut Job, _: &()| {
//!                     job.log.push("clock started".to_string())
//!                 });
//!                 Some(Arc::new(Machine::new(definition, hooks)))
//!             })
//!             .clone()
//!     }
//! }
//!
//! let mut job = Job { status: "sleeping".to_string(), log: Vec::new(), binding: Binding::new() };
//!
//! assert!(job.trigger("run", &()).unwrap());
//! assert_eq!(job.log, vec!["clock started"]);
//! assert!(job.trigger("clean", &()).unwrap());
//! assert!(job.trigger("sleep", &()).unwrap());
//! assert!(matches!(
//!     job.trigger("clean", &()),
//!     Err(MachineError::InvalidTransition { .. })
//! ));
//! assert_eq!(job.current_state_name().unwrap(), "sleeping");
//!
//! // every job shares the one declared machine
//! let mut other = Job { status: "running".to_string(), log: Vec::new(), binding: Binding::new() };
//! assert!(Arc::ptr_eq(&job.machine().unwrap(), &other.machine().unwrap()));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;
pub mod hooks;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, DefinitionBuilder, EventBuilder, TransitionBuilder};
pub use config::ConfigError;
pub use crate::core::{Definition, EventDef, MachineError, Policy, StateDef, TransitionDef};
pub use engine::{Binding, Machine, StateMachineExt, Stateful};
pub use hooks::HookTable;
pub use validation::{validate, DefinitionIssue};
