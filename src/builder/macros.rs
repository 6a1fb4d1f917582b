//! Macros for ergonomic entity operations.

/// Generate named inherent methods for a [`Stateful`](crate::engine::Stateful) type.
///
/// Each event gets a trigger method and a can-trigger method, each state an
/// is-state method and a state-name method, and the status property an
/// optional assignment method. Method names are given explicitly.
///
/// # Example
///
/// ```
/// use statemark::builder::{simple_transition, DefinitionBuilder, EventBuilder};
/// use statemark::core::StateDef;
/// use statemark::engine::{Binding, Machine, Stateful};
/// use statemark::named_operations;
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
///         static MACHINE: OnceLock<Option<Arc<Machine<Job>>>> = OnceLock::new();
///         MACHINE
///             .get_or_init(|| {
///                 let definition = DefinitionBuilder::new("status")
///                     .state(StateDef::new("sleeping"))
///                     .state(StateDef::new("running"))
///                     .event(
///                         EventBuilder::new("run")
///                             .add_transition(simple_transition("sleeping", "running")),
///                     )
///                     .and_then(|builder| builder.build())
///                     .ok()?;
///                 Some(Arc::new(Machine::without_hooks(definition)))
///             })
///             .clone()
///     }
/// }
///
/// named_operations! {
///     impl Job {
///         event "run" => run, can_run;
///         state "sleeping" => is_sleeping, sleeping_name;
///         state "running" => is_running, running_name;
///         assign => set_status;
///     }
/// }
///
/// let mut job = Job { status: "sleeping".to_string(), binding: Binding::new() };
///
/// assert!(job.can_run().unwrap());
/// assert!(job.run(&()).unwrap());
/// assert!(job.is_running().unwrap());
/// assert_eq!(job.sleeping_name().unwrap(), "sleeping");
/// assert!(job.set_status("sleeping").is_err());
/// ```
#[macro_export]
macro_rules! named_operations {
    (
        impl $ty:ty {
            $(event $event:literal => $trigger:ident, $can_trigger:ident;)*
            $(state $state:literal => $is_state:ident, $state_name:ident;)*
            $(assign => $assign:ident;)?
        }
    ) => {
        impl $ty {
            $(
                #[doc = concat!("Trigger the `", $event, "` event.")]
                pub fn $trigger(
                    &mut self,
                    args: &<Self as $crate::engine::Stateful>::Args,
                ) -> ::std::result::Result<bool, $crate::core::MachineError> {
                    $crate::engine::StateMachineExt::trigger(self, $event, args)
                }

                #[doc = concat!("Whether the `", $event, "` event can run from the current status.")]
                pub fn $can_trigger(
                    &mut self,
                ) -> ::std::result::Result<bool, $crate::core::MachineError> {
                    $crate::engine::StateMachineExt::can_trigger(self, $event)
                }
            )*

            $(
                #[doc = concat!("Whether the status is `", $state, "`.")]
                pub fn $is_state(
                    &mut self,
                ) -> ::std::result::Result<bool, $crate::core::MachineError> {
                    $crate::engine::StateMachineExt::is_in_state(self, $state)
                }

                #[doc = concat!("Declared name of the `", $state, "` state.")]
                pub fn $state_name(
                    &mut self,
                ) -> ::std::result::Result<::std::string::String, $crate::core::MachineError> {
                    $crate::engine::StateMachineExt::state_name(self, $state)
                }
            )*

            $(
                /// Assign the status directly, subject to the machine's policy.
                pub fn $assign(
                    &mut self,
                    status: &str,
                ) -> ::std::result::Result<(), $crate::core::MachineError> {
                    $crate::engine::StateMachineExt::assign(self, status)
                }
            )?
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::builder::{any_transition, simple_transition, DefinitionBuilder, EventBuilder};
    use crate::core::{MachineError, StateDef};
    use crate::engine::{Binding, Machine, StateMachineExt, Stateful};
    use std::sync::{Arc, OnceLock};

    struct Ticket {
        status: String,
        binding: Binding<Ticket>,
    }

    impl Ticket {
        fn open() -> Self {
            Self {
                status: "open".to_string(),
                binding: Binding::new(),
            }
        }
    }

    impl Stateful for Ticket {
        type Args = ();

        fn status(&self) -> &str {
            &self.status
        }

        fn set_status_raw(&mut self, status: &str) {
            self.status = status.to_string();
        }

        fn binding(&mut self) -> &mut Binding<Self> {
            &mut self.binding
        }

        fn declaration() -> Option<Arc<Machine<Self>>> {
            static MACHINE: OnceLock<Option<Arc<Machine<Ticket>>>> = OnceLock::new();
            MACHINE
                .get_or_init(|| {
                    let definition = DefinitionBuilder::new("status")
                        .state(StateDef::new("open"))
                        .state(StateDef::new("closed"))
                        .event(
                            EventBuilder::new("close")
                                .add_transition(simple_transition("open", "closed")),
                        )
                        .and_then(|builder| {
                            builder.event(
                                EventBuilder::new("reopen")
                                    .add_transition(any_transition(["closed"], "open")),
                            )
                        })
                        .and_then(|builder| builder.build())
                        .ok()?;
                    Some(Arc::new(Machine::without_hooks(definition)))
                })
                .clone()
        }
    }

    named_operations! {
        impl Ticket {
            event "close" => close, can_close;
            event "reopen" => reopen, can_reopen;
            state "open" => is_open, open_name;
            state "closed" => is_closed, closed_name;
            assign => set_status;
        }
    }

    #[test]
    fn generated_methods_drive_the_machine() {
        let mut ticket = Ticket::open();

        assert!(ticket.is_open().unwrap());
        assert!(ticket.can_close().unwrap());
        assert!(!ticket.can_reopen().unwrap());

        assert!(ticket.close(&()).unwrap());
        assert!(ticket.is_closed().unwrap());
        assert!(ticket.reopen(&()).unwrap());
        assert_eq!(ticket.status, "open");
    }

    #[test]
    fn generated_state_names_and_assignment() {
        let mut ticket = Ticket::open();

        assert_eq!(ticket.closed_name().unwrap(), "closed");
        assert_eq!(ticket.open_name().unwrap(), "open");

        ticket.set_status("closed").unwrap();
        assert_eq!(ticket.status, "closed");
        assert!(matches!(
            ticket.set_status("archived"),
            Err(MachineError::DirectAssignmentInvalid { .. })
        ));
    }

    #[test]
    fn tickets_share_one_machine() {
        let mut first = Ticket::open();
        let mut second = Ticket::open();

        first.close(&()).unwrap();

        assert!(Arc::ptr_eq(&first.machine().unwrap(), &second.machine().unwrap()));
        assert!(second.is_open().unwrap());
    }

    #[test]
    fn failed_trigger_keeps_status() {
        let mut ticket = Ticket::open();

        let result = ticket.reopen(&());

        assert_eq!(
            result,
            Err(MachineError::InvalidTransition {
                event: "reopen".to_string(),
                from: "open".to_string()
            })
        );
        assert_eq!(ticket.status, "open");
    }
}
