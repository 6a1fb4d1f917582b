//! Job Lifecycle
//!
//! This example drives a background job through its declared lifecycle.
//!
//! Key concepts:
//! - A machine declared once and shared by every job
//! - Named operations generated with `named_operations!`
//! - Lifecycle hooks firing around each transition
//! - Direct assignment limited to declared transitions
//!
//! Run with: cargo run --example job

use statemark::builder::{any_transition, simple_transition, DefinitionBuilder, EventBuilder};
use statemark::core::StateDef;
use statemark::engine::{Binding, Machine, Stateful};
use statemark::hooks::HookTable;
use statemark::named_operations;
use std::sync::{Arc, OnceLock};

struct Job {
    status: String,
    log: Vec<String>,
    binding: Binding<Job>,
}

impl Job {
    fn new() -> Self {
        Self {
            status: "sleeping".to_string(),
            log: Vec::new(),
            binding: Binding::new(),
        }
    }
}

impl Stateful for Job {
    type Args = str;

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
        static MACHINE: OnceLock<Option<Arc<Machine<Job>>>> = OnceLock::new();
        MACHINE
            .get_or_init(|| {
                let definition = DefinitionBuilder::new("status")
                    .state(StateDef::new("sleeping"))
                    .state(StateDef::new("running").enter("start_clock"))
                    .state(StateDef::new("cleaning").exit("wipe_scratch"))
                    .event(
                        EventBuilder::new("run")
                            .add_transition(simple_transition("sleeping", "running")),
                    )
                    .and_then(|builder| {
                        builder.event(
                            EventBuilder::new("clean")
                                .add_transition(simple_transition("running", "cleaning")),
                        )
                    })
                    .and_then(|builder| {
                        builder.event(
                            EventBuilder::new("sleep")
                                .add_transition(any_transition(["running", "cleaning"], "sleeping")),
                        )
                    })
                    .and_then(|builder| builder.build())
                    .ok()?;

                let hooks = HookTable::new()
                    .register("start_clock", |job: &mut Job, reason: &str| {
                        job.log.push(format!("clock started ({reason})"))
                    })
                    .register("wipe_scratch", |job: &mut Job, reason: &str| {
                        job.log.push(format!("scratch wiped ({reason})"))
                    });
                Some(Arc::new(Machine::new(definition, hooks)))
            })
            .clone()
    }
}

named_operations! {
    impl Job {
        event "run" => run, can_run;
        event "clean" => clean, can_clean;
        event "sleep" => sleep, can_sleep;
        state "sleeping" => is_sleeping, sleeping_name;
        state "running" => is_running, running_name;
        state "cleaning" => is_cleaning, cleaning_name;
        assign => set_status;
    }
}

fn main() {
    println!("=== Job Lifecycle Example ===\n");

    let mut job = Job::new();

    println!("Initial state: {}", job.status);
    println!("is_sleeping(): {}", job.is_sleeping().unwrap());
    println!("can_run(): {}", job.can_run().unwrap());
    println!("can_clean(): {}", job.can_clean().unwrap());

    println!("\n--- Running ---");
    println!("run(): {}", job.run("nightly batch").unwrap());
    println!("is_running(): {}", job.is_running().unwrap());
    println!("is_sleeping(): {}", job.is_sleeping().unwrap());
    println!("can_run(): {}", job.can_run().unwrap());

    println!("\n--- Cleaning ---");
    println!("clean(): {}", job.clean("batch done").unwrap());
    println!("is_cleaning(): {}", job.is_cleaning().unwrap());
    println!("can_sleep(): {}", job.can_sleep().unwrap());
    match job.clean("again") {
        Ok(_) => println!("clean() twice unexpectedly succeeded"),
        Err(error) => println!("clean() again: {error}"),
    }
    println!("Still in: {}", job.status);

    println!("\n--- Back to sleep ---");
    println!("sleep(): {}", job.sleep("idle").unwrap());
    println!("is_sleeping(): {}", job.is_sleeping().unwrap());
    println!(
        "declared states: {}, {}, {}",
        job.sleeping_name().unwrap(),
        job.running_name().unwrap(),
        job.cleaning_name().unwrap()
    );

    println!("\n--- Direct assignment ---");
    match job.set_status("cleaning") {
        Ok(()) => println!("set_status(cleaning) unexpectedly succeeded"),
        Err(error) => println!("set_status(cleaning): {error}"),
    }
    job.set_status("running").unwrap();
    println!("set_status(running) -> {}", job.status);

    println!("\nHook log:");
    for entry in &job.log {
        println!("  {entry}");
    }

    println!("\n=== Example Complete ===");
}
