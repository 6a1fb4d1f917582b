//! Registration map from hook identifiers to callables.

use crate::core::MachineError;
use std::collections::HashMap;
use std::fmt;

/// Hooks of one entity type, keyed by identifier.
///
/// Each hook receives the entity and the arguments the triggering
/// operation was called with.
///
/// # Example
///
/// ```rust
/// use statemark::hooks::HookTable;
///
/// struct Job {
///     log: Vec<String>,
/// }
///
/// let hooks: HookTable<Job> = HookTable::new()
///     .register("enter_running", |job: &mut Job, _: &()| {
///         job.log.push("enter_running".to_string())
///     });
///
/// let mut job = Job { log: Vec::new() };
/// hooks.invoke(&mut job, Some("enter_running"), &()).unwrap();
/// hooks.invoke(&mut job, None, &()).unwrap();
///
/// assert_eq!(job.log, vec!["enter_running"]);
/// assert!(hooks.invoke(&mut job, Some("missing"), &()).is_err());
/// ```
pub struct HookTable<E, A: ?Sized = ()> {
    hooks: HashMap<String, Box<dyn Fn(&mut E, &A) + Send + Sync>>,
}

impl<E, A: ?Sized> HookTable<E, A> {
    pub fn new() -> Self {
        Self {
            hooks: HashMap::new(),
        }
    }

    /// Register `hook` under `name`, replacing any previous registration.
    pub fn register<F>(mut self, name: impl Into<String>, hook: F) -> Self
    where
        F: Fn(&mut E, &A) + Send + Sync + 'static,
    {
        self.hooks.insert(name.into(), Box::new(hook));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Look up the hooks named by `names`, in order, without running them.
    ///
    /// Unset and empty names are skipped. Fails with
    /// [`MachineError::HookNotFound`] on the first name with no registered
    /// hook, before any hook has run.
    pub fn sequence<'h>(
        &'h self,
        names: impl IntoIterator<Item = Option<&'h str>>,
    ) -> Result<HookSequence<'h, E, A>, MachineError> {
        let mut hooks: Vec<(&'h str, &'h (dyn Fn(&mut E, &A) + Send + Sync))> = Vec::new();

        for name in names.into_iter().flatten().filter(|name| !name.is_empty()) {
            let hook = self
                .hooks
                .get(name)
                .ok_or_else(|| MachineError::HookNotFound {
                    hook: name.to_string(),
                })?;
            hooks.push((name, &**hook));
        }

        Ok(HookSequence { hooks })
    }

    /// Invoke the hook named `name` with `args`.
    ///
    /// `None` or an empty name means the declaration has no hook here and
    /// nothing happens. Hooks return nothing: their effects go through
    /// the `&mut E` they receive.
    pub fn invoke(&self, entity: &mut E, name: Option<&str>, args: &A) -> Result<(), MachineError> {
        self.sequence([name])?.run(entity, args);
        Ok(())
    }
}

/// Hooks resolved by [`HookTable::sequence`], ready to run in order.
pub struct HookSequence<'h, E, A: ?Sized> {
    hooks: Vec<(&'h str, &'h (dyn Fn(&mut E, &A) + Send + Sync))>,
}

impl<E, A: ?Sized> HookSequence<'_, E, A> {
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Run every hook with `entity` and `args`. Cannot fail: all lookups
    /// happened when the sequence was built.
    pub fn run(&self, entity: &mut E, args: &A) {
        for (name, hook) in &self.hooks {
            tracing::trace!(hook = %name, "invoking hook");
            hook(entity, args);
        }
    }
}

impl<E, A: ?Sized> Default for HookTable<E, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, A: ?Sized> fmt::Debug for HookTable<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.hooks.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("HookTable").field("hooks", &names).finish()
    }
}
