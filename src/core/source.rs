//! Source-state sets for transitions.
//!
//! A transition applies when the entity's current status is one of its
//! source states. Declarations may name a single state or a list; both
//! forms are kept so a definition serializes back the way it was written.

use serde::{Deserialize, Serialize};

/// The state(s) a transition may leave from.
///
/// # Example
///
/// ```rust
/// use statemark::core::FromStates;
///
/// let single = FromStates::from("sleeping");
/// assert!(single.admits("sleeping"));
/// assert!(!single.admits("running"));
///
/// let many = FromStates::from(vec!["running", "cleaning"]);
/// assert!(many.admits("cleaning"));
/// assert!(!many.admits("sleeping"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FromStates {
    One(String),
    Any(Vec<String>),
}

impl FromStates {
    /// Whether `state` is one of the source states. Exact string match.
    pub fn admits(&self, state: &str) -> bool {
        match self {
            Self::One(name) => name == state,
            Self::Any(names) => names.iter().any(|name| name == state),
        }
    }

    /// The source states as a slice; a single state is a singleton.
    pub fn names(&self) -> &[String] {
        match self {
            Self::One(name) => std::slice::from_ref(name),
            Self::Any(names) => names,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names().is_empty()
    }
}

impl From<&str> for FromStates {
    fn from(name: &str) -> Self {
        Self::One(name.to_string())
    }
}

impl From<String> for FromStates {
    fn from(name: String) -> Self {
        Self::One(name)
    }
}

impl<S: Into<String>> From<Vec<S>> for FromStates {
    fn from(names: Vec<S>) -> Self {
        Self::Any(names.into_iter().map(Into::into).collect())
    }
}
