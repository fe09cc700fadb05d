//! Typed automaton states.
//!
//! A state is either intermediate or accepting. Accepting states carry the
//! category emitted when classification reaches them. Both kinds may own a
//! transition table keyed by token.

use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// Category of an accept state that does not name one.
pub const DEFAULT_CATEGORY: &str = "Unknown";

/// Opaque identifier of a state, as written in the rule data.
///
/// # Example
///
/// ```rust
/// use shelfsort::core::StateId;
///
/// let id = StateId::from("s0");
/// assert_eq!(id.as_str(), "s0");
/// assert_eq!(id.to_string(), "s0");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for StateId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StateId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for StateId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Whether reaching a state ends classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateKind {
    /// Non-accepting state; traversal continues from here
    Intermediate,

    /// Terminal state emitting a category
    Accept { category: String },
}

/// One automaton node: its kind and its outgoing transitions.
///
/// Transitions map a token to exactly one destination, so a state can never
/// be non-deterministic. Accept states may carry transitions too. Entering an
/// accept state ends a run, so they are only ever followed when the accept
/// state is the start state, where acceptance is checked at end of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateDef {
    kind: StateKind,
    transitions: BTreeMap<String, StateId>,
}

impl StateDef {
    pub fn intermediate() -> Self {
        Self {
            kind: StateKind::Intermediate,
            transitions: BTreeMap::new(),
        }
    }

    pub fn accept(category: impl Into<String>) -> Self {
        Self {
            kind: StateKind::Accept {
                category: category.into(),
            },
            transitions: BTreeMap::new(),
        }
    }

    /// Add (or replace) the transition taken on `token`.
    pub fn on(mut self, token: impl Into<String>, target: impl Into<StateId>) -> Self {
        self.transitions.insert(token.into(), target.into());
        self
    }

    pub fn kind(&self) -> &StateKind {
        &self.kind
    }

    pub fn is_accept(&self) -> bool {
        matches!(self.kind, StateKind::Accept { .. })
    }

    /// Category emitted by this state, if it is an accept state.
    pub fn category(&self) -> Option<&str> {
        match &self.kind {
            StateKind::Accept { category } => Some(category.as_str()),
            StateKind::Intermediate => None,
        }
    }

    pub fn transitions(&self) -> &BTreeMap<String, StateId> {
        &self.transitions
    }

    /// Destination reached on `token`, if this state reacts to it.
    pub fn next(&self, token: &str) -> Option<&StateId> {
        self.transitions.get(token)
    }
}

#[derive(Serialize)]
struct StateDefWire<'a> {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<&'a str>,
    #[serde(skip_serializing_if = "no_transitions")]
    transitions: &'a BTreeMap<String, StateId>,
}

fn no_transitions(transitions: &&BTreeMap<String, StateId>) -> bool {
    transitions.is_empty()
}

// Written in the same shape the rule files use, so a validated rule set
// serializes back into loadable rule data.
impl Serialize for StateDef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        StateDefWire {
            kind: self.is_accept().then_some("accept"),
            category: self.category(),
            transitions: &self.transitions,
        }
        .serialize(serializer)
    }
}
