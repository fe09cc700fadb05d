//! Rule sets: the declarative grammar driving the automaton.
//!
//! A [`RuleSet`] can only be obtained through a validating path:
//! - [`validate`] / [`audit`] over loose JSON rule data
//! - [`RuleSetBuilder`] or the [`ruleset!`](crate::ruleset) macro in code
//! - the file and string helpers in [`loader`]
//!
//! Every path guarantees that the start state and all transition targets
//! name defined states, so traversal never meets a dangling reference.

pub mod builder;
pub mod error;
pub mod loader;
pub mod macros;
pub mod validate;

pub use builder::RuleSetBuilder;
pub use error::ValidationError;
pub use validate::{audit, validate};

use crate::core::{StateDef, StateId};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Validated, immutable automaton definition.
///
/// # Example
///
/// ```rust
/// use shelfsort::rules::validate;
/// use serde_json::json;
///
/// let rules = validate(&json!({
///     "start_state": "s0",
///     "states": {
///         "s0": {"transitions": {"python": "s_py"}},
///         "s_py": {"type": "accept", "category": "Computer Science"}
///     }
/// }))
/// .unwrap();
///
/// assert_eq!(rules.start_state().as_str(), "s0");
/// assert_eq!(rules.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    start_state: StateId,
    states: BTreeMap<StateId, StateDef>,
}

impl RuleSet {
    /// Assemble a rule set, checking that every reference resolves.
    pub(crate) fn from_parts(
        start_state: StateId,
        states: BTreeMap<StateId, StateDef>,
    ) -> Result<Self, ValidationError> {
        if states.is_empty() {
            return Err(ValidationError::EmptyRuleSet);
        }

        if !states.contains_key(&start_state) {
            return Err(ValidationError::UnknownStartState {
                state: start_state.to_string(),
            });
        }

        for (name, state) in &states {
            for (token, target) in state.transitions() {
                if !states.contains_key(target) {
                    return Err(ValidationError::DanglingTransition {
                        state: name.to_string(),
                        token: token.clone(),
                        target: target.to_string(),
                    });
                }
            }
        }

        Ok(Self {
            start_state,
            states,
        })
    }

    /// Start building a rule set in code.
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::new()
    }

    pub fn start_state(&self) -> &StateId {
        &self.start_state
    }

    pub fn states(&self) -> &BTreeMap<StateId, StateDef> {
        &self.states
    }

    pub fn state(&self, name: &str) -> Option<&StateDef> {
        self.states.get(name)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Every token some state reacts to.
    pub fn alphabet(&self) -> BTreeSet<&str> {
        self.states
            .values()
            .flat_map(|state| state.transitions().keys())
            .map(String::as_str)
            .collect()
    }

    /// Identifiers of all accept states.
    pub fn accept_states(&self) -> impl Iterator<Item = &StateId> {
        self.states
            .iter()
            .filter(|(_, state)| state.is_accept())
            .map(|(name, _)| name)
    }

    /// Distinct categories the rule set can emit.
    pub fn categories(&self) -> BTreeSet<&str> {
        self.states
            .values()
            .filter_map(StateDef::category)
            .collect()
    }
}

// Rule data is validated on the way in, so deserializing can never produce a
// rule set with dangling references.
impl<'de> Deserialize<'de> for RuleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        validate(&value).map_err(D::Error::custom)
    }
}
