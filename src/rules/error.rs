//! Structural errors in rule data.

use thiserror::Error;

/// Reasons a rule set cannot be trusted by the engine.
///
/// Every variant that concerns a particular state names it, so the fix can be
/// located directly in the rule file.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Rules cannot be empty")]
    EmptyRuleSet,

    #[error("Rules must define a 'start_state'")]
    MissingStartState,

    #[error("'start_state' must be a state name string")]
    MalformedStartState,

    #[error("Rules must define 'states'")]
    MissingStates,

    #[error("'states' must map state names to state definitions")]
    MalformedStates,

    #[error("start_state '{state}' must exist in states")]
    UnknownStartState { state: String },

    #[error("Definition of state '{state}' must be an object")]
    MalformedState { state: String },

    #[error("Transitions for state '{state}' must map tokens to state names")]
    MalformedTransitions { state: String },

    #[error(
        "Transition from '{state}' on symbol '{token}' points to undefined state '{target}'"
    )]
    DanglingTransition {
        state: String,
        token: String,
        target: String,
    },
}
