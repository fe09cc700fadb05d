//! Automaton engine that classifies titles against a validated rule set.
//!
//! Traversal semantics:
//! - tokens with no outgoing transition from the current state are skipped
//! - stepping into an accept state ends the run immediately
//! - an accept start state is only checked at end of input, so its own
//!   outgoing transitions are followed like any other
//! - at end of input the current state decides: accepting yields its
//!   category, anything else yields [`UNKNOWN_CATEGORY`] and a rejected trace
//!
//! The engine holds no mutable state, so one instance can serve any number of
//! callers, on any number of threads.

mod result;

pub use result::ClassificationResult;

use crate::core::{tokenize, StateDef, Trace, TraceOutcome, TraceStep};
use crate::rules::{validate, RuleSet, ValidationError};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Category reported when no accept state is reached.
pub const UNKNOWN_CATEGORY: &str = "Unknown / Review";

/// Errors that can occur when constructing an engine
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid rule set: {0}")]
    InvalidRuleSet(#[from] ValidationError),

    #[error("Rule data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Deterministic classifier over a validated rule set.
///
/// # Example
///
/// ```rust
/// use shelfsort::engine::{Engine, UNKNOWN_CATEGORY};
/// use serde_json::json;
///
/// let engine = Engine::from_value(&json!({
///     "start_state": "s0",
///     "states": {
///         "s0": {"transitions": {"python": "s_py"}},
///         "s_py": {"type": "accept", "category": "Computer Science"}
///     }
/// }))
/// .unwrap();
///
/// assert_eq!(engine.classify("Learning Python").category(), "Computer Science");
/// assert_eq!(engine.classify("History of Rome").category(), UNKNOWN_CATEGORY);
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    rules: Arc<RuleSet>,
}

impl Engine {
    /// Create an engine from an already validated rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    /// Validate loose rule data and create an engine from it.
    pub fn from_value(rules: &Value) -> Result<Self, EngineError> {
        Ok(Self::new(validate(rules)?))
    }

    /// Parse and validate JSON rule text and create an engine from it.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Classify one title.
    ///
    /// Never fails: every string, including the empty one, yields a result.
    pub fn classify(&self, title: &str) -> ClassificationResult {
        let tokens = tokenize(title);
        let result = self.run(&tokens);
        debug!(
            title,
            category = result.category(),
            steps = result.trace().steps().len(),
            "classified title"
        );
        result
    }

    /// Run the automaton over an already tokenized input.
    pub fn run<T: AsRef<str>>(&self, tokens: &[T]) -> ClassificationResult {
        let mut trace = Trace::begin(self.rules.start_state().clone());

        for token in tokens.iter().map(AsRef::as_ref) {
            let Some(to) = self
                .state(trace.current().as_str())
                .and_then(|state| state.next(token))
            else {
                continue;
            };

            let from = trace.current().clone();
            debug!(from = %from, token, to = %to, "transition");
            trace = trace.record(TraceStep {
                from,
                token: token.to_string(),
                to: to.clone(),
            });

            if let Some(category) = self.state(to.as_str()).and_then(StateDef::category) {
                let outcome = TraceOutcome::Accepted {
                    state: to.clone(),
                    category: category.to_string(),
                };
                return ClassificationResult::new(category, trace.finish(outcome));
            }
        }

        let current = trace.current().clone();
        match self.state(current.as_str()).and_then(StateDef::category) {
            Some(category) => {
                let outcome = TraceOutcome::Accepted {
                    state: current,
                    category: category.to_string(),
                };
                ClassificationResult::new(category, trace.finish(outcome))
            }
            None => {
                ClassificationResult::new(UNKNOWN_CATEGORY, trace.finish(TraceOutcome::Rejected))
            }
        }
    }

    /// Classify every title, returning results in input order.
    pub fn classify_batch<I>(&self, titles: I) -> Vec<ClassificationResult>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        titles
            .into_iter()
            .map(|title| self.classify(title.as_ref()))
            .collect()
    }

    fn state(&self, name: &str) -> Option<&StateDef> {
        self.rules.state(name)
    }
}
