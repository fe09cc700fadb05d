//! Builder for constructing rule sets in code.

use crate::core::{StateDef, StateId};
use crate::rules::error::ValidationError;
use crate::rules::RuleSet;
use std::collections::BTreeMap;

/// Builder for rule sets with a fluent API.
///
/// `build` fails rather than producing a rule set with a dangling start state
/// or transition target.
///
/// # Example
///
/// ```rust
/// use shelfsort::rules::RuleSetBuilder;
///
/// let rules = RuleSetBuilder::new()
///     .start("s0")
///     .transition("s0", "python", "s_py")
///     .accept("s_py", "Computer Science")
///     .build()
///     .unwrap();
///
/// assert_eq!(rules.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RuleSetBuilder {
    start: Option<StateId>,
    states: BTreeMap<StateId, StateDef>,
}

impl RuleSetBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start state (required).
    pub fn start(mut self, state: impl Into<StateId>) -> Self {
        self.start = Some(state.into());
        self
    }

    /// Define a state, replacing any earlier definition of the same name.
    pub fn state(mut self, name: impl Into<StateId>, definition: StateDef) -> Self {
        self.states.insert(name.into(), definition);
        self
    }

    /// Define an accept state emitting `category`.
    pub fn accept(self, name: impl Into<StateId>, category: impl Into<String>) -> Self {
        self.state(name, StateDef::accept(category))
    }

    /// Add a transition, creating `from` as an intermediate state if needed.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        token: impl Into<String>,
        to: impl Into<StateId>,
    ) -> Self {
        let from = from.into();
        let state = self
            .states
            .remove(&from)
            .unwrap_or_else(StateDef::intermediate);
        self.states.insert(from, state.on(token, to));
        self
    }

    /// Build the rule set.
    /// Returns an error if a state is missing or a reference dangles.
    pub fn build(self) -> Result<RuleSet, ValidationError> {
        if self.states.is_empty() {
            return Err(ValidationError::EmptyRuleSet);
        }

        let start = self.start.ok_or(ValidationError::MissingStartState)?;
        RuleSet::from_parts(start, self.states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_states() {
        let result = RuleSetBuilder::new().start("s0").build();
        assert_eq!(result, Err(ValidationError::EmptyRuleSet));
    }

    #[test]
    fn builder_requires_start_state() {
        let result = RuleSetBuilder::new().accept("s0", "Anything").build();
        assert_eq!(result, Err(ValidationError::MissingStartState));
    }

    #[test]
    fn builder_rejects_unknown_start_state() {
        let result = RuleSetBuilder::new()
            .start("s0")
            .state("s1", StateDef::intermediate())
            .build();

        assert_eq!(
            result,
            Err(ValidationError::UnknownStartState {
                state: "s0".to_string()
            })
        );
    }

    #[test]
    fn builder_rejects_dangling_transition() {
        let result = RuleSetBuilder::new()
            .start("s0")
            .transition("s0", "python", "s_missing")
            .build();

        assert_eq!(
            result,
            Err(ValidationError::DanglingTransition {
                state: "s0".to_string(),
                token: "python".to_string(),
                target: "s_missing".to_string(),
            })
        );
    }

    #[test]
    fn transition_keeps_existing_state_kind() {
        let rules = RuleSetBuilder::new()
            .start("s0")
            .accept("s0", "Fallback")
            .transition("s0", "more", "s0")
            .build()
            .unwrap();

        let s0 = rules.state("s0").unwrap();
        assert!(s0.is_accept());
        assert_eq!(s0.next("more").map(StateId::as_str), Some("s0"));
    }

    #[test]
    fn fluent_api_builds_rule_set() {
        let rules = RuleSetBuilder::new()
            .start("start")
            .transition("start", "introduction", "intro")
            .transition("intro", "to", "prep")
            .transition("prep", "automata", "cs")
            .accept("cs", "Computer Science")
            .build()
            .unwrap();

        assert_eq!(rules.start_state().as_str(), "start");
        assert_eq!(rules.len(), 4);
        assert_eq!(rules.categories().len(), 1);
    }
}
