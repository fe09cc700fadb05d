//! Structural validation of loose rule data.
//!
//! [`validate`] runs the checks in a fixed order and stops at the first
//! failure. [`audit`] runs the same checks but accumulates every per-state
//! violation using Stillwater's `Validation`, so a rule author can fix a large
//! rule file in one pass.
//!
//! Neither performs semantic checks such as reachability of accept states.
//! Well-formedness is all traversal needs.

use crate::core::{StateDef, StateId, DEFAULT_CATEGORY};
use crate::rules::error::ValidationError;
use crate::rules::RuleSet;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

type Checked<T> = Validation<T, NonEmptyVec<ValidationError>>;

/// Validate rule data, returning the typed rule set or the first violation.
///
/// Checks, in order:
/// 1. the rule data is a non-empty object
/// 2. `start_state` is present (and a string)
/// 3. `states` is present (and an object)
/// 4. `start_state` names a key of `states`
/// 5. for each state in key order: the definition is an object, its
///    `transitions` (if present) map tokens to state names, and every
///    target names a key of `states`
///
/// # Example
///
/// ```rust
/// use shelfsort::rules::{validate, ValidationError};
/// use serde_json::json;
///
/// let result = validate(&json!({"start_state": "s0", "states": {"s1": {}}}));
/// assert_eq!(
///     result.unwrap_err(),
///     ValidationError::UnknownStartState { state: "s0".to_string() }
/// );
/// ```
pub fn validate(rules: &Value) -> Result<RuleSet, ValidationError> {
    let (start, states) = preamble(rules)?;

    let mut parsed = BTreeMap::new();
    for (name, definition) in states {
        let object = state_object(name, definition)?;
        let mut state = state_kind(object);
        if let Some(table) = transition_table(name, object)? {
            for (token, target) in table {
                let target = transition_target(name, token, target, states)?;
                state = state.on(token.as_str(), target);
            }
        }
        parsed.insert(StateId::from(name.as_str()), state);
    }

    let rules = RuleSet::from_parts(StateId::from(start), parsed)?;
    debug!(
        start = %rules.start_state(),
        states = rules.len(),
        "rule set validated"
    );
    Ok(rules)
}

/// Validate rule data, collecting every violation instead of the first.
///
/// The top-level checks (1 to 4 of [`validate`]) still stop early because
/// later checks are meaningless without them. Per-state checks accumulate
/// across all states and transitions.
///
/// # Example
///
/// ```rust
/// use shelfsort::rules::{audit, ValidationError};
/// use serde_json::json;
///
/// let errors = audit(&json!({
///     "start_state": "s0",
///     "states": {
///         "s0": {"transitions": {"python": "s_py", "rust": "s_rs"}},
///         "s1": {"transitions": ["not", "a", "map"]}
///     }
/// }))
/// .unwrap_err();
///
/// assert_eq!(errors.len(), 3);
/// assert!(errors.contains(&ValidationError::MalformedTransitions { state: "s1".to_string() }));
/// ```
pub fn audit(rules: &Value) -> Result<RuleSet, Vec<ValidationError>> {
    let (start, states) = preamble(rules).map_err(|err| vec![err])?;

    let checks: Vec<Checked<(StateId, StateDef)>> = states
        .iter()
        .map(|(name, definition)| audit_state(name, definition, states))
        .collect();

    match Validation::all_vec(checks) {
        Validation::Success(parsed) => {
            RuleSet::from_parts(StateId::from(start), parsed.into_iter().collect())
                .map_err(|err| vec![err])
        }
        Validation::Failure(errors) => {
            debug!(violations = errors.len(), "rule set audit failed");
            Err(errors.iter().cloned().collect())
        }
    }
}

/// Top-level checks shared by both entry points.
fn preamble(rules: &Value) -> Result<(&str, &Map<String, Value>), ValidationError> {
    let root = match rules.as_object() {
        Some(root) if !root.is_empty() => root,
        _ => return Err(ValidationError::EmptyRuleSet),
    };

    let start = root
        .get("start_state")
        .ok_or(ValidationError::MissingStartState)?;
    let states = root.get("states").ok_or(ValidationError::MissingStates)?;

    let start = start.as_str().ok_or(ValidationError::MalformedStartState)?;
    let states = states
        .as_object()
        .ok_or(ValidationError::MalformedStates)?;

    if !states.contains_key(start) {
        return Err(ValidationError::UnknownStartState {
            state: start.to_string(),
        });
    }

    Ok((start, states))
}

fn audit_state(
    name: &str,
    definition: &Value,
    known: &Map<String, Value>,
) -> Checked<(StateId, StateDef)> {
    let object = match state_object(name, definition) {
        Ok(object) => object,
        Err(err) => return Validation::fail(err),
    };
    let table = match transition_table(name, object) {
        Ok(table) => table,
        Err(err) => return Validation::fail(err),
    };

    let edges: Vec<Checked<(String, StateId)>> = table
        .into_iter()
        .flatten()
        .map(|(token, target)| match transition_target(name, token, target, known) {
            Ok(target) => Validation::success((token.clone(), target)),
            Err(err) => Validation::fail(err),
        })
        .collect();

    match Validation::all_vec(edges) {
        Validation::Success(edges) => {
            let state = edges
                .into_iter()
                .fold(state_kind(object), |state, (token, target)| state.on(token, target));
            Validation::success((StateId::from(name), state))
        }
        Validation::Failure(errors) => Validation::Failure(errors),
    }
}

fn state_object<'a>(
    name: &str,
    definition: &'a Value,
) -> Result<&'a Map<String, Value>, ValidationError> {
    definition
        .as_object()
        .ok_or_else(|| ValidationError::MalformedState {
            state: name.to_string(),
        })
}

/// `"type": "accept"` marks an accept state; anything else is intermediate.
fn state_kind(object: &Map<String, Value>) -> StateDef {
    if object.get("type").and_then(Value::as_str) == Some("accept") {
        let category = object
            .get("category")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_CATEGORY);
        StateDef::accept(category)
    } else {
        StateDef::intermediate()
    }
}

fn transition_table<'a>(
    name: &str,
    object: &'a Map<String, Value>,
) -> Result<Option<&'a Map<String, Value>>, ValidationError> {
    match object.get("transitions") {
        None => Ok(None),
        Some(Value::Object(table)) => Ok(Some(table)),
        Some(_) => Err(ValidationError::MalformedTransitions {
            state: name.to_string(),
        }),
    }
}

fn transition_target(
    name: &str,
    token: &str,
    target: &Value,
    known: &Map<String, Value>,
) -> Result<StateId, ValidationError> {
    let target = target
        .as_str()
        .ok_or_else(|| ValidationError::MalformedTransitions {
            state: name.to_string(),
        })?;

    if !known.contains_key(target) {
        return Err(ValidationError::DanglingTransition {
            state: name.to_string(),
            token: token.to_string(),
            target: target.to_string(),
        });
    }

    Ok(StateId::from(target))
}
