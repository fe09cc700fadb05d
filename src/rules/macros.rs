//! Macros for declaring rule sets in code.

/// Declare a rule set with a compact, JSON-like syntax.
///
/// Expands to a [`RuleSetBuilder`](crate::rules::RuleSetBuilder) chain and
/// evaluates to `Result<RuleSet, ValidationError>`, so dangling references
/// are still rejected.
///
/// # Example
///
/// ```
/// use shelfsort::ruleset;
///
/// let rules = ruleset! {
///     start: "s0";
///     "s0" { "python" => "s_py", "rome" => "s_hist" }
///     "s_py" accept "Computer Science" {}
///     "s_hist" accept "History" {}
/// }
/// .unwrap();
///
/// assert_eq!(rules.len(), 3);
/// ```
#[macro_export]
macro_rules! ruleset {
    (@state) => {
        $crate::core::StateDef::intermediate()
    };

    (@state $category:expr) => {
        $crate::core::StateDef::accept($category)
    };

    (
        start: $start:expr;
        $(
            $name:literal $(accept $category:literal)? {
                $($token:literal => $target:literal),* $(,)?
            }
        )*
    ) => {{
        let builder = $crate::rules::RuleSetBuilder::new().start($start);
        $(
            let state = $crate::ruleset!(@state $($category)?);
            $(
                let state = state.on($token, $target);
            )*
            let builder = builder.state($name, state);
        )*
        builder.build()
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::StateId;
    use crate::rules::ValidationError;

    #[test]
    fn ruleset_macro_builds_rule_set() {
        let rules = ruleset! {
            start: "start";
            "start" { "introduction" => "intro", "python" => "cs" }
            "intro" { "to" => "prep" }
            "prep" { "automata" => "cs" }
            "cs" accept "Computer Science" {}
        }
        .unwrap();

        assert_eq!(rules.start_state().as_str(), "start");
        assert_eq!(rules.len(), 4);
        assert_eq!(
            rules.state("intro").and_then(|s| s.next("to")),
            Some(&StateId::from("prep"))
        );
        assert_eq!(
            rules.state("cs").and_then(|s| s.category()),
            Some("Computer Science")
        );
    }

    #[test]
    fn ruleset_macro_rejects_dangling_target() {
        let result = ruleset! {
            start: "s0";
            "s0" { "python" => "s_missing" }
        };

        assert!(matches!(
            result,
            Err(ValidationError::DanglingTransition { .. })
        ));
    }

    #[test]
    fn ruleset_macro_accepts_state_without_transitions() {
        let rules = ruleset! {
            start: "only";
            "only" accept "Everything" {}
        }
        .unwrap();

        assert!(rules.state("only").map(|s| s.is_accept()).unwrap_or(false));
    }
}
