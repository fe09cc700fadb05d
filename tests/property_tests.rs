//! Property-based tests for tokenization and classification.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use shelfsort::core::tokenize;
use shelfsort::engine::Engine;
use shelfsort::rules::loader;
use shelfsort::ruleset;

fn python_engine() -> Engine {
    let rules = ruleset! {
        start: "s0";
        "s0" { "python" => "s_py" }
        "s_py" accept "Computer Science" {}
    }
    .unwrap();
    Engine::new(rules)
}

fn chain_engine() -> Engine {
    let rules = ruleset! {
        start: "start";
        "start" { "introduction" => "intro", "python" => "cs" }
        "intro" { "to" => "prep" }
        "prep" { "automata" => "cs", "physics" => "sci" }
        "cs" accept "Computer Science" { "physics" => "sci" }
        "sci" accept "Science" {}
    }
    .unwrap();
    Engine::new(rules)
}

fn default_engine() -> Engine {
    Engine::new(loader::default_rules().unwrap())
}

prop_compose! {
    fn known_word()(index in 0..5usize) -> &'static str {
        ["introduction", "to", "automata", "physics", "python"][index]
    }
}

prop_compose! {
    fn noise_word()(word in "[qxz]{3,8}") -> String {
        word
    }
}

prop_compose! {
    fn mixed_words()(words in prop::collection::vec(
        prop_oneof![
            known_word().prop_map(|w| (w.to_string(), false)),
            noise_word().prop_map(|w| (w, true)),
        ],
        0..12,
    )) -> Vec<(String, bool)> {
        words
    }
}

proptest! {
    #[test]
    fn tokens_use_only_ascii_alphanumerics(text in any::<String>()) {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(token.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn tokenize_is_pure(text in any::<String>()) {
        prop_assert_eq!(tokenize(&text), tokenize(&text));
    }

    #[test]
    fn classify_is_total_and_deterministic(text in any::<String>()) {
        let engine = default_engine();
        let first = engine.classify(&text);
        let second = engine.classify(&text);
        prop_assert_eq!(first.category(), second.category());
        prop_assert_eq!(first.trace_text(), second.trace_text());
    }

    #[test]
    fn trace_begins_at_start_state(text in any::<String>()) {
        let engine = default_engine();
        let result = engine.classify(&text);
        let start = engine.rules().start_state().to_string();

        prop_assert_eq!(result.trace().start().as_str(), start.as_str());
        let entries = result.trace().entries();
        prop_assert_eq!(&entries[0], &start);
        prop_assert!(result.trace_text().starts_with(start.as_str()));
    }

    #[test]
    fn acceptance_stops_consuming_tokens(
        prefix in prop::collection::vec(noise_word(), 0..5),
        suffix in prop::collection::vec(
            prop_oneof![known_word().prop_map(str::to_string), noise_word()],
            0..8,
        ),
    ) {
        let title = prefix
            .iter()
            .cloned()
            .chain(std::iter::once("Python".to_string()))
            .chain(suffix.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");

        let result = python_engine().classify(&title);
        prop_assert_eq!(result.category(), "Computer Science");
        prop_assert_eq!(result.trace().steps().len(), 1);
        prop_assert_eq!(result.trace().steps()[0].token.as_str(), "python");
    }

    #[test]
    fn unmatched_tokens_are_skipped(words in mixed_words()) {
        let engine = chain_engine();

        let title = words
            .iter()
            .map(|(word, _)| word.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let known: Vec<&str> = words
            .iter()
            .filter(|(_, noise)| !noise)
            .map(|(word, _)| word.as_str())
            .collect();

        let with_noise = engine.classify(&title);
        let without_noise = engine.run(&known);

        prop_assert_eq!(with_noise, without_noise);
    }

    #[test]
    fn trace_steps_chain_together(text in "[a-z ]{0,60}") {
        let engine = default_engine();
        let result = engine.classify(&text);
        let path = result.trace().path();

        for (step, pair) in result.trace().steps().iter().zip(path.windows(2)) {
            prop_assert_eq!(&step.from, pair[0]);
            prop_assert_eq!(&step.to, pair[1]);
            prop_assert_eq!(
                engine.rules().state(step.from.as_str()).and_then(|s| s.next(&step.token)),
                Some(&step.to)
            );
        }
    }
}
