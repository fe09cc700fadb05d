//! Tokenizer defining the automaton's input alphabet.
//!
//! Raw text is lower-cased and split into maximal runs of ASCII letters and
//! digits. Everything else (whitespace, punctuation, symbols, non-ASCII
//! letters) acts as a separator and is discarded.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9]+").expect("word pattern should always compile"));

/// Convert raw text into an ordered sequence of word tokens.
///
/// Token order follows the input left to right and duplicates are kept.
/// Empty input yields an empty sequence. Every token matches `[a-z0-9]+`.
///
/// # Example
///
/// ```rust
/// use shelfsort::core::tokenize;
///
/// assert_eq!(
///     tokenize("Learning Python, 3rd Ed."),
///     vec!["learning", "python", "3rd", "ed"]
/// );
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    WORD.find_iter(&lowered)
        .map(|word| word.as_str().to_string())
        .collect()
}
