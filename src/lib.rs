//! Shelfsort: rule-driven classification of book titles
//!
//! Shelfsort runs a deterministic finite automaton over the word tokens of a
//! title. The automaton (states, transitions, accept states and the
//! categories they emit) is plain JSON data, so the classification grammar
//! can change without touching the engine.
//!
//! # Core Concepts
//!
//! - **Tokens**: lower-cased ASCII alphanumeric runs, the automaton's alphabet
//! - **Rule sets**: validated, immutable automaton definitions
//! - **Engine**: classifies one title at a time, producing a category and an
//!   audit trace of every transition taken
//! - **Reports**: batch runs kept as plain, persistable values
//!
//! # Example
//!
//! ```rust
//! use shelfsort::{Engine, UNKNOWN_CATEGORY};
//!
//! let engine = Engine::from_json_str(r#"{
//!     "start_state": "s0",
//!     "states": {
//!         "s0": {"transitions": {"python": "s_py"}},
//!         "s_py": {"type": "accept", "category": "Computer Science"}
//!     }
//! }"#)
//! .unwrap();
//!
//! let result = engine.classify("Learning Python");
//! assert_eq!(result.category(), "Computer Science");
//! assert_eq!(
//!     result.trace_text(),
//!     "s0 -> δ(s0, 'python') → s_py -> ACCEPT(Computer Science)"
//! );
//!
//! let result = engine.classify("History of Rome");
//! assert_eq!(result.category(), UNKNOWN_CATEGORY);
//! assert_eq!(result.trace_text(), "s0 -> REJECT");
//! ```

pub mod core;
pub mod engine;
pub mod report;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{tokenize, StateDef, StateId, StateKind, Trace, TraceOutcome, TraceStep};
pub use engine::{ClassificationResult, Engine, EngineError, UNKNOWN_CATEGORY};
pub use report::{BatchReport, ReportError, ReportRow};
pub use rules::{audit, validate, RuleSet, RuleSetBuilder, ValidationError};
