//! Core automaton types.
//!
//! This module contains the pure building blocks of the classifier:
//! - Tokenization of raw text into the input alphabet
//! - Typed state definitions
//! - Immutable audit traces of a run
//!
//! Nothing in this module performs I/O or holds shared mutable state.

mod state;
mod tokenizer;
mod trace;

pub use state::{StateDef, StateId, StateKind, DEFAULT_CATEGORY};
pub use tokenizer::tokenize;
pub use trace::{Trace, TraceOutcome, TraceRecorder, TraceStep, REJECT_MARKER, TRACE_SEPARATOR};
