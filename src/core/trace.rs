//! Audit trail of a single classification run.
//!
//! A trace records the start state, every transition taken with the token
//! that triggered it, and how the run ended. Traces are built once per run by
//! a [`TraceRecorder`] and are immutable afterwards.

use super::state::StateId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker rendered when a run ends without reaching an accept state.
pub const REJECT_MARKER: &str = "REJECT";

/// Joins the entries of a rendered trace.
pub const TRACE_SEPARATOR: &str = " -> ";

/// One transition taken during a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    /// State the automaton was in
    pub from: StateId,
    /// Token that triggered the move
    pub token: String,
    /// State the automaton moved to
    pub to: StateId,
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "δ({}, '{}') → {}", self.from, self.token, self.to)
    }
}

/// How a run ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceOutcome {
    /// An accept state was reached
    Accepted { state: StateId, category: String },

    /// Input was exhausted in a non-accepting state
    Rejected,
}

/// Complete, immutable record of one classification run.
///
/// # Example
///
/// ```rust
/// use shelfsort::core::{StateId, Trace, TraceOutcome, TraceStep};
///
/// let trace = Trace::begin(StateId::from("s0"))
///     .record(TraceStep {
///         from: StateId::from("s0"),
///         token: "python".to_string(),
///         to: StateId::from("s_py"),
///     })
///     .finish(TraceOutcome::Accepted {
///         state: StateId::from("s_py"),
///         category: "Computer Science".to_string(),
///     });
///
/// assert_eq!(
///     trace.to_string(),
///     "s0 -> δ(s0, 'python') → s_py -> ACCEPT(Computer Science)"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    start: StateId,
    steps: Vec<TraceStep>,
    outcome: TraceOutcome,
}

impl Trace {
    /// Start recording a run that begins in `start`.
    pub fn begin(start: StateId) -> TraceRecorder {
        TraceRecorder {
            start,
            steps: Vec::new(),
        }
    }

    pub fn start(&self) -> &StateId {
        &self.start
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn outcome(&self) -> &TraceOutcome {
        &self.outcome
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self.outcome, TraceOutcome::Rejected)
    }

    /// States visited in order: the start state, then the target of every step.
    pub fn path(&self) -> Vec<&StateId> {
        std::iter::once(&self.start)
            .chain(self.steps.iter().map(|step| &step.to))
            .collect()
    }

    /// State the run ended in.
    pub fn final_state(&self) -> &StateId {
        self.steps.last().map_or(&self.start, |step| &step.to)
    }

    /// Rendered pieces of the trace, in order.
    ///
    /// The first entry is always the start state and the last is the
    /// disposition (`ACCEPT(..)` or [`REJECT_MARKER`]).
    pub fn entries(&self) -> Vec<String> {
        let mut entries = Vec::with_capacity(self.steps.len() + 2);
        entries.push(self.start.to_string());
        entries.extend(self.steps.iter().map(TraceStep::to_string));
        entries.push(match &self.outcome {
            TraceOutcome::Accepted { category, .. } => format!("ACCEPT({category})"),
            TraceOutcome::Rejected => REJECT_MARKER.to_string(),
        });
        entries
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.entries().join(TRACE_SEPARATOR))
    }
}

/// In-progress trace owned by a single run.
#[derive(Clone, Debug)]
pub struct TraceRecorder {
    start: StateId,
    steps: Vec<TraceStep>,
}

impl TraceRecorder {
    /// Append a step, returning the extended recorder.
    pub fn record(mut self, step: TraceStep) -> Self {
        self.steps.push(step);
        self
    }

    /// State the recorded run is currently in.
    pub fn current(&self) -> &StateId {
        self.steps.last().map_or(&self.start, |step| &step.to)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Seal the trace with its outcome.
    pub fn finish(self, outcome: TraceOutcome) -> Trace {
        Trace {
            start: self.start,
            steps: self.steps,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(from: &str, token: &str, to: &str) -> TraceStep {
        TraceStep {
            from: StateId::from(from),
            token: token.to_string(),
            to: StateId::from(to),
        }
    }

    #[test]
    fn new_recorder_is_empty() {
        let recorder = Trace::begin(StateId::from("s0"));
        assert!(recorder.is_empty());
        assert_eq!(recorder.current().as_str(), "s0");
    }

    #[test]
    fn record_moves_current_state() {
        let recorder = Trace::begin(StateId::from("s0"))
            .record(step("s0", "intro", "s1"))
            .record(step("s1", "to", "s2"));

        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.current().as_str(), "s2");
    }

    #[test]
    fn rejected_trace_renders_marker() {
        let trace = Trace::begin(StateId::from("s0")).finish(TraceOutcome::Rejected);

        assert!(trace.is_rejected());
        assert_eq!(trace.entries(), vec!["s0", REJECT_MARKER]);
        assert_eq!(trace.to_string(), "s0 -> REJECT");
    }

    #[test]
    fn path_lists_visited_states() {
        let trace = Trace::begin(StateId::from("start"))
            .record(step("start", "introduction", "intro_seen"))
            .record(step("intro_seen", "to", "prep_seen"))
            .finish(TraceOutcome::Rejected);

        let path: Vec<&str> = trace.path().into_iter().map(StateId::as_str).collect();
        assert_eq!(path, vec!["start", "intro_seen", "prep_seen"]);
        assert_eq!(trace.final_state().as_str(), "prep_seen");
    }

    #[test]
    fn accepted_trace_renders_every_step() {
        let trace = Trace::begin(StateId::from("start"))
            .record(step("start", "introduction", "intro"))
            .record(step("intro", "automata", "cs"))
            .finish(TraceOutcome::Accepted {
                state: StateId::from("cs"),
                category: "Computer Science".to_string(),
            });

        assert!(!trace.is_rejected());
        assert_eq!(
            trace.to_string(),
            "start -> δ(start, 'introduction') → intro -> δ(intro, 'automata') → cs \
             -> ACCEPT(Computer Science)"
        );
    }

    #[test]
    fn trace_serializes_correctly() {
        let trace = Trace::begin(StateId::from("s0"))
            .record(step("s0", "python", "s_py"))
            .finish(TraceOutcome::Accepted {
                state: StateId::from("s_py"),
                category: "Computer Science".to_string(),
            });

        let json = serde_json::to_string(&trace).unwrap();
        let deserialized: Trace = serde_json::from_str(&json).unwrap();
        assert_eq!(trace, deserialized);
    }
}
