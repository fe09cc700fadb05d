//! Outcome of classifying a single title.

use crate::core::{Trace, TraceOutcome};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Category and audit trace produced by one classification run.
///
/// Results are immutable values; the engine creates a fresh one per call.
/// Serialized, the trace is rendered as text:
/// `{"category": "...", "trace": "s0 -> ..."}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassificationResult {
    category: String,
    trace: Trace,
}

impl ClassificationResult {
    pub(crate) fn new(category: impl Into<String>, trace: Trace) -> Self {
        Self {
            category: category.into(),
            trace,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Human-readable rendering of the trace.
    pub fn trace_text(&self) -> String {
        self.trace.to_string()
    }

    /// Whether an accept state was reached.
    pub fn is_accepted(&self) -> bool {
        matches!(self.trace.outcome(), TraceOutcome::Accepted { .. })
    }

    pub fn into_parts(self) -> (String, Trace) {
        (self.category, self.trace)
    }
}

impl Serialize for ClassificationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut result = serializer.serialize_struct("ClassificationResult", 2)?;
        result.serialize_field("category", &self.category)?;
        result.serialize_field("trace", &self.trace_text())?;
        result.end()
    }
}
