//! Loading rule sets from JSON text, readers and files.
//!
//! Every loader parses the JSON into a loose value first and then runs
//! [`validate`], so a rule file is either fully trusted or rejected with the
//! exact structural problem.

use crate::rules::error::ValidationError;
use crate::rules::validate::validate;
use crate::rules::RuleSet;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Rule set bundled with the crate, used when no rule file is supplied.
pub const DEFAULT_RULES: &str = include_str!("../../data/rules.json");

/// Errors that can occur while loading rules
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read rules from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Rules are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid rules: {0}")]
    Invalid(#[from] ValidationError),
}

/// Load rules from a JSON string.
///
/// # Example
///
/// ```rust
/// use shelfsort::rules::loader;
///
/// let rules = loader::from_str(
///     r#"{"start_state": "s0", "states": {"s0": {"type": "accept", "category": "All"}}}"#,
/// )
/// .unwrap();
///
/// assert_eq!(rules.start_state().as_str(), "s0");
/// ```
pub fn from_str(json: &str) -> Result<RuleSet, LoadError> {
    let value: Value = serde_json::from_str(json)?;
    checked(&value)
}

/// Load rules from any reader producing JSON.
pub fn from_reader<R: Read>(reader: R) -> Result<RuleSet, LoadError> {
    let value: Value = serde_json::from_reader(reader)?;
    checked(&value)
}

/// Load rules from a JSON file on disk.
pub fn from_path(path: impl AsRef<Path>) -> Result<RuleSet, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "loading rules");
    from_reader(BufReader::new(file))
}

/// The bundled default rule set.
pub fn default_rules() -> Result<RuleSet, LoadError> {
    from_str(DEFAULT_RULES)
}

fn checked(value: &Value) -> Result<RuleSet, LoadError> {
    validate(value).map_err(|err| {
        warn!(error = %err, "rejected rule set");
        LoadError::Invalid(err)
    })
}
