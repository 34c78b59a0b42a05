//! Failure handling and library configuration.
//!
//! Every fallible entry point can be run under a [`FailurePolicy`]:
//!
//! - [`FailurePolicy::Report`] hands the structured [`Error`] back as `Err`.
//! - [`FailurePolicy::Abort`] unwinds the current operation with the
//!   [`Error`] as the panic payload, so a host that wants to observe it can
//!   `catch_unwind` and downcast.
//!
//! # Example
//!
//! ```rust
//! use media_type::{Config, FailurePolicy};
//!
//! let config = Config::from_toml_str("failure_policy = \"report\"").unwrap();
//! assert_eq!(config.failure_policy, FailurePolicy::Report);
//!
//! assert_eq!(Config::default().failure_policy, FailurePolicy::Abort);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What to do when validation fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Unwind with the structured error as the panic payload.
    #[default]
    Abort,
    /// Return the structured error to the caller.
    Report,
}

impl FailurePolicy {
    /// Applies this policy to the outcome of an operation.
    ///
    /// Under `Report` the outcome is returned unchanged. Under `Abort` an
    /// `Err` never comes back: the error unwinds instead.
    ///
    /// # Panics
    ///
    /// Panics with the [`Error`] as payload when the policy is `Abort` and
    /// `outcome` is an error.
    #[allow(clippy::panic)]
    pub fn enforce<T>(self, outcome: Result<T>) -> Result<T> {
        match (self, outcome) {
            (FailurePolicy::Abort, Err(err)) => std::panic::panic_any(err),
            (_, outcome) => outcome,
        }
    }
}

/// Library configuration.
///
/// Missing keys fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Policy used by callers that do not pick one explicitly.
    pub failure_policy: FailurePolicy,
}

impl Config {
    /// Loads a configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse media-type config: {e}")))
    }
}
