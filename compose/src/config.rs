//! Configuration for composition.

use serde::{Deserialize, Serialize};

/// What to do with a property whose value does not cast to its field's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MismatchPolicy {
    /// Leave the field untouched and carry on.
    #[default]
    Skip,
    /// Fail the whole composition with a type mismatch error.
    Reject,
}

/// Configuration for a [`Composer`](crate::Composer).
///
/// `clone_with` is infallible and always skips mismatched properties;
/// the policy applies to `construct` and `try_clone_with`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComposeConfig {
    /// Handling of type-mismatched properties
    #[serde(default)]
    pub on_mismatch: MismatchPolicy,
    /// Emit a trace event for every applied property
    #[serde(default)]
    pub log_applications: bool,
}

impl ComposeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mismatched properties are skipped. This is the default.
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Mismatched properties fail composition.
    pub fn strict() -> Self {
        Self {
            on_mismatch: MismatchPolicy::Reject,
            ..Self::default()
        }
    }

    pub fn with_mismatch_policy(mut self, policy: MismatchPolicy) -> Self {
        self.on_mismatch = policy;
        self
    }

    pub fn with_log_applications(mut self, enabled: bool) -> Self {
        self.log_applications = enabled;
        self
    }
}
