// SPDX-License-Identifier: MPL-2.0
//! Activation policy types.
//!
//! This module provides pure domain types for the activation pass:
//! - [`FailurePolicy`]: What happens to the batch when one element fails
//! - [`ActivationSettings`]: Per-activation settings bundle

use crate::domain::toast::AutoHideDelay;
use std::fmt;

// =============================================================================
// FailurePolicy
// =============================================================================

/// What happens to the rest of a batch when one element fails to activate.
///
/// The default isolates failures: one misbehaving element never blocks the
/// elements after it, and every failure is recorded rather than swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Keep processing the remaining elements; record each failure.
    #[default]
    IsolateAndReport,
    /// Stop at the first failing element; later elements are not reached.
    AbortOnFirst,
}

impl FailurePolicy {
    /// Parses a configuration token into a policy.
    ///
    /// Recognized tokens are `"isolate"` and `"abort"`. Unknown tokens
    /// return `None` so callers can fall back to the default.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "isolate" => Some(Self::IsolateAndReport),
            "abort" => Some(Self::AbortOnFirst),
            _ => None,
        }
    }

    /// Returns the configuration token for this policy.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::IsolateAndReport => "isolate",
            Self::AbortOnFirst => "abort",
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

// =============================================================================
// ActivationSettings
// =============================================================================

/// Settings applied to a single activation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActivationSettings {
    auto_hide_delay: AutoHideDelay,
    failure_policy: FailurePolicy,
}

impl ActivationSettings {
    /// Creates a new settings bundle.
    #[must_use]
    pub fn new(auto_hide_delay: AutoHideDelay, failure_policy: FailurePolicy) -> Self {
        Self {
            auto_hide_delay,
            failure_policy,
        }
    }

    /// Returns the auto-hide delay applied to every shown toast.
    #[must_use]
    pub fn auto_hide_delay(self) -> AutoHideDelay {
        self.auto_hide_delay
    }

    /// Returns the failure policy for the batch.
    #[must_use]
    pub fn failure_policy(self) -> FailurePolicy {
        self.failure_policy
    }
}

// =============================================================================
// Tests
// =============================================================================
