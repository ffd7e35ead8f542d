// SPDX-License-Identifier: MPL-2.0
//! Toast newtypes.
//!
//! This module provides type-safe wrappers for toast activation values,
//! ensuring they are always within valid ranges.

use std::fmt;
use std::time::Duration;

// =============================================================================
// Auto-Hide Delay Bounds
// =============================================================================

/// Auto-hide delay bounds in milliseconds (250 to 60000).
pub mod delay_bounds {
    /// Minimum auto-hide delay in milliseconds.
    pub const MIN_MS: u64 = 250;
    /// Maximum auto-hide delay in milliseconds.
    pub const MAX_MS: u64 = 60_000;
    /// Default auto-hide delay in milliseconds.
    pub const DEFAULT_MS: u64 = 4_000;
}

// =============================================================================
// AutoHideDelay
// =============================================================================

/// Auto-hide delay applied to every activated toast.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (250–60000 ms).
///
/// # Example
///
/// ```ignore
/// let delay = AutoHideDelay::new(4000);
/// assert_eq!(delay.millis(), 4000);
///
/// // Values outside range are clamped
/// let too_low = AutoHideDelay::new(10);
/// assert_eq!(too_low.millis(), 250); // Clamped to min
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AutoHideDelay(u64);

impl AutoHideDelay {
    /// Creates a new auto-hide delay, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(delay_bounds::MIN_MS, delay_bounds::MAX_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= delay_bounds::MIN_MS
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= delay_bounds::MAX_MS
    }
}

impl Default for AutoHideDelay {
    fn default() -> Self {
        Self(delay_bounds::DEFAULT_MS)
    }
}

impl fmt::Display for AutoHideDelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.0)
    }
}

// =============================================================================
// MarkerClass
// =============================================================================

/// Class token that marks an element as a toast.
///
/// A marker is a single class token and is matched against whole tokens of
/// a `class` attribute, never against substrings. `"toast"` therefore does
/// not match an element whose only class is `"toast-container"`.
///
/// Invalid candidates (empty, or containing whitespace) fall back to the
/// default token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerClass(String);

impl MarkerClass {
    /// Default marker token.
    pub const DEFAULT_TOKEN: &'static str = "toast";

    /// Creates a new marker class, falling back to the default token if the
    /// candidate is not a single non-empty class token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() || trimmed.split_whitespace().count() > 1 {
            return Self::default();
        }
        Self(trimmed.to_string())
    }

    /// Returns the marker token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if a raw `class` attribute value contains this marker
    /// as a whole token.
    #[must_use]
    pub fn matches_attr(&self, class_attr: &str) -> bool {
        class_attr.split_whitespace().any(|token| token == self.0)
    }
}

impl Default for MarkerClass {
    fn default() -> Self {
        Self(Self::DEFAULT_TOKEN.to_string())
    }
}

impl fmt::Display for MarkerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
