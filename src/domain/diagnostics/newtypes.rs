// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.
//!
//! This module provides type-safe wrappers for diagnostics values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Log Capacity Bounds
// =============================================================================

/// Event log capacity bounds (16 to 4096 events).
pub mod log_capacity_bounds {
    /// Minimum log capacity.
    pub const MIN: usize = 16;
    /// Maximum log capacity.
    pub const MAX: usize = 4096;
    /// Default log capacity.
    pub const DEFAULT: usize = 256;
}

// =============================================================================
// LogCapacity
// =============================================================================

/// Capacity of the activation event log.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (16–4096 events).
///
/// # Example
///
/// ```ignore
/// let capacity = LogCapacity::new(256);
/// assert_eq!(capacity.value(), 256);
///
/// // Values outside range are clamped
/// let too_high = LogCapacity::new(1_000_000);
/// assert_eq!(too_high.value(), 4096); // Clamped to max
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogCapacity(usize);

impl LogCapacity {
    /// Creates a new log capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(log_capacity_bounds::MIN, log_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= log_capacity_bounds::MIN
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= log_capacity_bounds::MAX
    }
}

impl Default for LogCapacity {
    fn default() -> Self {
        Self(log_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
