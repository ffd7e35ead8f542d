// SPDX-License-Identifier: MPL-2.0
//! Activation report types.
//!
//! One activation pass produces one [`ActivationReport`]: what the overall
//! outcome was, how many candidates were discovered, and what happened to
//! each of them. The report is the host-facing record of the pass and is
//! serializable for export.

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

// =============================================================================
// Activation Outcome
// =============================================================================

/// Overall outcome of one activation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationOutcome {
    /// Every discovered element was processed.
    Completed,
    /// No toolkit was wired in; nothing was attempted.
    ToolkitMissing,
    /// Something unusable sat where the toolkit should be; nothing was attempted.
    ToolkitMalformed,
    /// The abort-on-first policy stopped the batch at a failure.
    Aborted,
}

impl ActivationOutcome {
    /// Returns true if the pass skipped widget work entirely.
    ///
    /// A skip is the quiet degradation path: the page renders as if the
    /// activation never ran, and no element records are produced.
    #[must_use]
    pub fn is_skip(self) -> bool {
        matches!(self, Self::ToolkitMissing | Self::ToolkitMalformed)
    }
}

// =============================================================================
// Element Disposition
// =============================================================================

/// What happened to one discovered element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ElementDisposition {
    /// The toast was constructed and shown.
    Shown,
    /// Construction or showing failed.
    Failed {
        /// Human-readable failure reason.
        reason: String,
    },
    /// An earlier failure aborted the batch before this element.
    NotReached,
}

// =============================================================================
// Element Record
// =============================================================================

/// Per-element entry in an activation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRecord {
    /// Zero-based position within the discovered sequence.
    pub position: usize,
    /// Selector-style description of the element, e.g. `div#message-1`.
    pub element: String,
    /// What happened to the element.
    pub disposition: ElementDisposition,
}

impl ElementRecord {
    /// Creates a record for a successfully shown element.
    #[must_use]
    pub fn shown(position: usize, element: impl Into<String>) -> Self {
        Self {
            position,
            element: element.into(),
            disposition: ElementDisposition::Shown,
        }
    }

    /// Creates a record for a failed element.
    #[must_use]
    pub fn failed(position: usize, element: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            position,
            element: element.into(),
            disposition: ElementDisposition::Failed {
                reason: reason.into(),
            },
        }
    }

    /// Creates a record for an element the batch never reached.
    #[must_use]
    pub fn not_reached(position: usize, element: impl Into<String>) -> Self {
        Self {
            position,
            element: element.into(),
            disposition: ElementDisposition::NotReached,
        }
    }

    /// Returns true if the element was shown.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        matches!(self.disposition, ElementDisposition::Shown)
    }

    /// Returns true if the element failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self.disposition, ElementDisposition::Failed { .. })
    }
}

// =============================================================================
// Activation Report
// =============================================================================

/// Record of one activation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivationReport {
    /// Overall outcome of the pass.
    pub outcome: ActivationOutcome,
    /// Number of toast candidates the provider discovered.
    pub discovered: usize,
    /// Per-element records in document order. Empty when the pass skipped
    /// widget work because no usable toolkit was found.
    pub records: Vec<ElementRecord>,
    /// When the report was generated (ISO 8601).
    pub generated_at: String,
    /// Duration of the pass in milliseconds.
    pub duration_ms: u64,
}

impl ActivationReport {
    /// Creates a report for a pass that just finished.
    #[must_use]
    pub fn new(
        outcome: ActivationOutcome,
        discovered: usize,
        records: Vec<ElementRecord>,
        elapsed: Duration,
    ) -> Self {
        Self {
            outcome,
            discovered,
            records,
            generated_at: Utc::now().to_rfc3339(),
            duration_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Returns the number of elements that were shown.
    #[must_use]
    pub fn shown_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_shown()).count()
    }

    /// Returns the number of elements that failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_failed()).count()
    }

    /// Returns true if every discovered element was shown.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.outcome == ActivationOutcome::Completed && self.shown_count() == self.discovered
    }
}

// =============================================================================
// Tests
// =============================================================================
