// SPDX-License-Identifier: MPL-2.0
//! Activation event types.
//!
//! This module defines the events captured while an activation pass runs.
//! Events carry a monotonic timestamp for duration calculations; the
//! serializable export form lives in [`super::export`].

use std::time::Instant;

use serde::{Deserialize, Serialize};

// =============================================================================
// ActivationEvent
// =============================================================================

/// A single captured activation event.
#[derive(Debug, Clone)]
pub struct ActivationEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: ActivationEventKind,
}

impl ActivationEvent {
    /// Creates a new activation event with the current timestamp.
    #[must_use]
    pub fn new(kind: ActivationEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates a new activation event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: ActivationEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

// =============================================================================
// ActivationEventKind
// =============================================================================

/// The type and associated data for an activation event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivationEventKind {
    /// The ready signal fired and a pass began.
    ActivationStarted {
        /// Number of toast candidates the provider discovered.
        discovered: usize,
    },

    /// No toolkit was wired in; the pass degraded to a no-op.
    ToolkitMissing,

    /// Something unusable occupied the toolkit slot; the pass degraded
    /// to a no-op.
    ToolkitMalformed {
        /// Short description of what was found.
        found: String,
    },

    /// One toast was constructed and shown.
    WidgetShown {
        /// Zero-based position within the discovered sequence.
        position: usize,
        /// Selector-style description of the element.
        element: String,
    },

    /// One element failed to activate.
    ElementFailed {
        /// Zero-based position within the discovered sequence.
        position: usize,
        /// Selector-style description of the element.
        element: String,
        /// Human-readable failure reason.
        reason: String,
    },

    /// The pass finished and produced a report.
    ActivationFinished {
        /// Number of toasts shown.
        shown: usize,
        /// Number of elements that failed.
        failed: usize,
    },

    /// A ready signal arrived after the pass already ran and was ignored.
    ReadySignalIgnored,
}

// =============================================================================
// Tests
// =============================================================================
