// SPDX-License-Identifier: MPL-2.0
//! Memory-bounded storage for activation events.
//!
//! This module provides a ring buffer that automatically evicts the oldest
//! events when capacity is reached, so a long-lived host never grows its
//! diagnostics without bound.

use std::collections::VecDeque;

use super::events::ActivationEvent;

// Re-export domain type
#[allow(unused_imports)] // Used by tests and may be used by external consumers
pub use crate::domain::diagnostics::log_capacity_bounds;
pub use crate::domain::diagnostics::LogCapacity;

/// A ring buffer of activation events with fixed capacity.
///
/// When the log is full, pushing a new event evicts the oldest one.
/// Events are stored in chronological order (oldest first).
///
/// # Example
///
/// ```
/// use toast_usher::diagnostics::{ActivationEvent, ActivationEventKind, EventLog, LogCapacity};
///
/// let mut log = EventLog::new(LogCapacity::default());
/// log.push(ActivationEvent::new(ActivationEventKind::ActivationStarted { discovered: 2 }));
/// log.push(ActivationEvent::new(ActivationEventKind::ActivationFinished { shown: 2, failed: 0 }));
///
/// assert_eq!(log.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<ActivationEvent>,
    capacity: usize,
}

impl EventLog {
    /// Creates a new event log with the specified capacity.
    #[must_use]
    pub fn new(capacity: LogCapacity) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.value()),
            capacity: capacity.value(),
        }
    }

    /// Pushes an event, evicting the oldest if at capacity.
    pub fn push(&mut self, event: ActivationEvent) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(event);
    }

    /// Returns an iterator over the events in chronological order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &ActivationEvent> {
        self.entries.iter()
    }

    /// Returns the most recently pushed event.
    #[must_use]
    pub fn latest(&self) -> Option<&ActivationEvent> {
        self.entries.back()
    }

    /// Returns the number of events in the log.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum capacity of the log.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clears all events from the log.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
