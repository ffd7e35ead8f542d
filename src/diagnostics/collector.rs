// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing activation events.
//!
//! This module provides the central collector that receives events from the
//! activation pass and stores them in a memory-bounded event log.

use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::events::{ActivationEvent, ActivationEventKind};
use super::export::SerializableEvent;
use super::log::{EventLog, LogCapacity};

/// Handle for sending activation events to the collector.
///
/// Cloning is cheap and every clone feeds the same collector, so handles
/// can cross threads freely. Sends go through a bounded channel and never
/// block the pass that produced the event.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<ActivationEvent>,
}

impl DiagnosticsHandle {
    /// Records an activation event.
    ///
    /// Never blocks. A full channel drops the event.
    pub fn record(&self, kind: ActivationEventKind) {
        let event = ActivationEvent::new(kind);
        let _ = self.event_tx.try_send(event);
    }

    /// Records an event, reporting whether it was accepted.
    ///
    /// Unlike [`record`](Self::record), a dropped event is visible to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` when the channel is out of room, or
    /// `TrySendError::Disconnected` when the collector is gone.
    pub fn try_record(
        &self,
        kind: ActivationEventKind,
    ) -> Result<(), TrySendError<ActivationEvent>> {
        self.event_tx.try_send(ActivationEvent::new(kind))
    }
}

/// Collects activation events and retains them in a bounded log.
///
/// Events arrive over the handle channel; [`process_pending`] moves them
/// into the [`EventLog`], which evicts its oldest entries once capacity
/// is reached.
///
/// [`process_pending`]: DiagnosticsCollector::process_pending
pub struct DiagnosticsCollector {
    /// Bounded log of collected events.
    log: EventLog,
    /// Receiving end of the event channel.
    event_rx: Receiver<ActivationEvent>,
    /// Kept to mint handles on demand.
    event_tx: Sender<ActivationEvent>,
    /// When collection started (monotonic clock for relative timestamps).
    collection_started_at: Instant,
    /// When collection started (wall clock for export metadata).
    collection_started_at_utc: DateTime<Utc>,
}

/// Capacity of the event channel between handles and the collector.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

impl DiagnosticsCollector {
    /// Creates a new diagnostics collector with the specified log capacity.
    #[must_use]
    pub fn new(capacity: LogCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            log: EventLog::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Creates a sender handle bound to this collector.
    ///
    /// Clones of the handle can go to any part of the host that produces
    /// events.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains every event waiting in the channel into the log.
    ///
    /// Call this after an activation pass, or periodically in a
    /// long-lived host.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.log.push(event);
        }
    }

    /// Records an event straight into the log, skipping the channel.
    pub fn record(&mut self, kind: ActivationEventKind) {
        self.log.push(ActivationEvent::new(kind));
    }

    /// Returns how many events are stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.log.len()
    }

    /// Returns true if nothing has been collected yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Iterates the stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ActivationEvent> {
        self.log.iter()
    }

    /// Empties the log.
    pub fn clear(&mut self) {
        self.log.clear();
    }

    /// Returns the log capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.log.capacity()
    }

    /// Returns when collection started (wall clock).
    #[must_use]
    pub fn collection_started_at_utc(&self) -> DateTime<Utc> {
        self.collection_started_at_utc
    }

    /// Returns the elapsed time since collection began.
    #[must_use]
    pub fn collection_duration(&self) -> std::time::Duration {
        self.collection_started_at.elapsed()
    }

    /// Returns all stored events in their serializable form, with
    /// timestamps relative to collection start.
    #[must_use]
    pub fn snapshot_events(&self) -> Vec<SerializableEvent> {
        self.log
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(LogCapacity::default())
    }
}

// =============================================================================
// Tests
// =============================================================================
