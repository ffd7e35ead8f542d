// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting activation event trails.
//!
//! This module provides infrastructure for capturing events while an
//! activation pass runs, storing them in a memory-bounded event log, and
//! exporting them together with the activation report as JSON.
//!
//! # Architecture
//!
//! - [`EventLog`]: Ring buffer of activation events with configurable capacity
//! - [`ActivationEvent`]: One captured event with a monotonic timestamp
//! - [`DiagnosticsCollector`]: Drains a bounded channel of events into the log
//! - [`DiagnosticsHandle`]: Cheap, cloneable sender handed to the activation pass
//!
//! Recording is always non-blocking: a full channel drops events rather than
//! stalling the pass that produced them.

mod collector;
mod events;
mod export;
mod log;

pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{ActivationEvent, ActivationEventKind};
pub use export::{
    default_export_directory, export_to_path, generate_default_filename, write_atomic,
    ActivationExport, ExportError, SerializableEvent,
};
pub use log::{log_capacity_bounds, EventLog, LogCapacity};
