// SPDX-License-Identifier: MPL-2.0
//! Export functionality for activation diagnostics.
//!
//! This module serializes an activation report together with the captured
//! event trail and writes the result to disk as JSON.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};

use super::events::ActivationEventKind;
use crate::application::report::ActivationReport;

// =============================================================================
// Export Error
// =============================================================================

/// Errors that can occur during diagnostics export.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error during file operations.
    Io(io::Error),
    /// JSON serialization error.
    Serialization(serde_json::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Serialization(err) => write!(f, "serialization error: {err}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

// =============================================================================
// Serializable Event
// =============================================================================

/// An activation event in exportable form.
///
/// Monotonic timestamps cannot be serialized directly, so events are
/// exported with timestamps relative to collection start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SerializableEvent {
    /// Milliseconds since collection started
    pub timestamp_ms: u64,
    /// The event data
    #[serde(flatten)]
    pub kind: ActivationEventKind,
}

impl SerializableEvent {
    /// Creates a serializable event from a captured event.
    ///
    /// # Arguments
    ///
    /// * `event_timestamp` - The event's `Instant` timestamp
    /// * `collection_start` - When collection started (for relative calculation)
    /// * `kind` - The event data
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(
        event_timestamp: Instant,
        collection_start: Instant,
        kind: ActivationEventKind,
    ) -> Self {
        let timestamp_ms = event_timestamp.duration_since(collection_start).as_millis() as u64;

        Self { timestamp_ms, kind }
    }
}

// =============================================================================
// Activation Export
// =============================================================================

/// Complete export payload: the report of the pass plus its event trail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivationExport {
    /// When the export was generated (ISO 8601)
    pub generated_at: String,
    /// Version of `toast_usher` that generated the export
    pub toast_usher_version: String,
    /// The activation report
    pub report: ActivationReport,
    /// Captured events with relative timestamps
    pub events: Vec<SerializableEvent>,
}

impl ActivationExport {
    /// Creates a new export payload.
    #[must_use]
    pub fn new(report: ActivationReport, events: Vec<SerializableEvent>) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            toast_usher_version: env!("CARGO_PKG_VERSION").to_string(),
            report,
            events,
        }
    }

    /// Serializes the export as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// =============================================================================
// File Export
// =============================================================================

/// Generates a default filename for activation exports.
///
/// Format: `toast_usher_activation_YYYYMMDD_HHMMSS.json`, timestamped in
/// local time.
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!("toast_usher_activation_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Returns the default directory for saving activation exports.
///
/// The user's Documents folder when one exists, the current directory
/// otherwise.
#[must_use]
pub fn default_export_directory() -> PathBuf {
    dirs::document_dir().unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
}

/// Writes content to a file through a temporary sibling and a rename.
///
/// The content only reaches `path` via the final rename, so an
/// interrupted write never leaves a torn export behind.
///
/// # Errors
///
/// Returns an error if writing or renaming fails.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        // Leave no temp file behind
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

/// Serializes an export payload and writes it atomically to the given path.
///
/// # Errors
///
/// Returns an error if serialization or any file operation fails.
pub fn export_to_path(path: &Path, export: &ActivationExport) -> Result<(), ExportError> {
    let json = export.to_json()?;
    write_atomic(path, &json)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
