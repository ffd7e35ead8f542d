// SPDX-License-Identifier: MPL-2.0
//! Widget toolkit port definitions.
//!
//! This module defines the traits through which the activation pass talks to
//! a toast-capable widget toolkit:
//!
//! - [`ToolkitLookup`]: Answers whether a usable toolkit is present at all
//! - [`ToastConstructor`]: Builds one toast widget for one element
//! - [`ToastHandle`]: The constructed widget, ready to be shown
//!
//! The lookup is deliberately separate from construction. A host may have no
//! toolkit wired in, or something broken sitting where the toolkit should be;
//! both cases must degrade to a silent no-op instead of an error, and the
//! [`ToolkitProbe`] result makes that decision explicit.

use crate::domain::toast::{AutoHideDelay, ToastElement};
use std::fmt;

// =============================================================================
// ToastOptions
// =============================================================================

/// Options passed to the toolkit when constructing a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastOptions {
    auto_hide_delay: AutoHideDelay,
}

impl ToastOptions {
    /// Creates options with the given auto-hide delay.
    #[must_use]
    pub fn new(auto_hide_delay: AutoHideDelay) -> Self {
        Self { auto_hide_delay }
    }

    /// Returns the auto-hide delay.
    #[must_use]
    pub fn auto_hide_delay(self) -> AutoHideDelay {
        self.auto_hide_delay
    }
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            auto_hide_delay: AutoHideDelay::default(),
        }
    }
}

// =============================================================================
// WidgetError
// =============================================================================

/// Errors that can occur while constructing or showing a toast widget.
///
/// These errors are per-element: under the default failure policy they are
/// recorded against the one element and never abort the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// The toolkit refused to construct a widget for the element.
    Construction(String),

    /// The widget was constructed but could not be shown.
    Show(String),

    /// The toolkit backend has gone away (e.g. its consumer was dropped).
    BackendClosed,
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetError::Construction(msg) => write!(f, "Widget construction failed: {msg}"),
            WidgetError::Show(msg) => write!(f, "Widget could not be shown: {msg}"),
            WidgetError::BackendClosed => write!(f, "Widget backend is closed"),
        }
    }
}

impl std::error::Error for WidgetError {}

// =============================================================================
// ToastHandle Trait
// =============================================================================

/// A constructed toast widget, ready to be shown.
///
/// Handles are short-lived: the activation pass constructs one, calls
/// [`show`](ToastHandle::show) once, and drops it. Auto-hide after the
/// configured delay is the toolkit's responsibility, not the handle's.
pub trait ToastHandle {
    /// Shows the toast.
    ///
    /// # Errors
    ///
    /// Returns a [`WidgetError`] if the widget cannot be shown. Calling
    /// `show` a second time on the same handle is an error.
    fn show(&mut self) -> Result<(), WidgetError>;
}

// =============================================================================
// ToastConstructor Trait
// =============================================================================

/// Port for constructing toast widgets.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` for use across threads.
pub trait ToastConstructor: Send + Sync {
    /// Constructs a toast widget for one element.
    ///
    /// # Errors
    ///
    /// Returns a [`WidgetError`] if the toolkit cannot build a widget for
    /// this element.
    fn construct(
        &self,
        element: &ToastElement,
        options: ToastOptions,
    ) -> Result<Box<dyn ToastHandle>, WidgetError>;
}

// =============================================================================
// ToolkitLookup Trait
// =============================================================================

/// Result of probing a host for its toast toolkit.
pub enum ToolkitProbe<'a> {
    /// A usable toolkit is present.
    Available(&'a dyn ToastConstructor),

    /// No toolkit is wired in. Activation becomes a silent no-op.
    Missing,

    /// Something is present where the toolkit should be, but it cannot
    /// construct toasts. Also a silent no-op; `found` names what was there
    /// for diagnostics.
    Malformed {
        /// Short description of what occupied the toolkit slot.
        found: String,
    },
}

impl ToolkitProbe<'_> {
    /// Returns true if a usable toolkit was found.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, ToolkitProbe::Available(_))
    }
}

/// Port for looking up the host's toast toolkit.
///
/// Activation never assumes a toolkit exists. It probes through this trait
/// first and treats [`Missing`](ToolkitProbe::Missing) and
/// [`Malformed`](ToolkitProbe::Malformed) results as a quiet skip, so a page
/// without the capability renders exactly as it would have anyway.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` for use across threads.
pub trait ToolkitLookup: Send + Sync {
    /// Probes for the toolkit.
    fn probe(&self) -> ToolkitProbe<'_>;
}

// =============================================================================
// NoToolkit
// =============================================================================

/// Lookup for hosts that expose no toast toolkit at all.
///
/// Probing always reports [`ToolkitProbe::Missing`], which turns the whole
/// activation pass into the silent no-op a toolkit-less host requires.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToolkit;

impl ToolkitLookup for NoToolkit {
    fn probe(&self) -> ToolkitProbe<'_> {
        ToolkitProbe::Missing
    }
}
