// SPDX-License-Identifier: MPL-2.0
//! Channel-backed widget toolkit.
//!
//! This adapter implements the widget ports over a bounded
//! [`crossbeam_channel`]: showing a toast sends a [`ShowRequest`] to
//! whatever rendering loop holds the receiver. It is the standard way to
//! hand activation output to a UI thread without sharing state with it.
//!
//! Unlike diagnostics recording, show requests are never silently dropped.
//! A full queue or a vanished consumer is a per-element
//! [`WidgetError`], which the activation pass records according to its
//! failure policy.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use crate::application::port::widget::{
    ToastConstructor, ToastHandle, ToastOptions, ToolkitLookup, ToolkitProbe, WidgetError,
};
use crate::domain::toast::{AutoHideDelay, ToastElement};

// =============================================================================
// ShowRequest
// =============================================================================

/// One toast the rendering side should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowRequest {
    element: ToastElement,
    delay: AutoHideDelay,
}

impl ShowRequest {
    /// Creates a new show request.
    #[must_use]
    pub fn new(element: ToastElement, delay: AutoHideDelay) -> Self {
        Self { element, delay }
    }

    /// Returns the element to display.
    #[must_use]
    pub fn element(&self) -> &ToastElement {
        &self.element
    }

    /// Returns the auto-hide delay for this toast.
    #[must_use]
    pub fn delay(&self) -> AutoHideDelay {
        self.delay
    }
}

// =============================================================================
// ChannelToolkit
// =============================================================================

/// Widget toolkit that forwards shown toasts over a bounded channel.
///
/// # Example
///
/// ```
/// use toast_usher::infrastructure::channel::ChannelToolkit;
/// use toast_usher::application::port::widget::ToolkitLookup;
///
/// let (toolkit, requests) = ChannelToolkit::new(8);
/// let probe = toolkit.probe();
/// assert!(probe.is_available());
/// # drop(requests);
/// ```
#[derive(Debug, Clone)]
pub struct ChannelToolkit {
    show_tx: Sender<ShowRequest>,
}

impl ChannelToolkit {
    /// Creates a toolkit and the receiver for its show requests.
    ///
    /// `capacity` bounds the number of undelivered requests; it is raised
    /// to 1 if zero is given, since a rendezvous channel would make every
    /// `show` fail without a concurrently blocked receiver.
    #[must_use]
    pub fn new(capacity: usize) -> (Self, Receiver<ShowRequest>) {
        let (show_tx, show_rx) = bounded(capacity.max(1));
        (Self { show_tx }, show_rx)
    }
}

impl ToolkitLookup for ChannelToolkit {
    fn probe(&self) -> ToolkitProbe<'_> {
        ToolkitProbe::Available(self)
    }
}

impl ToastConstructor for ChannelToolkit {
    fn construct(
        &self,
        element: &ToastElement,
        options: ToastOptions,
    ) -> Result<Box<dyn ToastHandle>, WidgetError> {
        Ok(Box::new(ChannelToast {
            request: Some(ShowRequest::new(
                element.clone(),
                options.auto_hide_delay(),
            )),
            show_tx: self.show_tx.clone(),
        }))
    }
}

// =============================================================================
// ChannelToast
// =============================================================================

/// A constructed toast whose `show` enqueues a request for the renderer.
struct ChannelToast {
    request: Option<ShowRequest>,
    show_tx: Sender<ShowRequest>,
}

impl ToastHandle for ChannelToast {
    fn show(&mut self) -> Result<(), WidgetError> {
        let request = match self.request.take() {
            Some(request) => request,
            None => return Err(WidgetError::Show("toast was already shown".to_string())),
        };

        self.show_tx.try_send(request).map_err(|err| match err {
            TrySendError::Full(_) => WidgetError::Show("show queue is full".to_string()),
            TrySendError::Disconnected(_) => WidgetError::BackendClosed,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
