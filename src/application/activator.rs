// SPDX-License-Identifier: MPL-2.0
//! The activation pass.
//!
//! [`Activator`] owns the once-per-page-load semantics: the host signals
//! document readiness, the activator discovers toast candidates through an
//! [`ElementProvider`], probes for a toolkit through a [`ToolkitLookup`],
//! and shows one toast per candidate in document order. The result of the
//! pass is an [`ActivationReport`].
//!
//! Two degradation rules shape the control flow:
//!
//! - A missing or malformed toolkit is not an error. The pass records the
//!   outcome and leaves the page untouched.
//! - Under the default failure policy, one failing element is isolated:
//!   its failure is recorded and the remaining elements still activate.

use std::time::Instant;

use crate::application::port::elements::ElementProvider;
use crate::application::port::widget::{
    ToastConstructor, ToastOptions, ToolkitLookup, ToolkitProbe, WidgetError,
};
use crate::application::report::{ActivationOutcome, ActivationReport, ElementRecord};
use crate::diagnostics::{ActivationEventKind, DiagnosticsHandle};
use crate::domain::activation::{ActivationSettings, FailurePolicy};
use crate::domain::toast::ToastElement;
use crate::error::{Error, Result};

// =============================================================================
// Lifecycle
// =============================================================================

/// Where the activator is in its once-per-page-load lifecycle.
enum Lifecycle {
    /// The ready signal has not fired yet.
    AwaitingReady,
    /// The ready signal fired and the pass ran to its conclusion.
    Done(Result<ActivationReport>),
}

// =============================================================================
// Activator
// =============================================================================

/// Runs the toast activation pass exactly once per page load.
///
/// The first [`document_ready`](Activator::document_ready) call consumes the
/// activation; later calls do not re-run the pass, they return the stored
/// result. This holds even when the first pass failed: a page load gets one
/// attempt, not retries.
pub struct Activator {
    settings: ActivationSettings,
    diagnostics: Option<DiagnosticsHandle>,
    lifecycle: Lifecycle,
}

impl Activator {
    /// Creates an activator with the given settings.
    #[must_use]
    pub fn new(settings: ActivationSettings) -> Self {
        Self {
            settings,
            diagnostics: None,
            lifecycle: Lifecycle::AwaitingReady,
        }
    }

    /// Sets the diagnostics handle for event recording.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Returns the settings this activator runs with.
    #[must_use]
    pub fn settings(&self) -> ActivationSettings {
        self.settings
    }

    /// Returns true once the ready signal has been consumed.
    #[must_use]
    pub fn has_activated(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Done(_))
    }

    /// Returns the report of the pass, if it ran and succeeded.
    #[must_use]
    pub fn report(&self) -> Option<&ActivationReport> {
        match &self.lifecycle {
            Lifecycle::Done(Ok(report)) => Some(report),
            _ => None,
        }
    }

    /// Signals that the document is ready for activation.
    ///
    /// The first call runs the pass; every later call is ignored apart from
    /// a diagnostic event and returns the stored result unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider could not discover elements. Widget
    /// failures are not errors at this level; they land in the report
    /// according to the failure policy.
    pub fn document_ready(
        &mut self,
        provider: &dyn ElementProvider,
        toolkit: &dyn ToolkitLookup,
    ) -> Result<&ActivationReport> {
        if let Lifecycle::AwaitingReady = self.lifecycle {
            let outcome = self.run(provider, toolkit);
            self.lifecycle = Lifecycle::Done(outcome);
        } else {
            self.record(ActivationEventKind::ReadySignalIgnored);
        }

        match &self.lifecycle {
            Lifecycle::Done(Ok(report)) => Ok(report),
            Lifecycle::Done(Err(err)) => Err(err.clone()),
            // The branch above always replaces AwaitingReady with Done.
            Lifecycle::AwaitingReady => unreachable!("ready signal latches before returning"),
        }
    }

    /// Runs one activation pass.
    fn run(
        &self,
        provider: &dyn ElementProvider,
        toolkit: &dyn ToolkitLookup,
    ) -> Result<ActivationReport> {
        let started = Instant::now();
        let elements = provider.elements().map_err(Error::Provider)?;
        self.record(ActivationEventKind::ActivationStarted {
            discovered: elements.len(),
        });

        let mut records = Vec::with_capacity(elements.len());
        let outcome = match toolkit.probe() {
            ToolkitProbe::Missing => {
                self.record(ActivationEventKind::ToolkitMissing);
                ActivationOutcome::ToolkitMissing
            }
            ToolkitProbe::Malformed { found } => {
                self.record(ActivationEventKind::ToolkitMalformed {
                    found: found.clone(),
                });
                ActivationOutcome::ToolkitMalformed
            }
            ToolkitProbe::Available(constructor) => {
                self.show_all(constructor, &elements, &mut records)
            }
        };

        let report = ActivationReport::new(outcome, elements.len(), records, started.elapsed());
        self.record(ActivationEventKind::ActivationFinished {
            shown: report.shown_count(),
            failed: report.failed_count(),
        });

        Ok(report)
    }

    /// Shows one toast per element, in document order.
    fn show_all(
        &self,
        constructor: &dyn ToastConstructor,
        elements: &[ToastElement],
        records: &mut Vec<ElementRecord>,
    ) -> ActivationOutcome {
        let options = ToastOptions::new(self.settings.auto_hide_delay());

        for (index, element) in elements.iter().enumerate() {
            match Self::show_one(constructor, element, options) {
                Ok(()) => {
                    self.record(ActivationEventKind::WidgetShown {
                        position: element.position(),
                        element: element.describe(),
                    });
                    records.push(ElementRecord::shown(element.position(), element.describe()));
                }
                Err(err) => {
                    self.record(ActivationEventKind::ElementFailed {
                        position: element.position(),
                        element: element.describe(),
                        reason: err.to_string(),
                    });
                    records.push(ElementRecord::failed(
                        element.position(),
                        element.describe(),
                        err.to_string(),
                    ));

                    if self.settings.failure_policy() == FailurePolicy::AbortOnFirst {
                        for rest in &elements[index + 1..] {
                            records.push(ElementRecord::not_reached(
                                rest.position(),
                                rest.describe(),
                            ));
                        }
                        return ActivationOutcome::Aborted;
                    }
                }
            }
        }

        ActivationOutcome::Completed
    }

    /// Constructs and shows one toast.
    ///
    /// The handle is dropped immediately after showing; auto-hide after the
    /// configured delay is the toolkit's job.
    fn show_one(
        constructor: &dyn ToastConstructor,
        element: &ToastElement,
        options: ToastOptions,
    ) -> std::result::Result<(), WidgetError> {
        let mut toast = constructor.construct(element, options)?;
        toast.show()
    }

    fn record(&self, kind: ActivationEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.record(kind);
        }
    }
}

impl Default for Activator {
    fn default() -> Self {
        Self::new(ActivationSettings::default())
    }
}

// =============================================================================
// Tests
// =============================================================================
