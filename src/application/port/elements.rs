// SPDX-License-Identifier: MPL-2.0
//! Element discovery port definition.
//!
//! This module defines the [`ElementProvider`] trait for discovering toast
//! candidates in a document. Infrastructure adapters implement this trait to
//! provide concrete discovery logic, such as scanning a markup string.

use crate::domain::toast::ToastElement;
use std::fmt;

// =============================================================================
// ProviderError
// =============================================================================

/// Errors that can occur while discovering toast candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The document could not be parsed.
    Markup(String),

    /// The backing source could not be read at all.
    Source(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Markup(msg) => write!(f, "Malformed markup: {msg}"),
            ProviderError::Source(msg) => write!(f, "Element source unavailable: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

// =============================================================================
// ElementProvider Trait
// =============================================================================

/// Port for discovering toast candidates in a document.
///
/// A provider yields the elements carrying the marker class, in document
/// order, with [`ToastElement::position`](ToastElement::position) set to the
/// zero-based index within the returned sequence. An empty document is not
/// an error; it simply yields an empty batch.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` for use across threads.
///
/// # Example
///
/// ```ignore
/// use toast_usher::application::port::elements::ElementProvider;
///
/// fn describe_all(provider: &dyn ElementProvider) {
///     match provider.elements() {
///         Ok(elements) => {
///             for element in &elements {
///                 println!("{}", element.describe());
///             }
///         }
///         Err(e) => eprintln!("Discovery failed: {e}"),
///     }
/// }
/// ```
pub trait ElementProvider: Send + Sync {
    /// Discovers the toast candidates in the document.
    ///
    /// Returns the matching elements in document order. Zero matches is a
    /// valid result.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] if:
    /// - The document cannot be parsed
    /// - The backing source cannot be read
    fn elements(&self) -> Result<Vec<ToastElement>, ProviderError>;
}
