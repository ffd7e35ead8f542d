// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`elements`]: Discovery of toast candidates in a document
//! - [`widget`]: Toolkit lookup, toast construction, and showing
//!
//! # Design Notes
//!
//! - All traits use domain types only (no parser events, no channel types)
//! - Traits are `Send + Sync` where appropriate for thread-safe usage
//! - Methods return `Result` with port error types
//! - Activation is a single synchronous pass - no `async fn` anywhere
//!
//! # Example
//!
//! ```ignore
//! use toast_usher::application::port::elements::ElementProvider;
//!
//! fn count_candidates(provider: &dyn ElementProvider) -> usize {
//!     provider.elements().map(|elements| elements.len()).unwrap_or(0)
//! }
//! ```

pub mod elements;
pub mod widget;

// Re-export main types for convenience
pub use elements::{ElementProvider, ProviderError};
pub use widget::{
    NoToolkit, ToastConstructor, ToastHandle, ToastOptions, ToolkitLookup, ToolkitProbe,
    WidgetError,
};
