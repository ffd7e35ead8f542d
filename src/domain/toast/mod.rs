// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! This module contains toast-related value objects that are independent
//! of any markup source or widget toolkit.

pub mod element;
pub mod newtypes;

// Re-export commonly used types
pub use element::ToastElement;
pub use newtypes::{delay_bounds, AutoHideDelay, MarkerClass};
