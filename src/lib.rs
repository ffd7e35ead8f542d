// SPDX-License-Identifier: MPL-2.0
//! `toast_usher` activates toast widgets discovered in a markup document.
//!
//! When a host signals that its document is ready, the usher finds every
//! element marked as a toast, asks the host's widget toolkit to construct a
//! toast for each one, and shows them in document order with a fixed
//! auto-hide delay. Hosts without a usable toolkit get a silent no-op, and a
//! report records what happened to every element either way.

#![doc(html_root_url = "https://docs.rs/toast_usher/0.3.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;
