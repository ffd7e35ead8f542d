// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! markup parser and cross-thread channels.
//!
//! # Available Adapters
//!
//! - [`markup`]: Toast discovery by scanning markup (implements [`ElementProvider`])
//! - [`channel`]: Widget toolkit over a bounded channel (implements
//!   [`ToolkitLookup`] and [`ToastConstructor`])
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - Hosts with their own DOM or toolkit write their own adapters against
//!   the same ports
//!
//! [`ElementProvider`]: crate::application::port::ElementProvider
//! [`ToolkitLookup`]: crate::application::port::ToolkitLookup
//! [`ToastConstructor`]: crate::application::port::ToastConstructor

pub mod channel;
pub mod markup;

// Re-export main types for convenience
pub use channel::{ChannelToolkit, ShowRequest};
pub use markup::MarkupProvider;
