// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`activation`]: Activation policy types ([`FailurePolicy`](activation::FailurePolicy),
//!   [`ActivationSettings`](activation::ActivationSettings))
//! - [`diagnostics`]: Diagnostics types ([`LogCapacity`](diagnostics::LogCapacity))
//! - [`toast`]: Toast value objects ([`ToastElement`](toast::ToastElement),
//!   [`AutoHideDelay`](toast::AutoHideDelay), [`MarkerClass`](toast::MarkerClass))

pub mod activation;
pub mod diagnostics;
pub mod toast;
