// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`activator`]: The once-per-page-load activation pass
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`report`]: The host-facing record of one activation pass
//!
//! # Architecture
//!
//! The application layer sits between the domain layer (pure business logic)
//! and the infrastructure layer. It defines:
//!
//! - **Ports (Traits)**: Abstract interfaces that infrastructure implements
//! - **Activator**: Orchestrates discovery, toolkit probing, and showing
//! - **Reports**: Serializable results of a pass
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Hosts drive the activator and consume its reports
//!
//! # Example
//!
//! ```ignore
//! use toast_usher::application::activator::Activator;
//! use toast_usher::application::port::elements::ElementProvider;
//!
//! // Infrastructure implements the port traits
//! struct DomSnapshotProvider { /* ... */ }
//! impl ElementProvider for DomSnapshotProvider { /* ... */ }
//!
//! // The host signals readiness once
//! let mut activator = Activator::default();
//! ```

pub mod activator;
pub mod port;
pub mod report;
