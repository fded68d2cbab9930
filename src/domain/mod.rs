//! Domain layer containing business entities and contracts.
//!
//! Defines the data model and the interfaces the application layer depends on,
//! independent of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`resolver`] - Hostname resolution trait
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
pub mod resolver;

pub use resolver::HostResolver;

#[cfg(test)]
pub use resolver::MockHostResolver;
