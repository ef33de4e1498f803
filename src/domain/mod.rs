//! Domain layer containing the core entities and the registry contract.
//!
//! - [`link`] - The persisted short-link record and its creation input
//! - [`registry`] - The data access trait implemented by the infrastructure layer
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. The lifecycle of a single token is `Unregistered → Registered`,
//! terminal: no edit, no delete, no expiry.

pub mod link;
pub mod registry;

pub use link::{LinkRecord, NewLink};
pub use registry::{Registry, RegistryError};

#[cfg(test)]
pub use registry::MockRegistry;
