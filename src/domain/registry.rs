//! Registry trait for short-link storage and resolution.

use crate::domain::link::{LinkRecord, NewLink};
use async_trait::async_trait;
use thiserror::Error;

/// Failures surfaced by registry operations.
///
/// `StoreUnavailable` covers every store communication failure, including
/// timeouts. It must never be interpreted as "token free" or "token absent";
/// callers map it to a service-unavailable response, not a conflict or 404.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A live record already holds the requested token. No write occurred.
    #[error("short token is already taken")]
    TokenTaken,

    /// No record exists for the looked-up token.
    #[error("short token is not registered")]
    NotFound,

    /// The backing store could not be reached or timed out.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Registry interface owning the token → destination mapping.
///
/// The registry is the sole owner of record creation and the uniqueness
/// check; the backing store is the system of record and the only point of
/// coordination between concurrent requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRegistry`] - PostgreSQL, production
/// - [`crate::infrastructure::persistence::MemoryRegistry`] - in-process map, dev/demo
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Registry: Send + Sync {
    /// Registers a new short link.
    ///
    /// Preconditions: both fields of `new_link` are already validated and
    /// normalized. The token is checked for an existing record first; on a
    /// hit the call fails with [`RegistryError::TokenTaken`] and the existing
    /// record is untouched. Otherwise a new record is created with a fresh
    /// identifier and the current timestamp, persisted, and returned.
    ///
    /// Registration either fully succeeds (visible to subsequent resolves)
    /// or has no effect.
    async fn register(&self, new_link: NewLink) -> Result<LinkRecord, RegistryError>;

    /// Looks up a record by its short token. Pure read, no side effects.
    ///
    /// The token is looked up as given; normalization (lower-casing) is the
    /// caller's responsibility and must match what was done at registration.
    async fn resolve(&self, short_token: &str) -> Result<LinkRecord, RegistryError>;

    /// Probes store reachability. Used by the health endpoint.
    async fn ping(&self) -> Result<(), RegistryError>;
}
