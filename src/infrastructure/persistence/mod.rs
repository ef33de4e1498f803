//! Registry implementations.
//!
//! - [`PgRegistry`] - PostgreSQL, the production store. Token uniqueness is
//!   enforced by a unique index so the store stays the final arbiter under
//!   concurrent registration.
//! - [`MemoryRegistry`] - mutex-guarded in-process map for development,
//!   demos, and tests.

pub mod memory_registry;
pub mod pg_registry;

pub use memory_registry::MemoryRegistry;
pub use pg_registry::PgRegistry;
