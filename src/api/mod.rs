//! HTTP API layer.
//!
//! Translates requests into validator and registry calls and maps the
//! structured errors back into transport responses.
//!
//! - [`dto`] - request/response serialization types
//! - [`handlers`] - request handlers
//! - [`middleware`] - request logging

pub mod dto;
pub mod handlers;
pub mod middleware;
