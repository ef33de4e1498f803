use std::sync::Arc;

use crate::domain::Registry;

/// Shared application state injected into all handlers.
///
/// Requests share nothing else: all coordination happens through the
/// registry's backing store.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn Registry>,
    /// The service's own canonical domain, used to reject self-referential
    /// destinations.
    pub service_domain: String,
}
