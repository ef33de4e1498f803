#![allow(dead_code)]

use std::sync::Arc;

use atomlink::infrastructure::persistence::MemoryRegistry;
use atomlink::routes::app_router;
use atomlink::state::AppState;
use axum_test::TestServer;

pub const SERVICE_DOMAIN: &str = "atomurl.ga";

pub fn create_test_state() -> AppState {
    AppState {
        registry: Arc::new(MemoryRegistry::new()),
        service_domain: SERVICE_DOMAIN.to_string(),
    }
}

/// Full application router on the in-memory backend.
pub fn create_test_server() -> TestServer {
    TestServer::new(app_router(create_test_state())).unwrap()
}
