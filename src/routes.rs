//! Router configuration.
//!
//! # Route Structure
//!
//! - `GET  /go/{token}`  - Short link redirect
//! - `GET  /health`      - Health check (store ping)
//! - `POST /api/links`   - Short link registration
//!
//! Trailing-slash normalization is applied around the router at serve time,
//! see [`crate::server::run`].

use crate::api::handlers::{health_handler, redirect_handler, register_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let api_router = Router::new().route("/links", post(register_handler));

    Router::new()
        .route("/go/{token}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer())
}
