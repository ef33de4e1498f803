//! HTTP server initialization and runtime setup.
//!
//! Builds the selected registry backend, applies migrations, and runs the
//! Axum server.

use crate::config::{Config, StoreBackend};
use crate::domain::Registry;
use crate::infrastructure::persistence::{MemoryRegistry, PgRegistry};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// For the postgres backend this connects the pool (bounded by the connect
/// timeout), applies migrations, and wires a [`PgRegistry`] with the
/// per-operation timeout. The memory backend skips all of that and serves
/// from an in-process map.
///
/// # Errors
///
/// Returns an error if the store connection, migration run, or server bind
/// fails.
pub async fn run(config: Config) -> Result<()> {
    let registry: Arc<dyn Registry> = match config.store_backend {
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("postgres backend requires a database URL")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.store_connect_timeout))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;

            Arc::new(PgRegistry::new(
                Arc::new(pool),
                Duration::from_secs(config.store_op_timeout),
            ))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory registry; records will not survive a restart");
            Arc::new(MemoryRegistry::new())
        }
    };

    let state = AppState {
        registry,
        service_domain: config.service_domain.clone(),
    };

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
