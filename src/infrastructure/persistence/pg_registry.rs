//! PostgreSQL implementation of the registry.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::domain::{LinkRecord, NewLink, Registry, RegistryError};
use crate::utils::db_error::is_unique_violation_on_short_token;

/// PostgreSQL registry backed by the `links` table.
///
/// Every operation is bounded by `op_timeout`; an elapsed timeout or any
/// other store communication failure surfaces as
/// [`RegistryError::StoreUnavailable`]. Nothing is retried.
pub struct PgRegistry {
    pool: Arc<PgPool>,
    op_timeout: Duration,
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    short_token: String,
    destination: String,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for LinkRecord {
    fn from(row: LinkRow) -> Self {
        LinkRecord::new(row.id, row.short_token, row.destination, row.created_at)
    }
}

impl PgRegistry {
    /// Creates a registry with a connection pool and a per-operation timeout.
    pub fn new(pool: Arc<PgPool>, op_timeout: Duration) -> Self {
        Self { pool, op_timeout }
    }

    /// Runs a store operation under the registry's timeout.
    async fn bounded<T, F>(&self, fut: F) -> Result<Result<T, sqlx::Error>, RegistryError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        timeout(self.op_timeout, fut).await.map_err(|_| {
            tracing::error!("store operation timed out after {:?}", self.op_timeout);
            RegistryError::StoreUnavailable("store operation timed out".to_string())
        })
    }
}

fn store_error(e: sqlx::Error) -> RegistryError {
    tracing::error!("store error: {e}");
    RegistryError::StoreUnavailable(e.to_string())
}

#[async_trait]
impl Registry for PgRegistry {
    async fn register(&self, new_link: NewLink) -> Result<LinkRecord, RegistryError> {
        // Fast-path existence check so the common conflict case avoids a
        // failed insert. Not authoritative: the unique index is.
        let existing = self
            .bounded(
                sqlx::query_scalar::<_, i64>("SELECT id FROM links WHERE short_token = $1")
                    .bind(&new_link.short_token)
                    .fetch_optional(self.pool.as_ref()),
            )
            .await?
            .map_err(store_error)?;

        if existing.is_some() {
            return Err(RegistryError::TokenTaken);
        }

        let inserted = self
            .bounded(
                sqlx::query_as::<_, LinkRow>(
                    r#"
                    INSERT INTO links (short_token, destination)
                    VALUES ($1, $2)
                    RETURNING id, short_token, destination, created_at
                    "#,
                )
                .bind(&new_link.short_token)
                .bind(&new_link.destination)
                .fetch_one(self.pool.as_ref()),
            )
            .await?;

        match inserted {
            Ok(row) => Ok(row.into()),
            // A concurrent registration slipped past the pre-check and the
            // unique index arbitrated. The existing record is untouched.
            Err(e) if is_unique_violation_on_short_token(&e) => Err(RegistryError::TokenTaken),
            Err(e) => Err(store_error(e)),
        }
    }

    async fn resolve(&self, short_token: &str) -> Result<LinkRecord, RegistryError> {
        let row = self
            .bounded(
                sqlx::query_as::<_, LinkRow>(
                    r#"
                    SELECT id, short_token, destination, created_at
                    FROM links
                    WHERE short_token = $1
                    "#,
                )
                .bind(short_token)
                .fetch_optional(self.pool.as_ref()),
            )
            .await?
            .map_err(store_error)?;

        row.map(LinkRecord::from).ok_or(RegistryError::NotFound)
    }

    async fn ping(&self) -> Result<(), RegistryError> {
        self.bounded(
            sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(self.pool.as_ref()),
        )
        .await?
        .map_err(store_error)?;

        Ok(())
    }
}
