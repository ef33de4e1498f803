//! Handler for short link resolution.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short token and redirects to its destination.
///
/// # Endpoint
///
/// `GET /go/{token}`
///
/// The token is looked up exactly as it appears in the path; case folding
/// is not re-applied here, matching what registration stored.
///
/// # Responses
///
/// - **302 Found** with `Location` set to the stored destination
/// - **404 Not Found** when no record holds the token
/// - **503 Service Unavailable** when the store cannot be reached
pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let record = state.registry.resolve(&token).await?;

    debug!(token = %token, destination = %record.destination, "resolved short link");

    let location = HeaderValue::from_str(&record.destination).map_err(|_| {
        AppError::internal("Stored destination is not a valid header value", json!({}))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
