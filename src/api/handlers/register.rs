//! Handler for the link registration endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::link::{LinkResponse, RegisterRequest};
use crate::domain::NewLink;
use crate::error::AppError;
use crate::state::AppState;
use crate::validate::validate_registration;

/// Registers a new short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "short_token": "my-link",
///   "destination": "https://docs.example.com/guide"
/// }
/// ```
///
/// # Responses
///
/// - **201 Created** with the stored record, including the assigned id and
///   creation timestamp (seconds since epoch)
/// - **400 Bad Request** for any validation rejection; `error.details.reason`
///   carries the specific tag
/// - **409 Conflict** when the token is already registered
/// - **503 Service Unavailable** when the store cannot be reached
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let (short_token, destination) = validate_registration(
        &payload.short_token,
        &payload.destination,
        &state.service_domain,
    )?;

    let record = state
        .registry
        .register(NewLink {
            short_token,
            destination,
        })
        .await?;

    tracing::info!(token = %record.short_token, "registered short link");

    Ok((StatusCode::CREATED, Json(record.into())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LinkRecord, MockRegistry, RegistryError};
    use chrono::Utc;
    use std::sync::Arc;

    fn state_with(registry: MockRegistry) -> AppState {
        AppState {
            registry: Arc::new(registry),
            service_domain: "atomurl.ga".to_string(),
        }
    }

    fn request(token: &str, destination: &str) -> Json<RegisterRequest> {
        Json(RegisterRequest {
            short_token: token.to_string(),
            destination: destination.to_string(),
        })
    }

    #[tokio::test]
    async fn test_valid_input_reaches_registry_normalized() {
        let mut registry = MockRegistry::new();
        registry
            .expect_register()
            .withf(|link| {
                link.short_token == "my-link" && link.destination == "https://docs.example.com/guide"
            })
            .times(1)
            .returning(|link| {
                Ok(LinkRecord::new(
                    7,
                    link.short_token,
                    link.destination,
                    Utc::now(),
                ))
            });

        let result = register_handler(
            State(state_with(registry)),
            request(" My-Link ", "https://docs.example.com/guide"),
        )
        .await;

        let (status, Json(body)) = result.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.id, 7);
        assert_eq!(body.short_token, "my-link");
    }

    #[tokio::test]
    async fn test_invalid_input_never_touches_the_registry() {
        let mut registry = MockRegistry::new();
        registry.expect_register().times(0);

        let result = register_handler(
            State(state_with(registry)),
            request("My_Link", "https://x.com"),
        )
        .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_taken_token_maps_to_conflict() {
        let mut registry = MockRegistry::new();
        registry
            .expect_register()
            .times(1)
            .returning(|_| Err(RegistryError::TokenTaken));

        let result = register_handler(
            State(state_with(registry)),
            request("a-b", "http://other.org/y"),
        )
        .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_store_failure_maps_to_unavailable() {
        let mut registry = MockRegistry::new();
        registry
            .expect_register()
            .times(1)
            .returning(|_| Err(RegistryError::StoreUnavailable("timed out".to_string())));

        let result = register_handler(
            State(state_with(registry)),
            request("a-b", "http://example.org/x"),
        )
        .await;

        assert!(matches!(result.unwrap_err(), AppError::Unavailable { .. }));
    }
}
