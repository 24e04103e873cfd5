// Event registration HTTP routes

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use symposia_core::Event;
use utoipa::ToSchema;
use uuid::Uuid;

use super::common::{ApiError, ListResponse, MessageResponse};
use super::events::parse_event_id;
use crate::services::RegistrationService;
use crate::storage::StorageBackend;

/// App state for registration routes
#[derive(Clone)]
pub struct RegistrationsState {
    pub service: Arc<RegistrationService>,
}

impl RegistrationsState {
    pub fn new(db: StorageBackend) -> Self {
        Self {
            service: Arc::new(RegistrationService::new(db)),
        }
    }
}

/// Request to register a user for an event
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub user_id: Uuid,
}

/// Create registration routes
pub fn routes(state: RegistrationsState) -> Router {
    Router::new()
        .route("/v1/events/{event_id}/register", post(register))
        .route("/v1/users/{user_id}/events", get(list_user_events))
        .with_state(state)
}

/// POST /v1/events/{event_id}/register - Register a user for an event
///
/// Idempotent: registering twice succeeds without duplicating the entry.
#[utoipa::path(
    post,
    path = "/v1/events/{event_id}/register",
    params(
        ("event_id" = String, Path, description = "Event ID (UUID)")
    ),
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Registered successfully", body = MessageResponse),
        (status = 400, description = "Invalid event ID"),
        (status = 404, description = "Event not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "registrations"
)]
pub async fn register(
    State(state): State<RegistrationsState>,
    Path(event_id): Path<String>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let event_id = parse_event_id(&event_id)?;

    let found = state
        .service
        .register(event_id, req.user_id)
        .await
        .map_err(ApiError::store_unavailable)?;

    if !found {
        return Err(ApiError::not_found("Event not found"));
    }

    Ok(Json(MessageResponse::new(
        "Successfully registered for event",
    )))
}

/// GET /v1/users/{user_id}/events - List events a user is registered for
#[utoipa::path(
    get,
    path = "/v1/users/{user_id}/events",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Events the user is registered for", body = ListResponse<Event>),
        (status = 500, description = "Internal server error")
    ),
    tag = "registrations"
)]
pub async fn list_user_events(
    State(state): State<RegistrationsState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ListResponse<Event>>, ApiError> {
    let events = state
        .service
        .events_for_user(user_id)
        .await
        .map_err(ApiError::store_unavailable)?;

    Ok(Json(ListResponse::new(events)))
}
