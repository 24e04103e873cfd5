// Event listing and detail HTTP routes

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use symposia_core::{Event, EventPage, PageRequest};
use utoipa::ToSchema;
use uuid::Uuid;

use super::common::ApiError;
use crate::services::EventService;
use crate::storage::StorageBackend;

/// App state for event routes
#[derive(Clone)]
pub struct EventsState {
    pub service: Arc<EventService>,
    pub default_page_size: i64,
}

impl EventsState {
    pub fn new(db: StorageBackend, default_page_size: i64) -> Self {
        Self {
            service: Arc::new(EventService::new(db)),
            default_page_size,
        }
    }
}

/// Query parameters for listing events
///
/// Values arrive as raw text and normalize leniently: a malformed page or
/// limit falls back to its default instead of rejecting the request.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ListEventsQuery {
    /// 1-based page number; anything unusable becomes 1
    #[serde(default)]
    pub page: Option<String>,
    /// Page size; anything unusable becomes the configured default
    #[serde(default)]
    pub limit: Option<String>,
    /// Category filter; "all" or absence means no filter
    #[serde(default)]
    pub category: Option<String>,
}

/// Create event routes
pub fn routes(state: EventsState) -> Router {
    Router::new()
        .route("/v1/events", get(list_events))
        .route("/v1/events/{event_id}", get(get_event))
        .with_state(state)
}

/// GET /v1/events - List events with paging and category filtering
#[utoipa::path(
    get,
    path = "/v1/events",
    params(
        ("page" = Option<String>, Query, description = "1-based page number, default 1"),
        ("limit" = Option<String>, Query, description = "Page size, default 6"),
        ("category" = Option<String>, Query, description = "Category filter, \"all\" for no filter")
    ),
    responses(
        (status = 200, description = "One page of events", body = EventPage),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<EventsState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Json<EventPage>, ApiError> {
    let request = PageRequest::from_raw(
        query.page.as_deref(),
        query.limit.as_deref(),
        query.category.as_deref(),
        state.default_page_size,
    );

    let page = state
        .service
        .list(&request)
        .await
        .map_err(ApiError::store_unavailable)?;

    Ok(Json(page))
}

/// GET /v1/events/{event_id} - Get event by ID
///
/// Identifiers are canonical UUIDs; anything else is rejected as invalid
/// input rather than matched against raw stored values.
#[utoipa::path(
    get,
    path = "/v1/events/{event_id}",
    params(
        ("event_id" = String, Path, description = "Event ID (UUID)")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 400, description = "Invalid event ID"),
        (status = 404, description = "Event not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<EventsState>,
    Path(event_id): Path<String>,
) -> Result<Json<Event>, ApiError> {
    let event_id = parse_event_id(&event_id)?;

    let event = state
        .service
        .get(event_id)
        .await
        .map_err(ApiError::store_unavailable)?
        .ok_or_else(|| ApiError::not_found("Event not found"))?;

    Ok(Json(event))
}

pub(crate) fn parse_event_id(raw: &str) -> Result<Uuid, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_input("Invalid event ID"))
}
