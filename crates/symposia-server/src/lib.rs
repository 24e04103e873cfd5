// Symposia server library
// Decision: Shared library so the binary and router-level tests use one assembly path

// API routes and types (shared for OpenAPI generation)
pub mod api;

// Configuration
pub mod config;

// Services layer
pub mod services;
pub use services::{CategoryService, EventService, RegistrationService};

// Storage layer
pub mod storage;

// OpenAPI spec generation
pub mod openapi;

use axum::Router;

use config::ServerConfig;
use storage::StorageBackend;

/// Assemble the API routes for the given backend and config
pub fn api_routes(db: StorageBackend, config: &ServerConfig) -> Router {
    let events_state = api::events::EventsState::new(db.clone(), config.default_page_size);
    let registrations_state = api::registrations::RegistrationsState::new(db.clone());
    let categories_state = api::categories::CategoriesState::new(db);

    Router::new()
        .merge(api::events::routes(events_state))
        .merge(api::registrations::routes(registrations_state))
        .merge(api::categories::routes(categories_state))
}
