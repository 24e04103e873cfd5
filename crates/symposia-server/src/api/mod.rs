// API routes and types (shared for OpenAPI generation)

pub mod categories;
pub mod common;
pub mod events;
pub mod registrations;

pub use common::{ApiError, ErrorResponse, ListResponse, MessageResponse};
