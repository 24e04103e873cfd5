// OpenAPI spec generation

use symposia_core::{Event, EventPage};
use utoipa::OpenApi;

use crate::api;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        api::events::list_events,
        api::events::get_event,
        api::registrations::register,
        api::registrations::list_user_events,
        api::categories::list_categories,
    ),
    components(
        schemas(
            Event,
            EventPage,
            api::events::ListEventsQuery,
            api::registrations::RegisterRequest,
            api::ErrorResponse,
            api::MessageResponse,
            api::ListResponse<Event>,
            api::ListResponse<String>,
        )
    ),
    tags(
        (name = "events", description = "Event listing and detail endpoints"),
        (name = "registrations", description = "Event registration endpoints"),
        (name = "categories", description = "Category listing endpoints")
    ),
    info(
        title = "Symposia API",
        version = "0.1.0",
        description = "API for browsing and registering for academic events",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_includes_listing_path() {
        let spec = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(spec["paths"].get("/v1/events").is_some());
        assert!(spec["paths"].get("/v1/events/{event_id}").is_some());
        assert!(spec["paths"].get("/v1/categories").is_some());
    }
}
