// Category listing HTTP routes

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use super::common::{ApiError, ListResponse};
use crate::services::CategoryService;
use crate::storage::StorageBackend;

/// App state for category routes
#[derive(Clone)]
pub struct CategoriesState {
    pub service: Arc<CategoryService>,
}

impl CategoriesState {
    pub fn new(db: StorageBackend) -> Self {
        Self {
            service: Arc::new(CategoryService::new(db)),
        }
    }
}

/// Create category routes
pub fn routes(state: CategoriesState) -> Router {
    Router::new()
        .route("/v1/categories", get(list_categories))
        .with_state(state)
}

/// GET /v1/categories - List distinct event categories
///
/// Values are reported as stored; casing is not normalized.
#[utoipa::path(
    get,
    path = "/v1/categories",
    responses(
        (status = 200, description = "Distinct category values", body = ListResponse<String>),
        (status = 500, description = "Internal server error")
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(state): State<CategoriesState>,
) -> Result<Json<ListResponse<String>>, ApiError> {
    let categories = state
        .service
        .list()
        .await
        .map_err(ApiError::store_unavailable)?;

    Ok(Json(ListResponse::new(categories)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::CreateEventRow;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn lists_distinct_raw_categories() {
        let db = StorageBackend::in_memory();
        for category in ["Workshop", "workshop", "Lecture", "Lecture"] {
            db.create_event(CreateEventRow {
                title: format!("{category} session"),
                description: None,
                location: None,
                image_url: None,
                kind: None,
                category: category.to_string(),
                date: Utc::now(),
            })
            .await
            .unwrap();
        }

        let app = routes(CategoriesState::new(db));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/categories")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["data"],
            serde_json::json!(["Lecture", "Workshop", "workshop"])
        );
    }
}
