// Event domain type
//
// The academic event entity as exposed over the API.
// Used by both the HTTP layer and the storage layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// An academic event (lecture, workshop, seminar, ...)
///
/// Field names follow the original wire format, hence camelCase on the wire.
/// `kind` is serialized as `type`, which is reserved in Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Category label; casing varies across stored records, matching is
    /// case-insensitive at read time.
    pub category: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub registered_users: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Whether the given user is registered for this event
    pub fn is_registered(&self, user_id: Uuid) -> bool {
        self.registered_users.contains(&user_id)
    }
}
