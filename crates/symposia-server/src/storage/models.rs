// Database models (internal, may differ from public DTOs)

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use symposia_core::Event;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub kind: Option<String>,
    pub category: String,
    pub date: DateTime<Utc>,
    pub registered_users: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: row.id,
            title: row.title,
            description: row.description,
            location: row.location,
            image_url: row.image_url,
            kind: row.kind,
            category: row.category,
            date: row.date,
            registered_users: row.registered_users,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEventRow {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub kind: Option<String>,
    pub category: String,
    pub date: DateTime<Utc>,
}

/// Predicate describing which events a read considers
///
/// `category: None` matches every event. A set category matches
/// case-insensitively against the full stored value, never as a substring.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub category: Option<String>,
}

impl EventFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
        }
    }

    /// Whether a stored category value satisfies this filter
    ///
    /// Unicode-aware, matching what LOWER() does on the Postgres side.
    pub fn matches(&self, stored_category: &str) -> bool {
        match &self.category {
            Some(wanted) => stored_category.to_lowercase() == wanted.to_lowercase(),
            None => true,
        }
    }
}
