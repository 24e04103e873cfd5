// Storage backend abstraction
// Decision: Use enum dispatch for simplicity over trait objects
//
// This module provides a unified StorageBackend enum that can work with
// either PostgreSQL (production) or in-memory (dev mode) storage.

use anyhow::Result;
use uuid::Uuid;

use super::memory::InMemoryDatabase;
use super::models::*;
use super::repositories::Database;

/// Storage backend that can be either PostgreSQL or in-memory
#[derive(Clone)]
pub enum StorageBackend {
    /// PostgreSQL database (production)
    Postgres(Database),
    /// In-memory database (dev mode)
    InMemory(std::sync::Arc<InMemoryDatabase>),
}

impl StorageBackend {
    /// Create a PostgreSQL storage backend from a database URL
    pub async fn postgres(database_url: &str) -> Result<Self> {
        let db = Database::from_url(database_url).await?;
        Ok(Self::Postgres(db))
    }

    /// Create an in-memory storage backend
    pub fn in_memory() -> Self {
        Self::InMemory(std::sync::Arc::new(InMemoryDatabase::new()))
    }

    /// Check if this is dev mode (in-memory)
    pub fn is_dev_mode(&self) -> bool {
        matches!(self, Self::InMemory(_))
    }

    pub async fn count_events(&self, filter: &EventFilter) -> Result<i64> {
        match self {
            Self::Postgres(db) => db.count_events(filter).await,
            Self::InMemory(db) => db.count_events(filter).await,
        }
    }

    pub async fn list_events(
        &self,
        filter: &EventFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<EventRow>> {
        match self {
            Self::Postgres(db) => db.list_events(filter, limit, offset).await,
            Self::InMemory(db) => db.list_events(filter, limit, offset).await,
        }
    }

    pub async fn get_event(&self, id: Uuid) -> Result<Option<EventRow>> {
        match self {
            Self::Postgres(db) => db.get_event(id).await,
            Self::InMemory(db) => db.get_event(id).await,
        }
    }

    pub async fn list_categories(&self) -> Result<Vec<String>> {
        match self {
            Self::Postgres(db) => db.list_categories().await,
            Self::InMemory(db) => db.list_categories().await,
        }
    }

    pub async fn list_events_for_user(&self, user_id: Uuid) -> Result<Vec<EventRow>> {
        match self {
            Self::Postgres(db) => db.list_events_for_user(user_id).await,
            Self::InMemory(db) => db.list_events_for_user(user_id).await,
        }
    }

    pub async fn create_event(&self, input: CreateEventRow) -> Result<EventRow> {
        match self {
            Self::Postgres(db) => db.create_event(input).await,
            Self::InMemory(db) => db.create_event(input).await,
        }
    }

    pub async fn register_user(&self, event_id: Uuid, user_id: Uuid) -> Result<bool> {
        match self {
            Self::Postgres(db) => db.register_user(event_id, user_id).await,
            Self::InMemory(db) => db.register_user(event_id, user_id).await,
        }
    }
}
