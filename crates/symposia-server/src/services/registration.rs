// Registration service for business logic
//
// Registration is an idempotent set-add on the event's registered users,
// matching the original store semantics. "Already registered" is success;
// only a missing event is reported as not found.

use anyhow::Result;
use symposia_core::Event;
use uuid::Uuid;

use crate::storage::StorageBackend;

pub struct RegistrationService {
    db: StorageBackend,
}

impl RegistrationService {
    pub fn new(db: StorageBackend) -> Self {
        Self { db }
    }

    /// Register a user for an event. Returns false when the event is missing.
    pub async fn register(&self, event_id: Uuid, user_id: Uuid) -> Result<bool> {
        self.db.register_user(event_id, user_id).await
    }

    /// Events the user is registered for
    pub async fn events_for_user(&self, user_id: Uuid) -> Result<Vec<Event>> {
        let rows = self.db.list_events_for_user(user_id).await?;
        Ok(rows.into_iter().map(Event::from).collect())
    }
}
