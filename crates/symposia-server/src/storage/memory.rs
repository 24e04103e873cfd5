// In-memory storage implementation for dev mode
// Decision: Use parking_lot for thread-safe access
// Decision: UUIDs generated via uuid v7 (time-ordered)
//
// This implementation provides a PostgreSQL-compatible API backed by an
// in-memory HashMap, allowing the server to run without a database for
// development and tests. Its natural retrieval order is newest-first with
// an id tiebreak, which keeps pages disjoint across calls.

use anyhow::Result;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

use super::models::*;

/// In-memory event store for dev mode
/// All data is stored in memory and lost on restart
#[derive(Default)]
pub struct InMemoryDatabase {
    events: RwLock<HashMap<Uuid, EventRow>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    /// Events matching the filter in this store's natural order
    fn matching(&self, filter: &EventFilter) -> Vec<EventRow> {
        let events = self.events.read();
        let mut result: Vec<_> = events
            .values()
            .filter(|e| filter.matches(&e.category))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        result
    }

    pub async fn count_events(&self, filter: &EventFilter) -> Result<i64> {
        Ok(self.matching(filter).len() as i64)
    }

    pub async fn list_events(
        &self,
        filter: &EventFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<EventRow>> {
        Ok(self
            .matching(filter)
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    pub async fn get_event(&self, id: Uuid) -> Result<Option<EventRow>> {
        Ok(self.events.read().get(&id).cloned())
    }

    pub async fn list_categories(&self) -> Result<Vec<String>> {
        let events = self.events.read();
        let mut categories: Vec<String> = events.values().map(|e| e.category.clone()).collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    pub async fn list_events_for_user(&self, user_id: Uuid) -> Result<Vec<EventRow>> {
        let events = self.events.read();
        let mut result: Vec<_> = events
            .values()
            .filter(|e| e.registered_users.contains(&user_id))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(result)
    }

    pub async fn create_event(&self, input: CreateEventRow) -> Result<EventRow> {
        let row = EventRow {
            id: Uuid::now_v7(),
            title: input.title,
            description: input.description,
            location: input.location,
            image_url: input.image_url,
            kind: input.kind,
            category: input.category,
            date: input.date,
            registered_users: vec![],
            created_at: Self::now(),
        };
        self.events.write().insert(row.id, row.clone());
        Ok(row)
    }

    pub async fn register_user(&self, event_id: Uuid, user_id: Uuid) -> Result<bool> {
        let mut events = self.events.write();
        match events.get_mut(&event_id) {
            Some(event) => {
                if !event.registered_users.contains(&user_id) {
                    event.registered_users.push(user_id);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(category: &str) -> CreateEventRow {
        CreateEventRow {
            title: format!("{category} event"),
            description: None,
            location: None,
            image_url: None,
            kind: None,
            category: category.to_string(),
            date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn count_and_fetch_agree_on_filter() {
        let db = InMemoryDatabase::new();
        for category in ["Workshop", "workshop", "Lecture"] {
            db.create_event(event(category)).await.unwrap();
        }

        let filter = EventFilter::category("WORKSHOP");
        assert_eq!(db.count_events(&filter).await.unwrap(), 2);
        let rows = db.list_events(&filter, 10, 0).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows
            .iter()
            .all(|r| r.category.eq_ignore_ascii_case("workshop")));
    }

    #[tokio::test]
    async fn pages_are_disjoint_and_bounded() {
        let db = InMemoryDatabase::new();
        for i in 0..7 {
            db.create_event(event(&format!("c{i}"))).await.unwrap();
        }

        let filter = EventFilter::all();
        let first = db.list_events(&filter, 6, 0).await.unwrap();
        let second = db.list_events(&filter, 6, 6).await.unwrap();
        assert_eq!(first.len(), 6);
        assert_eq!(second.len(), 1);
        assert!(!first.iter().any(|e| e.id == second[0].id));
    }

    #[tokio::test]
    async fn registration_is_idempotent() {
        let db = InMemoryDatabase::new();
        let row = db.create_event(event("Seminar")).await.unwrap();
        let user = Uuid::now_v7();

        assert!(db.register_user(row.id, user).await.unwrap());
        assert!(db.register_user(row.id, user).await.unwrap());

        let stored = db.get_event(row.id).await.unwrap().unwrap();
        assert_eq!(stored.registered_users, vec![user]);

        // Unknown event id reports not found
        assert!(!db.register_user(Uuid::now_v7(), user).await.unwrap());
    }

    #[tokio::test]
    async fn categories_are_distinct_raw_values() {
        let db = InMemoryDatabase::new();
        for category in ["Workshop", "workshop", "Workshop", "Lecture"] {
            db.create_event(event(category)).await.unwrap();
        }

        let categories = db.list_categories().await.unwrap();
        assert_eq!(categories, vec!["Lecture", "Workshop", "workshop"]);
    }
}
