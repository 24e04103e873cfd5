// Event service for business logic
//
// The listing path issues two sequential reads against the same filter:
// count, then a bounded fetch. They are deliberately not unified into one
// transaction; `total` may drift from the fetched rows under concurrent
// writes, and that is accepted behavior.

use anyhow::Result;
use symposia_core::{Event, EventPage, PageRequest};
use uuid::Uuid;

use crate::storage::{EventFilter, StorageBackend};

pub struct EventService {
    db: StorageBackend,
}

impl EventService {
    pub fn new(db: StorageBackend) -> Self {
        Self { db }
    }

    /// One page of events matching the request's category filter
    pub async fn list(&self, request: &PageRequest) -> Result<EventPage> {
        let filter = match &request.category {
            Some(category) => EventFilter::category(category.clone()),
            None => EventFilter::all(),
        };

        let total = self.db.count_events(&filter).await?;
        let rows = self
            .db
            .list_events(&filter, request.limit, request.offset())
            .await?;

        let events: Vec<Event> = rows.into_iter().map(Event::from).collect();
        Ok(EventPage::new(events, total, request))
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<Event>> {
        let row = self.db.get_event(id).await?;
        Ok(row.map(Event::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::CreateEventRow;
    use chrono::Utc;
    use symposia_core::DEFAULT_PAGE_SIZE;

    fn request(page: &str, limit: &str, category: &str) -> PageRequest {
        PageRequest::from_raw(
            Some(page),
            Some(limit),
            Some(category),
            DEFAULT_PAGE_SIZE,
        )
    }

    async fn seed(db: &StorageBackend, categories: &[&str]) {
        for category in categories {
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
    }

    #[tokio::test]
    async fn seven_events_split_across_two_pages() {
        let db = StorageBackend::in_memory();
        seed(&db, &["Seminar"; 7]).await;
        let service = EventService::new(db);

        let first = service.list(&request("1", "6", "all")).await.unwrap();
        assert_eq!(first.events.len(), 6);
        assert_eq!(first.total, 7);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.page, 1);

        let second = service.list(&request("2", "6", "all")).await.unwrap();
        assert_eq!(second.events.len(), 1);
        assert_eq!(second.total, 7);
        assert_eq!(second.total_pages, 2);
        assert_eq!(second.page, 2);
    }

    #[tokio::test]
    async fn category_filter_matches_case_insensitively() {
        let db = StorageBackend::in_memory();
        seed(&db, &["Workshop", "workshop", "Lecture"]).await;
        let service = EventService::new(db);

        let page = service.list(&request("1", "10", "workshop")).await.unwrap();
        assert_eq!(page.events.len(), 2);
        assert_eq!(page.total, 2);
        assert!(page
            .events
            .iter()
            .all(|e| e.category.eq_ignore_ascii_case("workshop")));

        // Exact-case request returns the same matches
        let exact = service.list(&request("1", "10", "Workshop")).await.unwrap();
        assert_eq!(exact.total, 2);
    }

    #[tokio::test]
    async fn empty_store_yields_zero_pages() {
        let service = EventService::new(StorageBackend::in_memory());

        let page = service.list(&request("1", "6", "all")).await.unwrap();
        assert!(page.events.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page, 1);
    }

    #[tokio::test]
    async fn all_sentinel_equals_no_filter() {
        let db = StorageBackend::in_memory();
        seed(&db, &["Workshop", "Lecture"]).await;
        let service = EventService::new(db);

        let sentinel = service.list(&request("1", "10", "all")).await.unwrap();
        let absent = service
            .list(&PageRequest::from_raw(
                Some("1"),
                Some("10"),
                None,
                DEFAULT_PAGE_SIZE,
            ))
            .await
            .unwrap();
        assert_eq!(sentinel.total, absent.total);
        assert_eq!(sentinel.events.len(), absent.events.len());
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty_with_totals_intact() {
        let db = StorageBackend::in_memory();
        seed(&db, &["Seminar"; 3]).await;
        let service = EventService::new(db);

        let page = service.list(&request("5", "6", "all")).await.unwrap();
        assert!(page.events.is_empty());
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 5);
    }

    #[tokio::test]
    async fn huge_limit_returns_everything_in_one_page() {
        let db = StorageBackend::in_memory();
        seed(&db, &["Seminar"; 7]).await;
        let service = EventService::new(db);

        let page = service.list(&request("1", "100000", "all")).await.unwrap();
        assert_eq!(page.events.len(), 7);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn get_returns_none_for_unknown_id() {
        let db = StorageBackend::in_memory();
        seed(&db, &["Seminar"]).await;
        let service = EventService::new(db);

        assert!(service.get(Uuid::now_v7()).await.unwrap().is_none());
    }
}
