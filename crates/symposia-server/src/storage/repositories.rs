// Repository layer for database operations
//
// Listing runs two reads against the same filter: a count, then a bounded
// fetch. The two are not wrapped in a transaction; a concurrent write
// between them may make `total` drift from the fetched rows, and callers
// accept that. The fetch applies no ORDER BY, so rows come back in the
// store's natural retrieval order.

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use uuid::Uuid;

use super::models::*;

/// Bound on waiting for a pooled connection plus the handshake behind it.
/// On expiry the read fails and surfaces as a store-unavailable condition.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create database connection pool from URL and apply migrations
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect(database_url)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    // ============================================
    // Events (read path)
    // ============================================

    pub async fn count_events(&self, filter: &EventFilter) -> Result<i64> {
        let count: i64 = if let Some(category) = &filter.category {
            sqlx::query_scalar(
                r#"
                SELECT COUNT(*)
                FROM events
                WHERE LOWER(category) = LOWER($1)
                "#,
            )
            .bind(category)
            .fetch_one(&self.pool)
            .await?
        } else {
            sqlx::query_scalar("SELECT COUNT(*) FROM events")
                .fetch_one(&self.pool)
                .await?
        };

        Ok(count)
    }

    pub async fn list_events(
        &self,
        filter: &EventFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<EventRow>> {
        let rows = if let Some(category) = &filter.category {
            sqlx::query_as::<_, EventRow>(
                r#"
                SELECT id, title, description, location, image_url, kind, category, date, registered_users, created_at
                FROM events
                WHERE LOWER(category) = LOWER($1)
                LIMIT $2 OFFSET $3
                "#,
            )
            .bind(category)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as::<_, EventRow>(
                r#"
                SELECT id, title, description, location, image_url, kind, category, date, registered_users, created_at
                FROM events
                LIMIT $1 OFFSET $2
                "#,
            )
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?
        };

        Ok(rows)
    }

    pub async fn get_event(&self, id: Uuid) -> Result<Option<EventRow>> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, title, description, location, image_url, kind, category, date, registered_users, created_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_categories(&self) -> Result<Vec<String>> {
        let rows: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT category FROM events ORDER BY category ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows)
    }

    pub async fn list_events_for_user(&self, user_id: Uuid) -> Result<Vec<EventRow>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, title, description, location, image_url, kind, category, date, registered_users, created_at
            FROM events
            WHERE $1 = ANY(registered_users)
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    // ============================================
    // Events (write path)
    // ============================================

    pub async fn create_event(&self, input: CreateEventRow) -> Result<EventRow> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO events (id, title, description, location, image_url, kind, category, date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, title, description, location, image_url, kind, category, date, registered_users, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.location)
        .bind(&input.image_url)
        .bind(&input.kind)
        .bind(&input.category)
        .bind(input.date)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Add a user to an event's registered set.
    ///
    /// Idempotent: registering an already-registered user leaves the row
    /// unchanged but still reports the event as found. Returns false only
    /// when no event has this id.
    pub async fn register_user(&self, event_id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE events
            SET registered_users = CASE
                WHEN $2 = ANY(registered_users) THEN registered_users
                ELSE array_append(registered_users, $2)
            END
            WHERE id = $1
            "#,
        )
        .bind(event_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
