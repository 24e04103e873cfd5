// Category service for business logic
//
// Categories are reported as stored, mixed casing included. The store never
// normalized casing at write time, so "Workshop" and "workshop" are two
// distinct values here even though the listing filter treats them as one.

use anyhow::Result;

use crate::storage::StorageBackend;

pub struct CategoryService {
    db: StorageBackend,
}

impl CategoryService {
    pub fn new(db: StorageBackend) -> Self {
        Self { db }
    }

    /// Distinct category values, sorted
    pub async fn list(&self) -> Result<Vec<String>> {
        self.db.list_categories().await
    }
}
