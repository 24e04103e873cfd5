// Storage layer for the Symposia server
// Decision: Support both PostgreSQL (production) and in-memory (dev mode)
//
// The event store is the only external collaborator of the listing path.
// Reads and writes go through StorageBackend; pooled connections are
// acquired per query and released on every exit path by sqlx.

pub mod backend;
pub mod memory;
pub mod models;
pub mod repositories;

pub use backend::StorageBackend;
pub use memory::InMemoryDatabase;
pub use models::*;
pub use repositories::Database;
