// Symposia core domain types
//
// This crate defines the entity and pagination vocabulary shared by the API
// and storage layers:
// - Event: the academic event entity as it appears on the wire
// - PageRequest / EventPage: the pagination contract for event listing
//
// Key design decisions:
// - Event identifiers are canonical UUIDs; the storage identifier type never
//   leaks to callers (ids serialize as plain strings)
// - Malformed page/limit inputs normalize silently instead of failing
// - Wire format keeps the camelCase field names of the original API

pub mod event;
pub mod page;

pub use event::Event;
pub use page::{EventPage, PageRequest, DEFAULT_PAGE_SIZE};
