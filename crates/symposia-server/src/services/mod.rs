// Services layer
//
// Business logic between the HTTP handlers and the storage backend.
// Services are stateless; concurrent invocations share nothing but the
// storage handle.

pub mod category;
pub mod event;
pub mod registration;

pub use category::CategoryService;
pub use event::EventService;
pub use registration::RegistrationService;
