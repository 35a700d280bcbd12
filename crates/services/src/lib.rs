//! `guestreg-services` — application services over the event and
//! registration domains, plus the storage port they are written against.

pub mod catalog;
pub mod projection;
pub mod registration;
pub mod store;

pub use catalog::EventCatalogService;
pub use projection::{EventDetail, EventSummary, ParticipantSummary, RegistrationDetail};
pub use registration::RegistrationService;
pub use store::{Store, StoreError};
