//! `guestreg-events` — the event catalog domain: the `Event` entity and the
//! pure lifecycle decisions that gate creation, registration and deletion.

pub mod event;
pub mod lifecycle;

pub use event::{Event, NewEvent};
pub use lifecycle::{accepts_registrations, can_create, is_deletable, is_future};
