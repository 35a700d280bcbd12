//! Storage port for the application services.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

use guestreg_core::{DomainError, EventId, ParticipantId, PaymentMethodId};
use guestreg_events::Event;
use guestreg_participants::{Participant, PaymentMethod, Registration};

/// Opaque storage failure.
///
/// Backends map their own error types into this; services never inspect the
/// message, they only propagate it.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::Storage(err.0)
    }
}

/// The persistence surface the services are written against.
///
/// Registrations are keyed by `(event_id, participant_id)`; the participant
/// record travels with its registration so a backend can keep the pair
/// consistent in one step.
pub trait Store: Send + Sync {
    fn event(&self, id: EventId) -> Result<Option<Event>, StoreError>;

    /// An event together with its registrations and their participants.
    fn event_with_registrations(
        &self,
        id: EventId,
    ) -> Result<Option<(Event, Vec<(Registration, Participant)>)>, StoreError>;

    /// Events on one side of `now` (future when `future` is true, otherwise
    /// past), each with its registration count. Ordering is left to the
    /// caller.
    fn events_by_direction(
        &self,
        future: bool,
        now: DateTime<Utc>,
    ) -> Result<Vec<(Event, usize)>, StoreError>;

    fn insert_event(&self, event: Event) -> Result<(), StoreError>;

    /// Delete an event and all of its registrations. Returns false when the
    /// event does not exist.
    fn delete_event(&self, id: EventId) -> Result<bool, StoreError>;

    /// Persist a participant and its registration atomically.
    fn insert_registration(
        &self,
        participant: Participant,
        registration: Registration,
    ) -> Result<(), StoreError>;

    fn registration(
        &self,
        event_id: EventId,
        participant_id: ParticipantId,
    ) -> Result<Option<(Registration, Participant)>, StoreError>;

    /// Overwrite an existing registration and its participant. Returns false
    /// when no such registration exists.
    fn update_registration(
        &self,
        participant: Participant,
        registration: Registration,
    ) -> Result<bool, StoreError>;

    /// Returns false when no such registration exists.
    fn delete_registration(
        &self,
        event_id: EventId,
        participant_id: ParticipantId,
    ) -> Result<bool, StoreError>;

    fn payment_method(&self, id: PaymentMethodId) -> Result<Option<PaymentMethod>, StoreError>;

    fn payment_methods(&self) -> Result<Vec<PaymentMethod>, StoreError>;
}

impl<S: Store + ?Sized> Store for Arc<S> {
    fn event(&self, id: EventId) -> Result<Option<Event>, StoreError> {
        (**self).event(id)
    }

    fn event_with_registrations(
        &self,
        id: EventId,
    ) -> Result<Option<(Event, Vec<(Registration, Participant)>)>, StoreError> {
        (**self).event_with_registrations(id)
    }

    fn events_by_direction(
        &self,
        future: bool,
        now: DateTime<Utc>,
    ) -> Result<Vec<(Event, usize)>, StoreError> {
        (**self).events_by_direction(future, now)
    }

    fn insert_event(&self, event: Event) -> Result<(), StoreError> {
        (**self).insert_event(event)
    }

    fn delete_event(&self, id: EventId) -> Result<bool, StoreError> {
        (**self).delete_event(id)
    }

    fn insert_registration(
        &self,
        participant: Participant,
        registration: Registration,
    ) -> Result<(), StoreError> {
        (**self).insert_registration(participant, registration)
    }

    fn registration(
        &self,
        event_id: EventId,
        participant_id: ParticipantId,
    ) -> Result<Option<(Registration, Participant)>, StoreError> {
        (**self).registration(event_id, participant_id)
    }

    fn update_registration(
        &self,
        participant: Participant,
        registration: Registration,
    ) -> Result<bool, StoreError> {
        (**self).update_registration(participant, registration)
    }

    fn delete_registration(
        &self,
        event_id: EventId,
        participant_id: ParticipantId,
    ) -> Result<bool, StoreError> {
        (**self).delete_registration(event_id, participant_id)
    }

    fn payment_method(&self, id: PaymentMethodId) -> Result<Option<PaymentMethod>, StoreError> {
        (**self).payment_method(id)
    }

    fn payment_methods(&self) -> Result<Vec<PaymentMethod>, StoreError> {
        (**self).payment_methods()
    }
}
