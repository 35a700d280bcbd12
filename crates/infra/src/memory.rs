//! In-memory store.
//!
//! Backs the service layer with plain maps behind a single `RwLock` per
//! collection. Every trait method takes its locks once, so each call is one
//! consistent snapshot or mutation.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::RwLock;

use guestreg_core::{EventId, ParticipantId, PaymentMethodId};
use guestreg_events::Event;
use guestreg_participants::{Participant, PaymentMethod, Registration};
use guestreg_services::{Store, StoreError};

#[derive(Default)]
struct Collections {
    events: HashMap<EventId, Event>,
    participants: HashMap<ParticipantId, Participant>,
    registrations: HashMap<(EventId, ParticipantId), Registration>,
    payment_methods: Vec<PaymentMethod>,
}

/// Process-local store. Cheap to construct empty; call the seed helpers to
/// populate demo data.
#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Collections>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_payment_method(&self, method: PaymentMethod) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        inner.payment_methods.push(method);
        Ok(())
    }

    /// Look up a participant record directly, registered or not.
    pub fn participant(&self, id: ParticipantId) -> Result<Option<Participant>, StoreError> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.participants.get(&id).cloned())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> StoreError {
    StoreError("store lock poisoned".to_string())
}

impl Store for InMemoryStore {
    fn event(&self, id: EventId) -> Result<Option<Event>, StoreError> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.events.get(&id).cloned())
    }

    fn event_with_registrations(
        &self,
        id: EventId,
    ) -> Result<Option<(Event, Vec<(Registration, Participant)>)>, StoreError> {
        let inner = self.inner.read().map_err(poisoned)?;
        let Some(event) = inner.events.get(&id).cloned() else {
            return Ok(None);
        };
        let mut rows: Vec<(Registration, Participant)> = inner
            .registrations
            .iter()
            .filter(|((event_id, _), _)| *event_id == id)
            .filter_map(|((_, participant_id), registration)| {
                inner
                    .participants
                    .get(participant_id)
                    .map(|p| (registration.clone(), p.clone()))
            })
            .collect();
        // Map iteration order is arbitrary; present participants stably.
        rows.sort_by_key(|(r, _)| *r.participant_id.as_uuid());
        Ok(Some((event, rows)))
    }

    fn events_by_direction(
        &self,
        future: bool,
        now: DateTime<Utc>,
    ) -> Result<Vec<(Event, usize)>, StoreError> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner
            .events
            .values()
            .filter(|event| event.is_future(now) == future)
            .map(|event| {
                let count = inner
                    .registrations
                    .keys()
                    .filter(|(event_id, _)| *event_id == event.id)
                    .count();
                (event.clone(), count)
            })
            .collect())
    }

    fn insert_event(&self, event: Event) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        inner.events.insert(event.id, event);
        Ok(())
    }

    fn delete_event(&self, id: EventId) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        if inner.events.remove(&id).is_none() {
            return Ok(false);
        }
        // The cascade covers the join rows only; participant records are kept.
        inner.registrations.retain(|(event_id, _), _| *event_id != id);
        Ok(true)
    }

    fn insert_registration(
        &self,
        participant: Participant,
        registration: Registration,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        // The event-exists check at the service layer ran in an earlier
        // critical section; re-check here so a concurrent event deletion
        // cannot leave an orphan registration behind.
        if !inner.events.contains_key(&registration.event_id) {
            return Err(StoreError(format!(
                "event {} no longer exists",
                registration.event_id
            )));
        }
        let key = (registration.event_id, registration.participant_id);
        inner.participants.insert(participant.id(), participant);
        inner.registrations.insert(key, registration);
        Ok(())
    }

    fn registration(
        &self,
        event_id: EventId,
        participant_id: ParticipantId,
    ) -> Result<Option<(Registration, Participant)>, StoreError> {
        let inner = self.inner.read().map_err(poisoned)?;
        let Some(registration) = inner.registrations.get(&(event_id, participant_id)) else {
            return Ok(None);
        };
        let Some(participant) = inner.participants.get(&participant_id) else {
            return Ok(None);
        };
        Ok(Some((registration.clone(), participant.clone())))
    }

    fn update_registration(
        &self,
        participant: Participant,
        registration: Registration,
    ) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        let key = (registration.event_id, registration.participant_id);
        if !inner.registrations.contains_key(&key) {
            return Ok(false);
        }
        inner.participants.insert(participant.id(), participant);
        inner.registrations.insert(key, registration);
        Ok(true)
    }

    fn delete_registration(
        &self,
        event_id: EventId,
        participant_id: ParticipantId,
    ) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        // Only the join row goes; the participant record outlives it.
        Ok(inner
            .registrations
            .remove(&(event_id, participant_id))
            .is_some())
    }

    fn payment_method(&self, id: PaymentMethodId) -> Result<Option<PaymentMethod>, StoreError> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.payment_methods.iter().find(|m| m.id == id).cloned())
    }

    fn payment_methods(&self) -> Result<Vec<PaymentMethod>, StoreError> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.payment_methods.clone())
    }
}
