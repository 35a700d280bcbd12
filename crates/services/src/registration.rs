//! Registration service: signing participants up for events and managing
//! existing registrations.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use guestreg_core::{DomainError, DomainResult, EventId, ParticipantId, PaymentMethodId};
use guestreg_participants::{
    PaymentMethod, RegistrationInput, RegistrationUpdate, build_registration,
};

use crate::projection::RegistrationDetail;
use crate::store::Store;

pub struct RegistrationService<S> {
    store: S,
}

impl<S: Store> RegistrationService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Register a participant for an event.
    ///
    /// Fails with `NotFound` for an unknown event, `BusinessRule` when the
    /// event has already started, and `Validation` for bad input or an
    /// unknown payment method. On any failure nothing is persisted.
    pub fn register(
        &self,
        event_id: EventId,
        input: RegistrationInput,
        now: DateTime<Utc>,
    ) -> DomainResult<RegistrationDetail> {
        let event = self
            .store
            .event(event_id)?
            .ok_or_else(|| DomainError::not_found(format!("event {event_id} not found")))?;
        if !event.accepts_registrations(now) {
            warn!(event_id = %event_id, "refused registration for event that has already started");
            return Err(DomainError::business_rule(
                "registration is closed for events that have already started",
            ));
        }

        let (participant, registration) =
            build_registration(event_id, ParticipantId::new(), input)?;
        self.require_payment_method(registration.payment_method_id)?;

        self.store
            .insert_registration(participant.clone(), registration.clone())?;
        info!(
            event_id = %event_id,
            participant_id = %participant.id(),
            kind = ?participant.kind(),
            "participant registered"
        );
        Ok(RegistrationDetail::from_parts(&participant, &registration))
    }

    pub fn detail(
        &self,
        event_id: EventId,
        participant_id: ParticipantId,
    ) -> DomainResult<RegistrationDetail> {
        let (registration, participant) = self
            .store
            .registration(event_id, participant_id)?
            .ok_or_else(|| registration_not_found(event_id, participant_id))?;
        Ok(RegistrationDetail::from_parts(&participant, &registration))
    }

    /// Edit an existing registration. The participant variant is fixed; only
    /// fields of the stored variant take effect.
    pub fn update(
        &self,
        event_id: EventId,
        participant_id: ParticipantId,
        update: RegistrationUpdate,
    ) -> DomainResult<RegistrationDetail> {
        let (mut registration, mut participant) = self
            .store
            .registration(event_id, participant_id)?
            .ok_or_else(|| registration_not_found(event_id, participant_id))?;

        registration.apply_update(&mut participant, update)?;
        self.require_payment_method(registration.payment_method_id)?;

        // The registration can vanish between the read above and this write;
        // a miss here is the same not-found as a miss on the read.
        if !self
            .store
            .update_registration(participant.clone(), registration.clone())?
        {
            return Err(registration_not_found(event_id, participant_id));
        }
        info!(event_id = %event_id, participant_id = %participant_id, "registration updated");
        Ok(RegistrationDetail::from_parts(&participant, &registration))
    }

    pub fn remove(&self, event_id: EventId, participant_id: ParticipantId) -> DomainResult<()> {
        if !self.store.delete_registration(event_id, participant_id)? {
            return Err(registration_not_found(event_id, participant_id));
        }
        info!(event_id = %event_id, participant_id = %participant_id, "registration removed");
        Ok(())
    }

    pub fn payment_methods(&self) -> DomainResult<Vec<PaymentMethod>> {
        Ok(self.store.payment_methods()?)
    }

    fn require_payment_method(&self, id: PaymentMethodId) -> DomainResult<()> {
        if self.store.payment_method(id)?.is_none() {
            return Err(DomainError::validation("unknown payment method"));
        }
        Ok(())
    }
}

fn registration_not_found(event_id: EventId, participant_id: ParticipantId) -> DomainError {
    DomainError::not_found(format!(
        "registration for participant {participant_id} at event {event_id} not found"
    ))
}
