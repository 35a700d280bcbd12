//! Read models returned by the services.

use chrono::{DateTime, Utc};
use serde::Serialize;

use guestreg_core::{EventId, ParticipantId, PaymentMethodId};
use guestreg_events::Event;
use guestreg_participants::{Participant, ParticipantKind, Registration};

/// One row of an event listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: EventId,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub location: String,
    pub participant_count: usize,
}

impl EventSummary {
    pub fn from_event(event: Event, participant_count: usize) -> Self {
        Self {
            id: event.id,
            name: event.name,
            start_time: event.start_time,
            location: event.location,
            participant_count,
        }
    }
}

/// One row of an event's participant list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantSummary {
    pub id: ParticipantId,
    pub name: String,
    pub code: String,
}

impl ParticipantSummary {
    pub fn from_participant(participant: &Participant) -> Self {
        Self {
            id: participant.id(),
            name: participant.display_name(),
            code: participant.code().to_string(),
        }
    }
}

/// An event with its participant list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    pub id: EventId,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub location: String,
    pub additional_information: Option<String>,
    pub participants: Vec<ParticipantSummary>,
}

impl EventDetail {
    pub fn from_parts(event: Event, registrations: &[(Registration, Participant)]) -> Self {
        Self {
            id: event.id,
            name: event.name,
            start_time: event.start_time,
            location: event.location,
            additional_information: event.additional_information,
            participants: registrations
                .iter()
                .map(|(_, p)| ParticipantSummary::from_participant(p))
                .collect(),
        }
    }
}

/// A single registration in full, shaped for editing forms.
///
/// The variant fields are mutually exclusive; the absent variant's fields
/// serialize as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDetail {
    pub id: ParticipantId,
    #[serde(rename = "type")]
    pub kind: ParticipantKind,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub id_code: Option<String>,
    pub company_name: Option<String>,
    pub register_code: Option<String>,
    pub number_of_attendees: Option<u32>,
    pub payment_method_id: PaymentMethodId,
    pub additional_information: Option<String>,
}

impl RegistrationDetail {
    pub fn from_parts(participant: &Participant, registration: &Registration) -> Self {
        let mut detail = Self {
            id: participant.id(),
            kind: participant.kind(),
            first_name: None,
            last_name: None,
            id_code: None,
            company_name: None,
            register_code: None,
            number_of_attendees: registration.number_of_attendees,
            payment_method_id: registration.payment_method_id,
            additional_information: registration.additional_information.clone(),
        };
        match participant {
            Participant::NaturalPerson(p) => {
                detail.first_name = Some(p.first_name.clone());
                detail.last_name = Some(p.last_name.clone());
                detail.id_code = Some(p.id_code.clone());
            }
            Participant::LegalPerson(p) => {
                detail.company_name = Some(p.company_name.clone());
                detail.register_code = Some(p.register_code.clone());
            }
        }
        detail
    }
}
