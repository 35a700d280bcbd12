//! Request DTOs and their mapping to domain inputs.
//!
//! The wire format is camelCase JSON with a `type` discriminator of
//! `"NaturalPerson"` or `"LegalPerson"`; anything else fails deserialization
//! and is answered with a 400 validation error.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use guestreg_core::PaymentMethodId;
use guestreg_events::NewEvent;
use guestreg_participants::{ParticipantKind, RegistrationInput, RegistrationUpdate};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub location: String,
    pub additional_information: Option<String>,
}

impl CreateEventRequest {
    pub fn into_new_event(self) -> NewEvent {
        NewEvent {
            name: self.name,
            start_time: self.start_time,
            location: self.location,
            additional_information: self.additional_information,
        }
    }
}

/// Which half of the catalog to list.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventView {
    #[default]
    Future,
    Past,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListEventsQuery {
    #[serde(default)]
    pub view: EventView,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParticipantRequest {
    #[serde(rename = "type")]
    pub kind: Option<ParticipantKind>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub id_code: Option<String>,
    pub company_name: Option<String>,
    pub register_code: Option<String>,
    pub number_of_attendees: Option<u32>,
    pub payment_method_id: Option<PaymentMethodId>,
    pub additional_information: Option<String>,
}

impl CreateParticipantRequest {
    /// The wire carries one notes field; the input keeps one slot per
    /// variant because their length caps differ, so it feeds both.
    pub fn into_registration_input(self) -> RegistrationInput {
        RegistrationInput {
            kind: self.kind,
            first_name: self.first_name,
            last_name: self.last_name,
            id_code: self.id_code,
            company_name: self.company_name,
            register_code: self.register_code,
            number_of_attendees: self.number_of_attendees,
            payment_method_id: self.payment_method_id,
            additional_information_natural: self.additional_information.clone(),
            additional_information_legal: self.additional_information,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParticipantRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub id_code: Option<String>,
    pub company_name: Option<String>,
    pub register_code: Option<String>,
    pub number_of_attendees: Option<u32>,
    pub payment_method_id: Option<PaymentMethodId>,
    pub additional_information: Option<String>,
}

impl UpdateParticipantRequest {
    pub fn into_registration_update(self) -> RegistrationUpdate {
        RegistrationUpdate {
            first_name: self.first_name,
            last_name: self.last_name,
            id_code: self.id_code,
            company_name: self.company_name,
            register_code: self.register_code,
            number_of_attendees: self.number_of_attendees,
            payment_method_id: self.payment_method_id,
            additional_information: self.additional_information,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_request_accepts_wire_field_names() {
        let body = r#"{
            "type": "NaturalPerson",
            "firstName": "Mari",
            "lastName": "Maasikas",
            "idCode": "49001010230",
            "paymentMethodId": "0189f0a0-0000-7000-8000-000000000001"
        }"#;
        let req: CreateParticipantRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.kind, Some(ParticipantKind::NaturalPerson));
        assert_eq!(req.first_name.as_deref(), Some("Mari"));
        assert!(req.payment_method_id.is_some());
    }

    #[test]
    fn unknown_participant_type_fails_deserialization() {
        let body = r#"{ "type": "Robot" }"#;
        assert!(serde_json::from_str::<CreateParticipantRequest>(body).is_err());
    }

    #[test]
    fn list_query_defaults_to_future() {
        let q: ListEventsQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.view, EventView::Future);
    }

    #[test]
    fn list_query_parses_past_view() {
        let q: ListEventsQuery = serde_json::from_str(r#"{"view":"past"}"#).unwrap();
        assert_eq!(q.view, EventView::Past);
    }
}
