//! Building and updating registrations.
//!
//! A registration links one participant to one event and carries the
//! per-registration attributes (payment method, headcount, notes). Which
//! input fields are required — and which are silently discarded — depends on
//! the participant variant chosen by the registrant.

use serde::{Deserialize, Serialize};

use guestreg_core::{DomainError, DomainResult, EventId, ParticipantId, PaymentMethodId};

use crate::identity_code;
use crate::participant::{LegalPerson, NaturalPerson, Participant, ParticipantKind};

/// Maximum length of a natural person's first or last name.
pub const PERSON_NAME_MAX: usize = 50;
/// Maximum length of a company name.
pub const COMPANY_NAME_MAX: usize = 100;
/// Company register codes are exactly this many digits.
pub const REGISTER_CODE_LEN: usize = 8;
/// Maximum note length for a natural-person registration.
pub const NOTES_NATURAL_MAX: usize = 1500;
/// Maximum note length for a legal-person registration.
pub const NOTES_LEGAL_MAX: usize = 5000;

/// A payment-method catalog entry.
///
/// The catalog is flat, externally seeded and read-only from this core's
/// point of view; registrations reference entries by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    pub name: String,
}

/// The join record linking one participant to one event.
///
/// Identified by the `(event_id, participant_id)` composite key. Deleting a
/// registration never deletes the underlying participant record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub event_id: EventId,
    pub participant_id: ParticipantId,
    pub payment_method_id: PaymentMethodId,
    /// Headcount attending under this registration; legal persons only.
    pub number_of_attendees: Option<u32>,
    pub additional_information: Option<String>,
}

/// Raw registration input as submitted by a registrant.
///
/// All variant fields are optional here; `build_registration` decides which
/// are required once the discriminator is known. The two note fields carry
/// different length caps and are collapsed into the single stored field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationInput {
    pub kind: Option<ParticipantKind>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub id_code: Option<String>,
    pub company_name: Option<String>,
    pub register_code: Option<String>,
    pub number_of_attendees: Option<u32>,
    pub payment_method_id: Option<PaymentMethodId>,
    pub additional_information_natural: Option<String>,
    pub additional_information_legal: Option<String>,
}

/// Fields accepted when editing an existing registration.
///
/// Only the fields matching the *stored* participant variant take effect;
/// the variant itself never changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegistrationUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub id_code: Option<String>,
    pub company_name: Option<String>,
    pub register_code: Option<String>,
    pub number_of_attendees: Option<u32>,
    pub payment_method_id: Option<PaymentMethodId>,
    pub additional_information: Option<String>,
}

/// Build a participant and its registration from raw input.
///
/// Side-effect free: nothing is persisted here. The caller assigns both ids
/// and decides whether the pair ever reaches a store.
pub fn build_registration(
    event_id: EventId,
    participant_id: ParticipantId,
    input: RegistrationInput,
) -> DomainResult<(Participant, Registration)> {
    let kind = input
        .kind
        .ok_or_else(|| DomainError::validation("participant type is required"))?;
    let payment_method_id = input
        .payment_method_id
        .ok_or_else(|| DomainError::validation("payment method is required"))?;

    match kind {
        ParticipantKind::NaturalPerson => {
            let first_name =
                required_text(input.first_name.as_deref(), "first name", PERSON_NAME_MAX)?;
            let last_name =
                required_text(input.last_name.as_deref(), "last name", PERSON_NAME_MAX)?;
            let id_code = validated_id_code(input.id_code.as_deref())?;
            let notes = capped_notes(input.additional_information_natural, NOTES_NATURAL_MAX)?;

            let participant = Participant::NaturalPerson(NaturalPerson {
                id: participant_id,
                first_name,
                last_name,
                id_code,
            });
            let registration = Registration {
                event_id,
                participant_id,
                payment_method_id,
                // Headcount is meaningless for individuals; discard it even
                // when supplied.
                number_of_attendees: None,
                additional_information: notes,
            };
            Ok((participant, registration))
        }
        ParticipantKind::LegalPerson => {
            let company_name =
                required_text(input.company_name.as_deref(), "company name", COMPANY_NAME_MAX)?;
            let register_code = validated_register_code(input.register_code.as_deref())?;
            let number_of_attendees = validated_attendees(input.number_of_attendees)?;
            let notes = capped_notes(input.additional_information_legal, NOTES_LEGAL_MAX)?;

            let participant = Participant::LegalPerson(LegalPerson {
                id: participant_id,
                company_name,
                register_code,
            });
            let registration = Registration {
                event_id,
                participant_id,
                payment_method_id,
                number_of_attendees,
                additional_information: notes,
            };
            Ok((participant, registration))
        }
    }
}

impl Registration {
    /// Apply an edit to this registration and its stored participant.
    ///
    /// Fields for the other variant are ignored. Payment method and notes are
    /// always overwritten. The identity code is re-validated here as well:
    /// an update must not be able to smuggle in a code the create path would
    /// have rejected.
    pub fn apply_update(
        &mut self,
        participant: &mut Participant,
        update: RegistrationUpdate,
    ) -> DomainResult<()> {
        let payment_method_id = update
            .payment_method_id
            .ok_or_else(|| DomainError::validation("payment method is required"))?;

        match participant {
            Participant::NaturalPerson(person) => {
                person.first_name =
                    required_text(update.first_name.as_deref(), "first name", PERSON_NAME_MAX)?;
                person.last_name =
                    required_text(update.last_name.as_deref(), "last name", PERSON_NAME_MAX)?;
                person.id_code = validated_id_code(update.id_code.as_deref())?;
            }
            Participant::LegalPerson(company) => {
                company.company_name = required_text(
                    update.company_name.as_deref(),
                    "company name",
                    COMPANY_NAME_MAX,
                )?;
                company.register_code = validated_register_code(update.register_code.as_deref())?;
                self.number_of_attendees = validated_attendees(update.number_of_attendees)?;
            }
        }

        let notes_max = match participant {
            Participant::NaturalPerson(_) => NOTES_NATURAL_MAX,
            Participant::LegalPerson(_) => NOTES_LEGAL_MAX,
        };
        self.payment_method_id = payment_method_id;
        self.additional_information = capped_notes(update.additional_information, notes_max)?;
        Ok(())
    }
}

fn required_text(value: Option<&str>, field: &str, max: usize) -> DomainResult<String> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    if value.chars().count() > max {
        return Err(DomainError::validation(format!(
            "{field} cannot be longer than {max} characters"
        )));
    }
    Ok(value.to_string())
}

fn validated_id_code(code: Option<&str>) -> DomainResult<String> {
    let code = code.unwrap_or_default();
    let shape_ok = code.len() == 11
        && code.chars().all(|c| c.is_ascii_digit())
        && matches!(code.as_bytes()[0], b'1'..=b'6');
    if !shape_ok || !identity_code::is_valid(code) {
        return Err(DomainError::validation("invalid identity code"));
    }
    Ok(code.to_string())
}

fn validated_register_code(code: Option<&str>) -> DomainResult<String> {
    let code = code.unwrap_or_default();
    if code.len() != REGISTER_CODE_LEN || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::validation(format!(
            "register code must be exactly {REGISTER_CODE_LEN} digits"
        )));
    }
    Ok(code.to_string())
}

fn validated_attendees(count: Option<u32>) -> DomainResult<Option<u32>> {
    match count {
        Some(0) => Err(DomainError::validation(
            "number of attendees must be at least 1",
        )),
        other => Ok(other),
    }
}

fn capped_notes(notes: Option<String>, max: usize) -> DomainResult<Option<String>> {
    match notes {
        Some(n) if n.chars().count() > max => Err(DomainError::validation(format!(
            "additional information cannot be longer than {max} characters"
        ))),
        other => Ok(other),
    }
}
