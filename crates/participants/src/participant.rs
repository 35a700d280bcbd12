use serde::{Deserialize, Serialize};

use guestreg_core::ParticipantId;

/// Discriminator for the two participant variants.
///
/// The set is closed: an unrecognized value is rejected at the serde boundary,
/// so no code path ever sees a third kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipantKind {
    NaturalPerson,
    LegalPerson,
}

/// An individual registrant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NaturalPerson {
    pub id: ParticipantId,
    pub first_name: String,
    pub last_name: String,
    pub id_code: String,
}

/// An organization registrant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalPerson {
    pub id: ParticipantId,
    pub company_name: String,
    pub register_code: String,
}

/// A registrant: either an individual or an organization.
///
/// Modeled as a sum type so that variant handling is exhaustive matching, not
/// runtime downcasts; forgetting a variant is a compile error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Participant {
    NaturalPerson(NaturalPerson),
    LegalPerson(LegalPerson),
}

impl Participant {
    pub fn id(&self) -> ParticipantId {
        match self {
            Participant::NaturalPerson(p) => p.id,
            Participant::LegalPerson(p) => p.id,
        }
    }

    pub fn kind(&self) -> ParticipantKind {
        match self {
            Participant::NaturalPerson(_) => ParticipantKind::NaturalPerson,
            Participant::LegalPerson(_) => ParticipantKind::LegalPerson,
        }
    }

    /// Display name: `"{first} {last}"` for individuals, the company name for
    /// organizations.
    pub fn display_name(&self) -> String {
        match self {
            Participant::NaturalPerson(p) => format!("{} {}", p.first_name, p.last_name),
            Participant::LegalPerson(p) => p.company_name.clone(),
        }
    }

    /// The registrant's public code: identity code or company register code.
    pub fn code(&self) -> &str {
        match self {
            Participant::NaturalPerson(p) => &p.id_code,
            Participant::LegalPerson(p) => &p.register_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_joins_first_and_last_name() {
        let p = Participant::NaturalPerson(NaturalPerson {
            id: ParticipantId::new(),
            first_name: "Mari".to_string(),
            last_name: "Maasikas".to_string(),
            id_code: "49001010230".to_string(),
        });
        assert_eq!(p.display_name(), "Mari Maasikas");
        assert_eq!(p.code(), "49001010230");
        assert_eq!(p.kind(), ParticipantKind::NaturalPerson);
    }

    #[test]
    fn display_name_uses_company_name_for_legal_person() {
        let p = Participant::LegalPerson(LegalPerson {
            id: ParticipantId::new(),
            company_name: "Acme OÜ".to_string(),
            register_code: "12345678".to_string(),
        });
        assert_eq!(p.display_name(), "Acme OÜ");
        assert_eq!(p.code(), "12345678");
        assert_eq!(p.kind(), ParticipantKind::LegalPerson);
    }

    #[test]
    fn kind_serializes_with_wire_casing() {
        let json = serde_json::to_string(&ParticipantKind::NaturalPerson).unwrap();
        assert_eq!(json, "\"NaturalPerson\"");
    }

    #[test]
    fn unknown_kind_fails_to_deserialize() {
        let err = serde_json::from_str::<ParticipantKind>("\"Robot\"");
        assert!(err.is_err());
    }
}
