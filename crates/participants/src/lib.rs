//! `guestreg-participants` — the registration domain: the polymorphic
//! participant model, the identity-code checksum, and the variant-conditional
//! validation applied when a guest registers for an event.

pub mod identity_code;
pub mod participant;
pub mod registration;

pub use participant::{LegalPerson, NaturalPerson, Participant, ParticipantKind};
pub use registration::{
    PaymentMethod, Registration, RegistrationInput, RegistrationUpdate, build_registration,
};
