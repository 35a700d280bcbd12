use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use guestreg_core::{DomainError, DomainResult, EventId};

use crate::lifecycle;

/// Maximum length of an event name.
pub const NAME_MAX: usize = 100;
/// Maximum length of an event location.
pub const LOCATION_MAX: usize = 100;
/// Maximum length of the free-text additional information.
pub const ADDITIONAL_INFORMATION_MAX: usize = 1000;

/// A scheduled occurrence that guests register to attend.
///
/// Events are immutable after creation: there is no edit operation, and an
/// event whose start time has passed can neither be deleted nor accept new
/// registrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub location: String,
    pub additional_information: Option<String>,
}

/// Validated input for creating an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
    pub start_time: DateTime<Utc>,
    pub location: String,
    pub additional_information: Option<String>,
}

impl Event {
    /// Validate `input` against `now` and produce the event.
    ///
    /// The id is server-assigned by the caller and immutable afterwards.
    pub fn create(id: EventId, input: NewEvent, now: DateTime<Utc>) -> DomainResult<Self> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("event name cannot be empty"));
        }
        if name.chars().count() > NAME_MAX {
            return Err(DomainError::validation(format!(
                "event name cannot be longer than {NAME_MAX} characters"
            )));
        }

        let location = input.location.trim();
        if location.is_empty() {
            return Err(DomainError::validation("event location cannot be empty"));
        }
        if location.chars().count() > LOCATION_MAX {
            return Err(DomainError::validation(format!(
                "event location cannot be longer than {LOCATION_MAX} characters"
            )));
        }

        if let Some(info) = &input.additional_information {
            if info.chars().count() > ADDITIONAL_INFORMATION_MAX {
                return Err(DomainError::validation(format!(
                    "additional information cannot be longer than {ADDITIONAL_INFORMATION_MAX} characters"
                )));
            }
        }

        if !lifecycle::can_create(input.start_time, now) {
            return Err(DomainError::validation(
                "event start time must be in the future",
            ));
        }

        Ok(Self {
            id,
            name: name.to_string(),
            start_time: input.start_time,
            location: location.to_string(),
            additional_information: input.additional_information,
        })
    }

    /// Whether this event still lies in the future relative to `now`.
    pub fn is_future(&self, now: DateTime<Utc>) -> bool {
        lifecycle::is_future(self.start_time, now)
    }

    /// Whether this event may still be deleted relative to `now`.
    pub fn is_deletable(&self, now: DateTime<Utc>) -> bool {
        lifecycle::is_deletable(self.start_time, now)
    }

    /// Whether this event may still accept registrations relative to `now`.
    pub fn accepts_registrations(&self, now: DateTime<Utc>) -> bool {
        lifecycle::accepts_registrations(self.start_time, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn valid_input(now: DateTime<Utc>) -> NewEvent {
        NewEvent {
            name: "Summer Tech Conference".to_string(),
            start_time: now + Duration::days(30),
            location: "Tech Park Tallinn".to_string(),
            additional_information: None,
        }
    }

    #[test]
    fn create_accepts_valid_input() {
        let now = fixed_now();
        let event = Event::create(EventId::new(), valid_input(now), now).unwrap();
        assert_eq!(event.name, "Summer Tech Conference");
        assert_eq!(event.location, "Tech Park Tallinn");
        assert!(event.is_future(now));
    }

    #[test]
    fn create_trims_surrounding_whitespace() {
        let now = fixed_now();
        let mut input = valid_input(now);
        input.name = "  Workshop  ".to_string();
        let event = Event::create(EventId::new(), input, now).unwrap();
        assert_eq!(event.name, "Workshop");
    }

    #[test]
    fn create_rejects_empty_name() {
        let now = fixed_now();
        let mut input = valid_input(now);
        input.name = "   ".to_string();
        let err = Event::create(EventId::new(), input, now).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn create_rejects_overlong_name() {
        let now = fixed_now();
        let mut input = valid_input(now);
        input.name = "x".repeat(NAME_MAX + 1);
        let err = Event::create(EventId::new(), input, now).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn create_rejects_empty_location() {
        let now = fixed_now();
        let mut input = valid_input(now);
        input.location = String::new();
        let err = Event::create(EventId::new(), input, now).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn create_rejects_overlong_additional_information() {
        let now = fixed_now();
        let mut input = valid_input(now);
        input.additional_information = Some("x".repeat(ADDITIONAL_INFORMATION_MAX + 1));
        let err = Event::create(EventId::new(), input, now).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn create_rejects_past_start_time() {
        let now = fixed_now();
        let mut input = valid_input(now);
        input.start_time = now - Duration::seconds(1);
        let err = Event::create(EventId::new(), input, now).unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("event start time must be in the future")
        );
    }

    #[test]
    fn create_rejects_start_time_equal_to_now() {
        let now = fixed_now();
        let mut input = valid_input(now);
        input.start_time = now;
        let err = Event::create(EventId::new(), input, now).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn name_at_exactly_max_length_is_accepted() {
        let now = fixed_now();
        let mut input = valid_input(now);
        input.name = "x".repeat(NAME_MAX);
        assert!(Event::create(EventId::new(), input, now).is_ok());
    }
}
