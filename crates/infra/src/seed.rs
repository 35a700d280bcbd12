//! Demo seed data for local runs.

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use guestreg_core::{EventId, PaymentMethodId};
use guestreg_events::Event;
use guestreg_participants::PaymentMethod;
use guestreg_services::{Store, StoreError};

use crate::memory::InMemoryStore;

/// Populate `store` with the payment-method catalog and a handful of demo
/// events on both sides of `now`.
///
/// Past events are written straight into the store; the create path would
/// rightly refuse them.
pub fn seed_demo_data(store: &InMemoryStore, now: DateTime<Utc>) -> Result<(), StoreError> {
    for name in ["Bank transfer", "Card payment", "Cash"] {
        store.add_payment_method(PaymentMethod {
            id: PaymentMethodId::new(),
            name: name.to_string(),
        })?;
    }

    let events: [(&str, i64, &str, Option<&str>); 4] = [
        (
            "Summer Tech Conference",
            30,
            "Tech Park Tallinn",
            Some("Annual technology conference with talks and workshops"),
        ),
        (
            "Agile Development Workshop",
            90,
            "Virtual Event",
            Some("Hands-on workshop, bring your own laptop"),
        ),
        ("Winter Code Retreat", -60, "Pärnu Hotel", None),
        ("Project Management Meetup", -120, "Tartu University", None),
    ];
    for (name, days, location, extra) in events {
        store.insert_event(Event {
            id: EventId::new(),
            name: name.to_string(),
            start_time: now + Duration::days(days),
            location: location.to_string(),
            additional_information: extra.map(str::to_string),
        })?;
    }

    info!("seeded demo payment methods and events");
    Ok(())
}
