//! Event catalog: listing, inspection, creation and deletion of events.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use guestreg_core::{DomainError, DomainResult, EventId};
use guestreg_events::{Event, NewEvent};

use crate::projection::{EventDetail, EventSummary};
use crate::store::Store;

/// Application service over the event catalog.
///
/// Every operation takes `now` from the caller so that each request applies
/// one consistent reading of the clock.
pub struct EventCatalogService<S> {
    store: S,
}

impl<S: Store> EventCatalogService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Future events soonest-first, or past events most-recent-first.
    pub fn list_events(&self, future: bool, now: DateTime<Utc>) -> DomainResult<Vec<EventSummary>> {
        let mut rows = self.store.events_by_direction(future, now)?;
        if future {
            rows.sort_by_key(|(event, _)| event.start_time);
        } else {
            rows.sort_by_key(|(event, _)| std::cmp::Reverse(event.start_time));
        }
        Ok(rows
            .into_iter()
            .map(|(event, count)| EventSummary::from_event(event, count))
            .collect())
    }

    pub fn event_detail(&self, id: EventId) -> DomainResult<EventDetail> {
        let (event, registrations) = self
            .store
            .event_with_registrations(id)?
            .ok_or_else(|| DomainError::not_found(format!("event {id} not found")))?;
        Ok(EventDetail::from_parts(event, &registrations))
    }

    /// Create an event. The detail projection comes back with an empty
    /// participant list.
    pub fn create_event(&self, input: NewEvent, now: DateTime<Utc>) -> DomainResult<EventDetail> {
        let event = Event::create(EventId::new(), input, now)?;
        self.store.insert_event(event.clone())?;
        info!(event_id = %event.id, name = %event.name, "event created");
        Ok(EventDetail::from_parts(event, &[]))
    }

    /// Delete a future event together with its registrations.
    pub fn delete_event(&self, id: EventId, now: DateTime<Utc>) -> DomainResult<()> {
        let event = self
            .store
            .event(id)?
            .ok_or_else(|| DomainError::not_found(format!("event {id} not found")))?;
        if !event.is_deletable(now) {
            warn!(event_id = %id, "refused to delete event that has already started");
            return Err(DomainError::business_rule(
                "events that have already started cannot be deleted",
            ));
        }
        self.store.delete_event(id)?;
        info!(event_id = %id, "event deleted");
        Ok(())
    }
}
