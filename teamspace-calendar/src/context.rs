//! The calendar context: event operations over a [`JsonStore`].

use chrono::NaiveDate;
use teamspace_store::JsonStore;

use crate::error::{CalendarError, Result};
use crate::schedule;
use crate::types::{CalendarEvent, EventId, EventPatch};

/// Singleton collection calendar events are stored under
pub const EVENTS_COLLECTION: &str = "calendar_events";

/// Operations on the team calendar.
///
/// Wraps a [`JsonStore`] and persists the event list as one collection;
/// day queries delegate to the pure functions in [`crate::schedule`].
#[derive(Debug, Clone)]
pub struct CalendarContext {
    store: JsonStore,
}

impl CalendarContext {
    /// Creates a calendar over the given store.
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    /// Adds an event built by the caller.
    pub async fn add_event(&self, event: CalendarEvent) -> Result<CalendarEvent> {
        let mut events = self.load_events().await?;
        events.push(event.clone());
        self.save_events(&events).await?;
        Ok(event)
    }

    /// Applies a patch to an event and returns the updated value.
    pub async fn update_event(&self, id: &EventId, patch: EventPatch) -> Result<CalendarEvent> {
        let mut events = self.load_events().await?;
        let Some(event) = events.iter_mut().find(|e| &e.id == id) else {
            return Err(CalendarError::EventNotFound { id: id.to_string() });
        };
        patch.apply(event);
        let updated = event.clone();
        self.save_events(&events).await?;
        Ok(updated)
    }

    /// Deletes an event.
    pub async fn delete_event(&self, id: &EventId) -> Result<()> {
        let mut events = self.load_events().await?;
        let before = events.len();
        events.retain(|e| &e.id != id);
        if events.len() == before {
            return Err(CalendarError::EventNotFound { id: id.to_string() });
        }
        self.save_events(&events).await?;
        Ok(())
    }

    /// All events, sorted by start instant.
    pub async fn list_events(&self) -> Result<Vec<CalendarEvent>> {
        let mut events = self.load_events().await?;
        events.sort_by_key(|e| e.start);
        Ok(events)
    }

    /// The events covering one calendar day.
    pub async fn events_on(&self, date: NaiveDate) -> Result<Vec<CalendarEvent>> {
        let events = self.load_events().await?;
        Ok(schedule::events_on(&events, date))
    }

    /// The events overlapping an inclusive day range.
    pub async fn events_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<CalendarEvent>> {
        let events = self.load_events().await?;
        Ok(schedule::events_between(&events, from, to))
    }

    async fn load_events(&self) -> Result<Vec<CalendarEvent>> {
        Ok(self.store.load_all(EVENTS_COLLECTION).await?)
    }

    async fn save_events(&self, events: &[CalendarEvent]) -> Result<()> {
        Ok(self.store.save_all(EVENTS_COLLECTION, events).await?)
    }
}
