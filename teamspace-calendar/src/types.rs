//! Calendar event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use teamspace_common::{define_id, UserId};

define_id!(
    /// Unique identifier for a calendar event
    EventId
);

/// One event on the team calendar.
///
/// `start` and `end` are UTC instants; day queries compare their
/// calendar dates. `end >= start` is expected but not enforced, so a
/// backwards event simply never matches a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Unique event identifier
    pub id: EventId,
    /// Event title shown on the calendar
    pub title: String,
    /// Longer free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the event starts
    pub start: DateTime<Utc>,
    /// When the event ends
    pub end: DateTime<Utc>,
    /// Whether the event covers whole days rather than a time range
    #[serde(default)]
    pub all_day: bool,
    /// Optional display color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// The user who created the event
    pub created_by: UserId,
    /// When the event was created
    pub created_at: DateTime<Utc>,
}

impl CalendarEvent {
    /// Creates an event with a fresh id.
    pub fn new(
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        created_by: UserId,
    ) -> Self {
        Self {
            id: EventId::new(),
            title: title.into(),
            description: None,
            start,
            end,
            all_day: false,
            color: None,
            created_by,
            created_at: Utc::now(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the event as all-day.
    pub fn with_all_day(mut self) -> Self {
        self.all_day = true;
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A partial update to an event. `None` fields are left untouched; the
/// description and color use nested `Option`s so they can be cleared.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub all_day: Option<bool>,
    pub color: Option<Option<String>>,
}

impl EventPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Clears the description.
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Sets the start instant.
    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the end instant.
    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the all-day flag.
    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = Some(all_day);
        self
    }

    /// Sets the display color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(Some(color.into()));
        self
    }

    /// Clears the display color.
    pub fn clear_color(mut self) -> Self {
        self.color = Some(None);
        self
    }

    /// Applies the patch to an event, overwriting only the set fields.
    pub fn apply(self, event: &mut CalendarEvent) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(start) = self.start {
            event.start = start;
        }
        if let Some(end) = self.end {
            event.end = end;
        }
        if let Some(all_day) = self.all_day {
            event.all_day = all_day;
        }
        if let Some(color) = self.color {
            event.color = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event() -> CalendarEvent {
        let start = Utc.with_ymd_and_hms(2025, 3, 14, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 3, 14, 11, 0, 0).unwrap();
        CalendarEvent::new("Standup", start, end, UserId::from_string("u1"))
    }

    #[test]
    fn test_patch_touches_only_set_fields() {
        let mut target = event().with_color("#ff7700");
        EventPatch::new().title("Planning").apply(&mut target);

        assert_eq!(target.title, "Planning");
        assert_eq!(target.color.as_deref(), Some("#ff7700"));
        assert!(!target.all_day);
    }

    #[test]
    fn test_patch_clears_nested_options() {
        let mut target = event().with_description("daily sync").with_color("#ff7700");
        EventPatch::new().clear_description().clear_color().apply(&mut target);

        assert_eq!(target.description, None);
        assert_eq!(target.color, None);
    }

    #[test]
    fn test_optional_fields_stay_off_the_wire() {
        let json = serde_json::to_string(&event()).unwrap();
        assert!(!json.contains("description"));
        assert!(!json.contains("color"));
    }
}
