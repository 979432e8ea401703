//! The immutable event model supplied wholesale by an external store.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};

/// Opaque event identity, unique within an event collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(Uuid);

impl EventId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque display token, carried through the layout untouched and never
/// interpreted by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTag(String);

impl ColorTag {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One calendar event.
///
/// Events are read-only inputs to the layout engine; they are created and
/// destroyed elsewhere. An all-day event is exempt from vertical track
/// placement and column packing, and its displayed span is the whole day
/// regardless of the stored clock values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub all_day: bool,
    pub color: ColorTag,
}

impl CalendarEvent {
    /// Creates a timed event with a fresh id.
    #[must_use]
    pub fn timed(
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        color: ColorTag,
    ) -> Self {
        Self {
            id: EventId::new(),
            title: title.into(),
            description: None,
            start,
            end,
            all_day: false,
            color,
        }
    }

    /// Creates an all-day banner event spanning `day`.
    #[must_use]
    pub fn all_day(title: impl Into<String>, day: NaiveDate, color: ColorTag) -> Self {
        let midnight = NaiveTime::MIN;
        let last_minute = NaiveTime::from_hms_opt(23, 59, 0).unwrap_or(midnight);
        Self {
            id: EventId::new(),
            title: title.into(),
            description: None,
            start: day.and_time(midnight),
            end: day.and_time(last_minute),
            all_day: true,
            color,
        }
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn is_timed(&self) -> bool {
        !self.all_day
    }

    /// The calendar day this event is bucketed under.
    #[must_use]
    pub const fn day(&self) -> NaiveDate {
        self.start.date()
    }

    /// ## Summary
    /// Checks the `end > start` invariant for timed events.
    ///
    /// The layout never fails on a malformed event (the track mapper clamps
    /// instead); this is the reportable-warning surface for callers that
    /// want to know.
    ///
    /// ## Errors
    /// Returns `CoreError::ValidationError` when a timed event ends at or
    /// before its start.
    pub fn validate(&self) -> CoreResult<()> {
        if self.is_timed() && self.end <= self.start {
            return Err(CoreError::ValidationError(format!(
                "event {} ends at or before its start ({} >= {})",
                self.id, self.start, self.end
            )));
        }
        Ok(())
    }
}

/// Collaborator contract with the data source: the engine asks for all
/// events and filters by day itself.
pub trait EventSource {
    fn events(&self) -> &[CalendarEvent];
}

/// An in-memory event collection supplied wholesale.
#[derive(Debug, Clone, Default)]
pub struct StaticEventSource {
    events: Vec<CalendarEvent>,
}

impl StaticEventSource {
    #[must_use]
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self { events }
    }
}

impl EventSource for StaticEventSource {
    fn events(&self) -> &[CalendarEvent] {
        &self.events
    }
}
