//! A static October 2025 sample collection for the demo binary.

use chrono::NaiveDate;
use koyomi_core::event::{CalendarEvent, ColorTag, StaticEventSource};

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, d).unwrap_or_default()
}

fn timed(title: &str, d: u32, start: (u32, u32), end: (u32, u32), color: &str) -> CalendarEvent {
    let day = date(d);
    CalendarEvent::timed(
        title,
        day.and_hms_opt(start.0, start.1, 0).unwrap_or_default(),
        day.and_hms_opt(end.0, end.1, 0).unwrap_or_default(),
        ColorTag::new(color),
    )
}

/// Events supplied wholesale by the demo's stand-in data source.
#[must_use]
pub fn sample_source() -> StaticEventSource {
    StaticEventSource::new(vec![
        timed("Philosophy", 6, (13, 0), (14, 30), "#0095ffff")
            .with_description("Video call link: https://meet.google.com/ich-hjrb-rpq"),
        CalendarEvent::all_day(
            "Create your first Website",
            date(6),
            ColorTag::new("#ff0026ff"),
        ),
        CalendarEvent::all_day("Robotics", date(7), ColorTag::new("#ff4d00ff")),
        timed("UI", 10, (11, 0), (12, 30), "#ff6600ff")
            .with_description("Video call link: https://meet.google.com/ich-hjrb-rpq"),
        timed("UX", 10, (11, 0), (12, 30), "#0400ffff").with_description("Video"),
        CalendarEvent::all_day("Mobile", date(7), ColorTag::new("#166fff98")),
        timed("AU", 10, (11, 0), (12, 30), "#ff0f0fff").with_description("Video"),
        timed("EE", 10, (11, 0), (12, 30), "#02a21dff").with_description("Video"),
        timed("Meeting 1", 13, (9, 0), (10, 30), "#ff0b0bff").with_description("Video"),
        timed("Team Sync", 13, (14, 0), (15, 30), "#4CAF50").with_description("Video"),
        timed("Project Review", 13, (11, 0), (12, 30), "#9C27B0").with_description("Video"),
    ])
}

#[cfg(test)]
mod tests {
    use koyomi_core::event::EventSource;

    use super::*;

    #[test]
    fn sample_events_are_well_formed() {
        let source = sample_source();
        assert!(!source.events().is_empty());
        for event in source.events() {
            assert!(event.validate().is_ok(), "{}", event.title);
        }
    }
}
