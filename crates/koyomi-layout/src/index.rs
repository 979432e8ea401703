//! Event lookup by calendar day over the read-only collection.

use chrono::NaiveDate;
use koyomi_core::event::CalendarEvent;

/// All events starting on `day`, in input-collection order.
///
/// Input order is preserved, not re-sorted; it determines column-assignment
/// priority in the packer. A day with no matches yields an empty vec, which
/// is a normal state rather than an error.
#[must_use]
pub fn events_on_day<'a>(day: NaiveDate, events: &'a [CalendarEvent]) -> Vec<&'a CalendarEvent> {
    events.iter().filter(|event| event.day() == day).collect()
}

/// Timed (non-banner) events on `day`, the packer's input.
#[must_use]
pub fn timed_on_day<'a>(day: NaiveDate, events: &'a [CalendarEvent]) -> Vec<&'a CalendarEvent> {
    events
        .iter()
        .filter(|event| event.is_timed() && event.day() == day)
        .collect()
}

/// All-day banner events on `day`; exempt from track placement and packing.
#[must_use]
pub fn all_day_on_day<'a>(day: NaiveDate, events: &'a [CalendarEvent]) -> Vec<&'a CalendarEvent> {
    events
        .iter()
        .filter(|event| event.all_day && event.day() == day)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use koyomi_core::event::{CalendarEvent, ColorTag};

    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
    }

    fn timed(d: u32, title: &str) -> CalendarEvent {
        CalendarEvent::timed(
            title,
            date(d).and_hms_opt(9, 0, 0).unwrap(),
            date(d).and_hms_opt(10, 0, 0).unwrap(),
            ColorTag::new("#0095ff"),
        )
    }

    #[test]
    fn filters_by_start_day_preserving_order() {
        let events = vec![
            timed(6, "first"),
            timed(7, "other day"),
            timed(6, "second"),
        ];
        let titles: Vec<&str> = events_on_day(date(6), &events)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, ["first", "second"]);
    }

    #[test]
    fn empty_day_is_not_an_error() {
        let events = vec![timed(6, "a")];
        assert!(events_on_day(date(20), &events).is_empty());
        assert!(timed_on_day(date(20), &events).is_empty());
        assert!(all_day_on_day(date(20), &events).is_empty());
    }

    #[test]
    fn splits_timed_from_all_day() {
        let events = vec![
            timed(6, "lecture"),
            CalendarEvent::all_day("workshop", date(6), ColorTag::new("#ff0026")),
        ];
        let timed_titles: Vec<&str> = timed_on_day(date(6), &events)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        let banner_titles: Vec<&str> = all_day_on_day(date(6), &events)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(timed_titles, ["lecture"]);
        assert_eq!(banner_titles, ["workshop"]);
    }
}
