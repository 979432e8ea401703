//! Full-pipeline tests over the October 2025 sample surface: a week of
//! timed events, all-day banners, and a four-way overlapping cluster.

use chrono::NaiveDate;
use koyomi_core::clock::FixedClock;
use koyomi_core::config::LayoutSettings;
use koyomi_core::event::{CalendarEvent, ColorTag};
use koyomi_core::types::{ViewMode, WeekStart};
use koyomi_layout::view::CalendarView;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
}

fn timed(title: &str, d: u32, start: (u32, u32), end: (u32, u32), color: &str) -> CalendarEvent {
    CalendarEvent::timed(
        title,
        date(d).and_hms_opt(start.0, start.1, 0).unwrap(),
        date(d).and_hms_opt(end.0, end.1, 0).unwrap(),
        ColorTag::new(color),
    )
}

/// A week of October 2025 fixtures: one lecture, two banners, and a
/// quadruple booking on Friday.
fn sample_events() -> Vec<CalendarEvent> {
    vec![
        timed("Philosophy", 6, (13, 0), (14, 30), "#0095ffff")
            .with_description("Video call link: https://meet.google.com/ich-hjrb-rpq"),
        CalendarEvent::all_day("Create your first Website", date(6), ColorTag::new("#ff0026ff")),
        CalendarEvent::all_day("Robotics", date(7), ColorTag::new("#ff4d00ff")),
        timed("UI", 10, (11, 0), (12, 30), "#ff6600ff"),
        timed("UX", 10, (11, 0), (12, 30), "#0400ffff"),
        timed("AU", 10, (11, 0), (12, 30), "#ff0f0fff"),
        timed("EE", 10, (11, 0), (12, 30), "#02a21dff"),
    ]
}

fn clock() -> FixedClock {
    FixedClock(date(6).and_hms_opt(12, 3, 0).unwrap())
}

#[test_log::test]
fn week_surface_packs_the_sample_collection() {
    let events = sample_events();
    let view = CalendarView::new(ViewMode::Week, &clock());
    let surface = view.layout(&events, &LayoutSettings::default());

    assert_eq!(surface.label, "October 2025");
    assert_eq!(surface.days.len(), 7);
    assert_eq!(surface.days[0].day, date(5));

    // Monday: one timed lecture, one banner, nothing packed beside it.
    let monday = &surface.days[1];
    assert_eq!(monday.day_key, "2025-10-06");
    assert_eq!(monday.all_day.len(), 1);
    assert_eq!(monday.all_day[0].title, "Create your first Website");
    assert_eq!(monday.timed.len(), 1);
    assert_eq!(monday.column_count, 1);
    let lecture = &monday.timed[0];
    assert!((lecture.top - 780.0).abs() < f64::EPSILON);
    assert!((lecture.height - 90.0).abs() < f64::EPSILON);

    // Tuesday: banner only, no track placement at all.
    let tuesday = &surface.days[2];
    assert_eq!(tuesday.all_day.len(), 1);
    assert!(tuesday.timed.is_empty());
    assert_eq!(tuesday.column_count, 0);

    // Friday: the 11:00-12:30 quadruple booking fans out into four
    // quarter-width columns, in input order.
    let friday = &surface.days[5];
    assert_eq!(friday.day_key, "2025-10-10");
    assert_eq!(friday.column_count, 4);
    let columns: Vec<usize> = friday.timed.iter().map(|slot| slot.column).collect();
    assert_eq!(columns, [0, 1, 2, 3]);
    for slot in &friday.timed {
        assert!((slot.width_fraction() - 0.25).abs() < f64::EPSILON);
        assert!((slot.top - 660.0).abs() < f64::EPSILON);
        assert!((slot.height - 90.0).abs() < f64::EPSILON);
    }
    let titles: Vec<&str> = friday.timed.iter().map(|slot| slot.event.title.as_str()).collect();
    assert_eq!(titles, ["UI", "UX", "AU", "EE"]);

    // Color tags ride through untouched.
    assert_eq!(friday.timed[1].event.color.as_str(), "#0400ffff");

    // The clock reads 12:03 on the anchor day.
    assert!((surface.now_indicator.unwrap() - 723.0).abs() < f64::EPSILON);
}

#[test_log::test]
fn month_surface_buckets_every_sample_event() {
    let events = sample_events();
    let mut view = CalendarView::new(ViewMode::Month, &clock());
    let surface = view.layout(&events, &LayoutSettings::default());

    assert_eq!(surface.label, "October 2025");
    assert_eq!(surface.days.len(), 31);

    let busy: Vec<&str> = surface
        .days
        .iter()
        .filter(|day| !day.all_day.is_empty() || !day.timed.is_empty())
        .map(|day| day.day_key.as_str())
        .collect();
    assert_eq!(busy, ["2025-10-06", "2025-10-07", "2025-10-10"]);

    // Shifting a month forward empties the surface; empty days are a
    // normal state, not an error.
    view.shift(1);
    let surface = view.layout(&events, &LayoutSettings::default());
    assert_eq!(surface.label, "November 2025");
    assert!(surface
        .days
        .iter()
        .all(|day| day.all_day.is_empty() && day.timed.is_empty()));
    assert!(surface.now_indicator.is_none());
}

#[test_log::test]
fn malformed_event_still_yields_a_renderable_surface() {
    let backwards = timed("Inverted", 6, (15, 0), (14, 0), "#9c27b0");
    assert!(backwards.validate().is_err());

    let events = vec![backwards];
    let view = CalendarView::new(ViewMode::Day, &clock());
    let surface = view.layout(&events, &LayoutSettings::default());

    let day = &surface.days[0];
    assert_eq!(day.timed.len(), 1);
    // Clamped to one minute's height rather than a degenerate region.
    assert!(day.timed[0].height > 0.0);
    assert!((day.timed[0].height - 1.0).abs() < f64::EPSILON);
}

#[test_log::test]
fn go_to_today_realigns_with_the_injected_clock() {
    let opening = clock();
    let mut view = CalendarView::new(ViewMode::Week, &opening);
    view.shift(-1);
    view.shift(-1);
    view.set_mode(ViewMode::Month);

    let later = FixedClock(date(20).and_hms_opt(9, 0, 0).unwrap());
    view.go_to_today(&later);
    assert_eq!(view.anchor(), date(20));
    assert_eq!(view.mode(), ViewMode::Month);
}

#[test_log::test]
fn monday_start_weeks_reframe_the_same_events() {
    let events = sample_events();
    let settings = LayoutSettings {
        week_starts_on: WeekStart::Monday,
        ..LayoutSettings::default()
    };
    let view = CalendarView::new(ViewMode::Week, &clock());
    let surface = view.layout(&events, &settings);

    // Monday the 6th leads the frame; Friday's cluster is still intact.
    assert_eq!(surface.days[0].day, date(6));
    assert_eq!(surface.days[4].day, date(10));
    assert_eq!(surface.days[4].column_count, 4);
}
