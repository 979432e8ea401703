//! View state and the full layout pipeline.
//!
//! `CalendarView` is the sole owner of the mutable view state (anchor date,
//! view mode, live "now" sample). Everything it hands out is derived and
//! recomputed per render pass.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use koyomi_core::clock::Clock;
use koyomi_core::config::LayoutSettings;
use koyomi_core::event::CalendarEvent;
use koyomi_core::types::{ViewMode, WeekStart};

use crate::{grid, index, pack, track};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Final renderer tuple for one timed event.
#[derive(Debug, Clone)]
pub struct LayoutedEvent<'a> {
    pub event: &'a CalendarEvent,
    pub day_key: String,
    pub top: f64,
    pub height: f64,
    pub column: usize,
    pub column_count: usize,
}

impl LayoutedEvent<'_> {
    /// Fractional width of this event's slot, `1 / column_count`.
    #[must_use]
    pub fn width_fraction(&self) -> f64 {
        if self.column_count == 0 {
            1.0
        } else {
            fraction(1, self.column_count)
        }
    }

    /// Fractional horizontal offset, `column / column_count`.
    #[must_use]
    pub fn left_fraction(&self) -> f64 {
        if self.column_count == 0 {
            0.0
        } else {
            fraction(self.column, self.column_count)
        }
    }
}

/// One visible day, renderer-ready.
#[derive(Debug, Clone)]
pub struct DayLayout<'a> {
    pub day: NaiveDate,
    pub day_key: String,
    /// Banner events in input order; not packed, not on the track.
    pub all_day: Vec<&'a CalendarEvent>,
    pub timed: Vec<LayoutedEvent<'a>>,
    pub column_count: usize,
}

/// The whole visible surface for one view state.
#[derive(Debug, Clone)]
pub struct SurfaceLayout<'a> {
    pub label: String,
    pub days: Vec<DayLayout<'a>>,
    /// Offset of the live time indicator on the anchor day's track, when
    /// visible there.
    pub now_indicator: Option<f64>,
}

/// Mutable view state: anchor date, view mode, and the live "now" sample.
#[derive(Debug, Clone)]
pub struct CalendarView {
    anchor: NaiveDate,
    mode: ViewMode,
    now: NaiveDateTime,
}

impl CalendarView {
    /// Opens the surface on today per the injected clock.
    #[must_use]
    pub fn new(mode: ViewMode, clock: &dyn Clock) -> Self {
        let now = clock.now();
        Self {
            anchor: now.date(),
            mode,
            now,
        }
    }

    #[must_use]
    pub const fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    #[must_use]
    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    #[must_use]
    pub const fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Re-anchors on the live "today" without changing the view mode.
    pub fn go_to_today(&mut self, clock: &dyn Clock) {
        self.now = clock.now();
        self.anchor = self.now.date();
        tracing::debug!(anchor = %self.anchor, mode = %self.mode, "jumped to today");
    }

    /// Moves one frame backward or forward (`direction` in -1/+1).
    pub fn shift(&mut self, direction: i32) {
        self.anchor = grid::shift_anchor(self.anchor, self.mode, direction);
        tracing::debug!(anchor = %self.anchor, direction, "shifted anchor");
    }

    /// Switches the frame; every mode is reachable from every other.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Absorbs a fresh "now" sample from the periodic tick.
    pub fn tick(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    /// The real days of the currently visible frame, in order.
    #[must_use]
    pub fn visible_days(&self, week_start: WeekStart) -> Vec<NaiveDate> {
        match self.mode {
            ViewMode::Day => vec![self.anchor],
            ViewMode::Week => grid::week_days(self.anchor, week_start).to_vec(),
            ViewMode::Month => grid::month_cells(self.anchor, week_start)
                .into_iter()
                .flatten()
                .collect(),
        }
    }

    /// Human-readable header for the visible frame.
    ///
    /// Week view names both months when the week straddles a month
    /// boundary.
    #[must_use]
    pub fn display_label(&self, week_start: WeekStart) -> String {
        match self.mode {
            ViewMode::Day => format!(
                "{}, {} {}, {}",
                weekday_name(self.anchor),
                month_name(self.anchor),
                self.anchor.day(),
                self.anchor.year()
            ),
            ViewMode::Week => {
                let week = grid::week_days(self.anchor, week_start);
                let (first, last) = (week[0], week[6]);
                if first.month() == last.month() {
                    format!("{} {}", month_name(first), first.year())
                } else {
                    format!(
                        "{} - {} {}",
                        month_name(first),
                        month_name(last),
                        last.year()
                    )
                }
            }
            ViewMode::Month => format!("{} {}", month_name(self.anchor), self.anchor.year()),
        }
    }

    /// Runs the full pipeline for the current state: visible days, per-day
    /// all-day/timed split, track placement, and column packing.
    #[must_use]
    pub fn layout<'a>(
        &self,
        events: &'a [CalendarEvent],
        settings: &LayoutSettings,
    ) -> SurfaceLayout<'a> {
        let days = self
            .visible_days(settings.week_starts_on)
            .into_iter()
            .map(|day| layout_day(day, events, settings))
            .collect();

        SurfaceLayout {
            label: self.display_label(settings.week_starts_on),
            days,
            now_indicator: track::now_indicator_offset(self.now, self.anchor, settings),
        }
    }
}

fn layout_day<'a>(
    day: NaiveDate,
    events: &'a [CalendarEvent],
    settings: &LayoutSettings,
) -> DayLayout<'a> {
    let all_day = index::all_day_on_day(day, events);
    let timed = index::timed_on_day(day, events);
    let packed = pack::pack_columns(&timed, settings);
    let day_key = grid::date_key(day);

    let column_count = packed.column_count;
    let timed = packed
        .events
        .into_iter()
        .map(|slot| LayoutedEvent {
            event: slot.event,
            day_key: day_key.clone(),
            top: slot.position.top,
            height: slot.position.height,
            column: slot.column,
            column_count,
        })
        .collect();

    DayLayout {
        day,
        day_key,
        all_day,
        timed,
        column_count,
    }
}

fn month_name(date: NaiveDate) -> &'static str {
    let idx = usize::try_from(date.month0()).unwrap_or_default();
    MONTH_NAMES.get(idx).copied().unwrap_or("")
}

fn weekday_name(date: NaiveDate) -> &'static str {
    let idx = usize::try_from(date.weekday().num_days_from_sunday()).unwrap_or_default();
    WEEKDAY_NAMES.get(idx).copied().unwrap_or("")
}

#[expect(
    clippy::cast_precision_loss,
    reason = "column indices and counts are tiny compared to f64's exact integer range"
)]
fn fraction(numerator: usize, denominator: usize) -> f64 {
    numerator as f64 / denominator as f64
}
