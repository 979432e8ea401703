//! Pure calendar-grid math for day/week/month frames.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime};
use koyomi_core::types::{ViewMode, WeekStart};

/// Canonical `YYYY-MM-DD` key for a date.
///
/// Two values are "the same day" iff their keys compare equal. This is the
/// only day-equality rule in the engine; callers must never compare full
/// timestamps for day bucketing, since that would incorporate time-of-day.
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Day-equality for wall-clock timestamps, per the key rule.
///
/// Dropping to the date component is exactly key equality, without the
/// string round trip.
#[must_use]
pub fn same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// Month grid cells for the month containing `date`.
///
/// Leading `None` slots pad out the 1st-of-month's weekday offset under the
/// configured week start, followed by one `Some` cell per real day of the
/// month. No trailing padding. Pure in `(year, month, week_start)`.
#[must_use]
pub fn month_cells(date: NaiveDate, week_start: WeekStart) -> Vec<Option<NaiveDate>> {
    let first = first_of_month(date);
    let offset = week_start.offset_from_start(first.weekday());
    let len = days_in_month(first);

    let mut cells: Vec<Option<NaiveDate>> = Vec::new();
    for _ in 0..offset {
        cells.push(None);
    }
    for i in 0..u64::from(len) {
        if let Some(day) = first.checked_add_days(Days::new(i)) {
            cells.push(Some(day));
        }
    }
    cells
}

/// The seven days of the week containing `date`, starting at `week_start`.
#[must_use]
pub fn week_days(date: NaiveDate, week_start: WeekStart) -> [NaiveDate; 7] {
    let back = u64::from(week_start.offset_from_start(date.weekday()));
    let start = date.checked_sub_days(Days::new(back)).unwrap_or(date);
    let mut day = start;
    std::array::from_fn(|_| {
        let current = day;
        day = day.succ_opt().unwrap_or(day);
        current
    })
}

/// Moves the anchor one frame in `direction`: a day, a week, or a month.
///
/// Month arithmetic clamps the day-of-month to the last valid day of the
/// target month, so Jan 31 shifted forward lands on Feb 28/29 rather than
/// rolling over into March.
#[must_use]
pub fn shift_anchor(date: NaiveDate, mode: ViewMode, direction: i32) -> NaiveDate {
    let shifted = match mode {
        ViewMode::Day => add_days_signed(date, i64::from(direction)),
        ViewMode::Week => add_days_signed(date, i64::from(direction) * 7),
        ViewMode::Month => {
            let months = Months::new(direction.unsigned_abs());
            if direction >= 0 {
                date.checked_add_months(months)
            } else {
                date.checked_sub_months(months)
            }
        }
    };
    // Saturate at the calendar's representable bounds.
    shifted.unwrap_or(date)
}

fn add_days_signed(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month.
    date.with_day(1).unwrap_or(date)
}

fn days_in_month(first: NaiveDate) -> u32 {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map_or(28, |last| last.day())
}
