//! Vertical placement of timed events on the hour-scaled track.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use koyomi_core::config::LayoutSettings;
use koyomi_core::event::CalendarEvent;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Vertical interval of one event on the track, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPosition {
    pub top: f64,
    pub height: f64,
}

impl TrackPosition {
    /// Half-open interval end, `top + height`.
    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}

/// Minutes elapsed since the track's first hour.
///
/// Negative when the clock time falls before the track start; preserved so
/// such events render above the visible track rather than being silently
/// relocated.
#[must_use]
pub fn minutes_from_track_start(time: NaiveTime, track_start_hour: u32) -> i64 {
    (i64::from(time.hour()) - i64::from(track_start_hour)) * 60 + i64::from(time.minute())
}

/// Maps an event's start/end clock times onto the track.
///
/// A timed event whose end does not lie after its start would produce a
/// degenerate region; its height is clamped to one minute's worth and the
/// event is reported through a warning instead of failing the layout.
#[must_use]
pub fn position(event: &CalendarEvent, settings: &LayoutSettings) -> TrackPosition {
    let start = minutes_from_track_start(event.start.time(), settings.track_start_hour);
    let end = minutes_from_track_start(event.end.time(), settings.track_start_hour);
    let duration = end - start;

    let minute_height = settings.hour_height_px / MINUTES_PER_HOUR;
    let height = if duration > 0 {
        minutes_to_px(duration, minute_height)
    } else {
        tracing::warn!(
            event = %event.id,
            start = %event.start,
            end = %event.end,
            "timed event ends at or before its start; clamping to minimum height"
        );
        minute_height
    };

    TrackPosition {
        top: minutes_to_px(start, minute_height),
        height,
    }
}

/// Vertical offset of the live "now" indicator on `anchor_day`'s track.
///
/// `None` when the indicator is disabled or `now` does not fall on the
/// anchor day; callers never see an off-screen sentinel offset.
#[must_use]
pub fn now_indicator_offset(
    now: NaiveDateTime,
    anchor_day: NaiveDate,
    settings: &LayoutSettings,
) -> Option<f64> {
    if !settings.show_live_time_indicator || now.date() != anchor_day {
        return None;
    }
    let minutes = minutes_from_track_start(now.time(), settings.track_start_hour);
    Some(minutes_to_px(
        minutes,
        settings.hour_height_px / MINUTES_PER_HOUR,
    ))
}

#[expect(
    clippy::cast_precision_loss,
    reason = "minute counts within a day are far below f64's exact integer range"
)]
fn minutes_to_px(minutes: i64, minute_height: f64) -> f64 {
    minutes as f64 * minute_height
}
