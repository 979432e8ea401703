//! Greedy column packing for concurrent same-day timed events.

use koyomi_core::config::LayoutSettings;
use koyomi_core::event::CalendarEvent;

use crate::track::{self, TrackPosition};

/// One timed event with its resolved track interval and column slot.
#[derive(Debug, Clone, Copy)]
pub struct PackedEvent<'a> {
    pub event: &'a CalendarEvent,
    pub position: TrackPosition,
    pub column: usize,
}

/// All timed events of one day, partitioned into non-overlapping columns.
#[derive(Debug, Clone, Default)]
pub struct PackedDay<'a> {
    pub events: Vec<PackedEvent<'a>>,
    /// Total columns opened for the day. Shared by every event on the day,
    /// even where some columns never collide at a given time slot; a
    /// deliberate simplification, not a true interval-graph coloring.
    pub column_count: usize,
}

impl PackedDay<'_> {
    /// Fractional width of one column, `1 / column_count`.
    #[must_use]
    pub fn width_fraction(&self) -> f64 {
        if self.column_count == 0 {
            1.0
        } else {
            1.0 / count_to_f64(self.column_count)
        }
    }

    /// Fractional horizontal offset of `event`, `column / column_count`.
    #[must_use]
    pub fn left_fraction(&self, event: &PackedEvent<'_>) -> f64 {
        if self.column_count == 0 {
            0.0
        } else {
            count_to_f64(event.column) / count_to_f64(self.column_count)
        }
    }
}

/// Packs `events` into the minimum-by-greedy number of left-to-right
/// columns such that no two events in one column overlap vertically.
///
/// Events are taken in input order (the lookup preserves collection order,
/// which is the priority rule): each is placed into the first existing
/// column none of whose occupants it overlaps, or into a freshly opened
/// column at the end. Two intervals `[a0, a1)` and `[b0, b1)` overlap iff
/// `a0 < b1 && b0 < a1`.
///
/// Always terminates and always places every event; zero input events yield
/// an empty day with a column count of zero. O(n * k) for k columns, fine
/// for the single-digit event counts a day sees in practice.
#[must_use]
pub fn pack_columns<'a>(
    events: &[&'a CalendarEvent],
    settings: &LayoutSettings,
) -> PackedDay<'a> {
    let mut columns: Vec<Vec<TrackPosition>> = Vec::new();
    let mut packed: Vec<PackedEvent<'a>> = Vec::with_capacity(events.len());

    for &event in events {
        let position = track::position(event, settings);
        let column = columns
            .iter()
            .position(|occupants| occupants.iter().all(|other| !overlaps(position, *other)))
            .unwrap_or(columns.len());
        if let Some(occupants) = columns.get_mut(column) {
            occupants.push(position);
        } else {
            columns.push(vec![position]);
        }
        packed.push(PackedEvent {
            event,
            position,
            column,
        });
    }

    PackedDay {
        events: packed,
        column_count: columns.len(),
    }
}

fn overlaps(a: TrackPosition, b: TrackPosition) -> bool {
    a.top < b.bottom() && b.top < a.bottom()
}

#[expect(
    clippy::cast_precision_loss,
    reason = "column counts are tiny compared to f64's exact integer range"
)]
fn count_to_f64(count: usize) -> f64 {
    count as f64
}
