// Segmenter service
// Clips events to one week, producing the segments the layout pass consumes

use crate::models::day::Week;
use crate::models::event::OriginalEvent;
use crate::models::segment::EventSegment;
use crate::utils::date::{dates_inclusive, ranges_intersect};

/// Clip `events` to the given week.
///
/// Events not touching the week yield nothing. A single-day event inside
/// the week yields one `Single` segment. A multi-day event yields one
/// segment per day it occupies within the week: `Original` on its true
/// first day, `Continuation` on every other day. Output order follows the
/// caller's event order, then date order within each event, so a stably
/// ordered event list gives a reproducible layout.
pub fn segments_for_week(week: &Week, events: &[OriginalEvent]) -> Vec<EventSegment> {
    let week_start = week.first_date();
    let week_end = week.last_date();
    let mut segments = Vec::new();

    for event in events {
        if !ranges_intersect(event.start, event.end, week_start, week_end) {
            continue;
        }

        if event.is_single_day() {
            segments.push(EventSegment::Single(event.clone()));
            continue;
        }

        let first_day = event.start.max(week_start);
        let last_day = event.end.min(week_end);
        for date in dates_inclusive(first_day, last_day) {
            if date == event.start {
                segments.push(EventSegment::Original(event.clone()));
            } else {
                segments.push(EventSegment::Continuation {
                    date,
                    original: event.clone(),
                });
            }
        }
    }

    log::trace!(
        "week of {week_start}: clipped {} events into {} segments",
        events.len(),
        segments.len()
    );

    segments
}
