// Segment module
// One week's clipped view of an event, as handed to the layout engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::event::OriginalEvent;

/// A single day's portion of an event within one week.
///
/// Multi-day events arrive as one segment per day they occupy in the week:
/// `Original` on the event's true first day, `Continuation` on every other
/// day. A single-day event arrives as exactly one `Single`. Segments of the
/// same event are recombined by the engine via the original's `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventSegment {
    /// A one-day event (`start == end`), itself the whole event.
    Single(OriginalEvent),
    /// The true first day of a multi-day event, falling in the current week.
    Original(OriginalEvent),
    /// A non-first day of a multi-day event. `original` must be the
    /// multi-day event record it continues, never another slice.
    Continuation {
        date: NaiveDate,
        original: OriginalEvent,
    },
}

impl EventSegment {
    /// The date this segment occupies.
    pub fn date(&self) -> NaiveDate {
        match self {
            EventSegment::Single(event) => event.start,
            EventSegment::Original(event) => event.start,
            EventSegment::Continuation { date, .. } => *date,
        }
    }

    /// The original event this segment belongs to.
    pub fn original(&self) -> &OriginalEvent {
        match self {
            EventSegment::Single(event) => event,
            EventSegment::Original(event) => event,
            EventSegment::Continuation { original, .. } => original,
        }
    }

    pub fn event_id(&self) -> i64 {
        self.original().id
    }
}
