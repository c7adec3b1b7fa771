// Date interval collision detection for row packing

use chrono::NaiveDate;

/// A date range with inclusive endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateInterval {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "interval endpoints out of order");
        Self { start, end }
    }

    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn contains(&self, other: &DateInterval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// Whether two inclusive date intervals occupy overlapping grid space.
///
/// Intervals collide when one contains the other, when they share any
/// endpoint, or when they partially overlap in either direction. Touching
/// boundaries count as a collision, so events meeting on the same day can
/// never share a row.
pub fn collides(first: &DateInterval, second: &DateInterval) -> bool {
    if first.contains(second) || second.contains(first) {
        true
    } else if first.start == second.start
        || first.start == second.end
        || first.end == second.start
        || first.end == second.end
    {
        true
    } else if first.start < second.start && first.end > second.start {
        true
    } else {
        first.end > second.end && first.start < second.end
    }
}
