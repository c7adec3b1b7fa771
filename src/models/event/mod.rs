// Event module
// The original (unclipped) event identity that week segments reference

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A logical calendar event, possibly spanning several days.
///
/// This is the identity anchor for layout: per-week segments of the same
/// event all carry the same `id`, which is the join key used to recombine
/// them into one visual item. `end == start` for single-day events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginalEvent {
    pub id: i64,
    pub name: String,
    pub active: bool,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl OriginalEvent {
    /// Create a new event with validation.
    ///
    /// # Arguments
    /// * `id` - Stable identifier, unique per logical event
    /// * `name` - Event name (required, non-empty)
    /// * `start` - First day of the event
    /// * `end` - Last day of the event (inclusive, `>= start`)
    ///
    /// # Returns
    /// Returns `Result<OriginalEvent, String>` with validation
    pub fn new(
        id: i64,
        name: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, String> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err("Event name cannot be empty".to_string());
        }

        if end < start {
            return Err("Event end date must not be before start date".to_string());
        }

        Ok(Self {
            id,
            name,
            active: true,
            start,
            end,
        })
    }

    /// Convenience constructor for a one-day event.
    pub fn single_day(id: i64, name: impl Into<String>, date: NaiveDate) -> Result<Self, String> {
        Self::new(id, name, date, date)
    }

    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Inclusive day count from start to end.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_event_success() {
        let event = OriginalEvent::new(1, "Conference", date(2026, 1, 5), date(2026, 1, 8));
        assert!(event.is_ok());
        let event = event.unwrap();
        assert_eq!(event.name, "Conference");
        assert!(event.active);
        assert!(!event.is_single_day());
        assert_eq!(event.duration_days(), 4);
    }

    #[test]
    fn test_new_event_empty_name() {
        let result = OriginalEvent::new(1, "   ", date(2026, 1, 5), date(2026, 1, 8));
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Event name cannot be empty");
    }

    #[test]
    fn test_new_event_end_before_start() {
        let result = OriginalEvent::new(1, "Backwards", date(2026, 1, 8), date(2026, 1, 5));
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err(),
            "Event end date must not be before start date"
        );
    }

    #[test]
    fn test_single_day_event() {
        let event = OriginalEvent::single_day(2, "Standup", date(2026, 1, 6)).unwrap();
        assert!(event.is_single_day());
        assert_eq!(event.duration_days(), 1);
        assert_eq!(event.start, event.end);
    }
}
