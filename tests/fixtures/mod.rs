// Test fixtures - reusable test data
// Provides consistent weeks and events across integration tests

use chrono::NaiveDate;
use weekgrid::{OriginalEvent, Week};

/// Sample dates and weeks for testing
pub mod dates {
    use super::*;

    /// Returns Jan 5 2026, a Monday
    pub fn monday_jan_5_2026() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    /// The week of Monday Jan 5 2026 through Sunday Jan 11
    pub fn week_of_jan_5() -> Week {
        Week::starting(monday_jan_5_2026())
    }

    /// The following week, Monday Jan 12 through Sunday Jan 18
    pub fn week_of_jan_12() -> Week {
        Week::starting(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap())
    }

    pub fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, day).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// One-day event on the given January 2026 day
    pub fn one_day(id: i64, day: u32) -> OriginalEvent {
        OriginalEvent::single_day(id, format!("event-{id}"), dates::jan(day)).unwrap()
    }

    /// Multi-day event across the given January 2026 days, inclusive
    pub fn multi_day(id: i64, start: u32, end: u32) -> OriginalEvent {
        OriginalEvent::new(id, format!("event-{id}"), dates::jan(start), dates::jan(end)).unwrap()
    }

    /// Nine-day conference straddling both sample weeks (Jan 8-16)
    pub fn straddling_conference() -> OriginalEvent {
        OriginalEvent::new(100, "Conference", dates::jan(8), dates::jan(16)).unwrap()
    }
}
