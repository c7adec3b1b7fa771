// Day module
// A single grid day and the 7-day week presented together in one row

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of day columns in one week row.
pub const DAYS_PER_WEEK: usize = 7;

/// One calendar date together with its column index (0-6) within the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    pub index: usize,
}

/// An ordered sequence of exactly seven days, the unit one layout pass
/// operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    days: [Day; DAYS_PER_WEEK],
}

impl Week {
    /// Build a week from its first date; the remaining six days follow
    /// consecutively.
    pub fn starting(first_day: NaiveDate) -> Self {
        let mut days = [Day {
            date: first_day,
            index: 0,
        }; DAYS_PER_WEEK];
        for (index, day) in days.iter_mut().enumerate() {
            day.date = first_day + Duration::days(index as i64);
            day.index = index;
        }
        Self { days }
    }

    /// Build a week from seven explicit dates, indexed in the order given.
    pub fn from_dates(dates: [NaiveDate; DAYS_PER_WEEK]) -> Self {
        let mut days = [Day {
            date: dates[0],
            index: 0,
        }; DAYS_PER_WEEK];
        for (index, day) in days.iter_mut().enumerate() {
            day.date = dates[index];
            day.index = index;
        }
        Self { days }
    }

    pub fn days(&self) -> &[Day; DAYS_PER_WEEK] {
        &self.days
    }

    pub fn first_date(&self) -> NaiveDate {
        self.days[0].date
    }

    pub fn last_date(&self) -> NaiveDate {
        self.days[DAYS_PER_WEEK - 1].date
    }

    /// Column index of the day matching `date`, if it belongs to this week.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.days.iter().find(|day| day.date == date).map(|day| day.index)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.index_of(date).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    #[test]
    fn test_starting_builds_consecutive_days() {
        let week = Week::starting(monday());
        assert_eq!(week.first_date(), monday());
        assert_eq!(week.last_date(), NaiveDate::from_ymd_opt(2026, 1, 11).unwrap());
        for (i, day) in week.days().iter().enumerate() {
            assert_eq!(day.index, i);
            assert_eq!(day.date, monday() + Duration::days(i as i64));
        }
    }

    #[test]
    fn test_index_of_member_date() {
        let week = Week::starting(monday());
        let wednesday = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
        assert_eq!(week.index_of(wednesday), Some(2));
    }

    #[test]
    fn test_index_of_outside_date() {
        let week = Week::starting(monday());
        let next_monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        assert_eq!(week.index_of(next_monday), None);
        assert!(!week.contains(next_monday));
    }

    #[test]
    fn test_from_dates_keeps_given_order() {
        // A week does not have to start on a fixed weekday.
        let sunday = NaiveDate::from_ymd_opt(2026, 1, 4).unwrap();
        let week = Week::from_dates([
            sunday,
            sunday + Duration::days(1),
            sunday + Duration::days(2),
            sunday + Duration::days(3),
            sunday + Duration::days(4),
            sunday + Duration::days(5),
            sunday + Duration::days(6),
        ]);
        assert_eq!(week.index_of(sunday), Some(0));
        assert_eq!(week.index_of(sunday + Duration::days(6)), Some(6));
    }
}
