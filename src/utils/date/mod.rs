// Date utility functions

use chrono::{Duration, NaiveDate};

/// Inclusive iterator over the dates from `start` through `end`.
/// Empty when `end < start`.
pub fn dates_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let count = (end - start).num_days() + 1;
    (0..count.max(0)).map(move |offset| start + Duration::days(offset))
}

/// True when the inclusive ranges `[a_start, a_end]` and `[b_start, b_end]`
/// share at least one date.
pub fn ranges_intersect(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start <= b_end && b_start <= a_end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    #[test]
    fn test_dates_inclusive_counts_both_ends() {
        let dates: Vec<NaiveDate> = dates_inclusive(date(5), date(8)).collect();
        assert_eq!(dates, vec![date(5), date(6), date(7), date(8)]);
    }

    #[test]
    fn test_dates_inclusive_single_day() {
        let dates: Vec<NaiveDate> = dates_inclusive(date(5), date(5)).collect();
        assert_eq!(dates, vec![date(5)]);
    }

    #[test]
    fn test_dates_inclusive_empty_when_reversed() {
        assert_eq!(dates_inclusive(date(8), date(5)).count(), 0);
    }

    #[test]
    fn test_ranges_intersect_touching() {
        assert!(ranges_intersect(date(1), date(5), date(5), date(9)));
    }

    #[test]
    fn test_ranges_intersect_disjoint() {
        assert!(!ranges_intersect(date(1), date(4), date(5), date(9)));
    }
}
