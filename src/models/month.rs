//! Calendar month selection
//!
//! A (year, month) pair is the unit every dashboard page is scoped to.
//! Navigation wraps the year at the Dec/Jan boundary in both directions.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Month names for friendly formatting
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar (year, month) pair
///
/// `month` is 1-12. Transitions are always computed internally via
/// [`next`](Self::next)/[`prev`](Self::prev), so values stay in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchoolMonth {
    pub year: i32,
    pub month: u32,
}

impl SchoolMonth {
    /// Create a month from a (year, month) pair
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self { year, month }
    }

    /// The month containing today
    pub fn current() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    /// The month containing a specific date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The following month, rolling the year over after December
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month, rolling the year back before January
    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// First day of the month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(self.year, 1, 1).unwrap())
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.next().start_date() - Duration::days(1)
    }

    /// Check if a date falls within this month
    ///
    /// Exact calendar-month match, not a rolling 30-day window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The month's English name ("January")
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Friendly label, e.g. "January 2026"
    pub fn title(&self) -> String {
        format!("{} {}", self.name(), self.year)
    }

    /// The last `count` months ending with this one, in chronological order
    pub fn trailing(self, count: usize) -> Vec<Self> {
        let mut months = Vec::with_capacity(count);
        let mut current = self;

        for _ in 0..count {
            months.push(current);
            current = current.prev();
        }

        months.reverse();
        months
    }
}

impl fmt::Display for SchoolMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Ord for SchoolMonth {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl PartialOrd for SchoolMonth {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_rolls_year_after_december() {
        let dec = SchoolMonth::new(2025, 12);
        assert_eq!(dec.next(), SchoolMonth::new(2026, 1));

        let jun = SchoolMonth::new(2025, 6);
        assert_eq!(jun.next(), SchoolMonth::new(2025, 7));
    }

    #[test]
    fn test_prev_rolls_year_before_january() {
        let jan = SchoolMonth::new(2026, 1);
        assert_eq!(jan.prev(), SchoolMonth::new(2025, 12));

        let jun = SchoolMonth::new(2025, 6);
        assert_eq!(jun.prev(), SchoolMonth::new(2025, 5));
    }

    #[test]
    fn test_next_prev_are_inverse() {
        let month = SchoolMonth::new(2025, 12);
        assert_eq!(month.next().prev(), month);
        assert_eq!(month.prev().next(), month);
    }

    #[test]
    fn test_date_range() {
        let feb = SchoolMonth::new(2025, 2);
        assert_eq!(
            feb.start_date(),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
        );
        assert_eq!(feb.end_date(), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());

        // Leap year
        let feb_leap = SchoolMonth::new(2024, 2);
        assert_eq!(
            feb_leap.end_date(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_contains() {
        let jan = SchoolMonth::new(2025, 1);
        assert!(jan.contains(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()));
        assert!(!jan.contains(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()));
        assert!(!jan.contains(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
    }

    #[test]
    fn test_title() {
        assert_eq!(SchoolMonth::new(2026, 8).title(), "August 2026");
        assert_eq!(format!("{}", SchoolMonth::new(2026, 8)), "2026-08");
    }

    #[test]
    fn test_trailing_is_chronological() {
        let months = SchoolMonth::new(2026, 2).trailing(4);
        assert_eq!(
            months,
            vec![
                SchoolMonth::new(2025, 11),
                SchoolMonth::new(2025, 12),
                SchoolMonth::new(2026, 1),
                SchoolMonth::new(2026, 2),
            ]
        );
    }

    #[test]
    fn test_ordering() {
        assert!(SchoolMonth::new(2025, 12) < SchoolMonth::new(2026, 1));
        assert!(SchoolMonth::new(2026, 2) > SchoolMonth::new(2026, 1));
    }
}
