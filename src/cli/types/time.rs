//! Time-related types: seasons and date ranges.

use crate::error::{Result, StatsError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for season years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}

/// Inclusive date range used by the schedule resolver and the aggregators.
///
/// Winter-league seasons straddle the calendar year, so both bounds are
/// explicit dates rather than a single year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_date_range_contains_bounds() {
        let range = DateRange::new(d("2024-10-01"), d("2025-01-25"));
        assert!(range.contains(d("2024-10-01")));
        assert!(range.contains(d("2024-12-15")));
        assert!(range.contains(d("2025-01-25")));
        assert!(!range.contains(d("2024-09-30")));
        assert!(!range.contains(d("2025-01-26")));
    }

    #[test]
    fn test_season_parse_and_display() {
        let season: Season = "2024".parse().unwrap();
        assert_eq!(season.as_u16(), 2024);
        assert_eq!(season.to_string(), "2024");
        assert!("20x4".parse::<Season>().is_err());
    }
}
