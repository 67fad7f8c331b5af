use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DailyRecord, HourlyRecord};
use crate::error::{DashboardError, Result};
use crate::utils::dates::parse_date;

/// Inclusive date interval. `start > end` is allowed and selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse `"YYYY-MM-DD YYYY-MM-DD"` (comma or whitespace separated).
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();

        if parts.len() != 2 {
            return Err(DashboardError::InvalidFormat(format!(
                "Expected 'START END', got '{}'",
                input.trim()
            )));
        }

        Ok(Self::new(parse_date(parts[0])?, parse_date(parts[1])?))
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn covers(&self, other: &DateRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Intersection; disjoint ranges yield an empty range.
    pub fn intersect(&self, other: &DateRange) -> DateRange {
        DateRange::new(self.start.max(other.start), self.end.min(other.end))
    }

    pub fn num_days(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            self.end.signed_duration_since(self.start).num_days() + 1
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Both tables as loaded and normalized. Read-only after loading.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub hourly: Vec<HourlyRecord>,
    pub daily: Vec<DailyRecord>,
}

impl Dataset {
    pub fn new(hourly: Vec<HourlyRecord>, daily: Vec<DailyRecord>) -> Self {
        Self { hourly, daily }
    }

    /// Span of the daily table, which bounds the date-range control.
    pub fn date_span(&self) -> Option<DateRange> {
        let min = self.daily.iter().map(|r| r.date).min()?;
        let max = self.daily.iter().map(|r| r.date).max()?;
        Some(DateRange::new(min, max))
    }

    pub fn is_empty(&self) -> bool {
        self.hourly.is_empty() && self.daily.is_empty()
    }
}

/// Rows of both tables inside one date range. Owned copies of the source rows.
#[derive(Debug, Clone)]
pub struct FilteredView {
    pub range: DateRange,
    pub hourly: Vec<HourlyRecord>,
    pub daily: Vec<DailyRecord>,
}

impl FilteredView {
    pub fn empty(range: DateRange) -> Self {
        Self {
            range,
            hourly: Vec::new(),
            daily: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hourly.is_empty() && self.daily.is_empty()
    }

    pub fn require_hourly(&self) -> Result<&[HourlyRecord]> {
        if self.hourly.is_empty() {
            return Err(DashboardError::EmptySelection {
                start: self.range.start,
                end: self.range.end,
            });
        }
        Ok(&self.hourly)
    }

    pub fn require_daily(&self) -> Result<&[DailyRecord]> {
        if self.daily.is_empty() {
            return Err(DashboardError::EmptySelection {
                start: self.range.start,
                end: self.range.end,
            });
        }
        Ok(&self.daily)
    }
}
