//! Inclusive calendar-day ranges used by every report filter.
//!
//! Bounds are dates, records carry timestamps. A timestamp `t` falls inside
//! `[start, end]` when `start 00:00 UTC <= t < (end + 1 day) 00:00 UTC`, so
//! both bounds include the whole day.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Echo of the requested range, included in reports for traceability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// No bounds at all.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self::new(Some(day), Some(day))
    }

    /// The `days`-long window ending on (and including) `last_day`.
    pub fn trailing_days(last_day: NaiveDate, days: u64) -> Self {
        let first_day = last_day
            .checked_sub_days(Days::new(days.saturating_sub(1)))
            .unwrap_or(NaiveDate::MIN);
        Self::new(Some(first_day), Some(last_day))
    }

    pub fn is_bounded(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Lower bound as an inclusive timestamp.
    pub fn lower(&self) -> Option<DateTime<Utc>> {
        self.start.map(start_of_day)
    }

    /// Upper bound as an exclusive timestamp (midnight after `end`).
    pub fn upper(&self) -> Option<DateTime<Utc>> {
        self.end.map(|end| match end.checked_add_days(Days::new(1)) {
            Some(next) => start_of_day(next),
            None => DateTime::<Utc>::MAX_UTC,
        })
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.lower().map_or(true, |lower| at >= lower)
            && self.upper().map_or(true, |upper| at < upper)
    }

    /// `None` counts as outside a bounded range and inside an unbounded one.
    pub fn contains_opt(&self, at: Option<DateTime<Utc>>) -> bool {
        match at {
            Some(at) => self.contains(at),
            None => !self.is_bounded(),
        }
    }

    pub fn period(&self) -> ReportPeriod {
        ReportPeriod {
            start_date: self.start.map(|d| d.format("%Y-%m-%d").to_string()),
            end_date: self.end.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

fn start_of_day(day: NaiveDate) -> DateTime<Utc> {
    day.and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
