//! Fixed-vocabulary count breakdowns.
//!
//! Every breakdown serializes with all of its keys, zero-seeded, in
//! vocabulary order. Values outside the vocabulary are never folded in: the
//! callers count them separately and report them next to the breakdown.

use serde::{Deserialize, Serialize};

use crate::common::GroupCount;
use crate::domains::appeals::{AppealPriority, AppealStatus};
use crate::domains::content::{ContentStatus, ContentType};

pub trait Breakdown: Default {
    /// Counter for `key`, or `None` when `key` is outside the vocabulary.
    fn slot(&mut self, key: &str) -> Option<&mut i64>;

    /// Key used for NULL group keys; `None` means NULL is unrecognized.
    fn null_key() -> Option<&'static str> {
        None
    }

    /// Add `n` to `key`. Returns `false` (and changes nothing) for unknown keys.
    fn record(&mut self, key: &str, n: i64) -> bool {
        match self.slot(key) {
            Some(count) => {
                *count += n;
                true
            }
            None => false,
        }
    }

    /// Fold grouped counts into a breakdown, returning the number of records
    /// whose key fell outside the vocabulary.
    fn from_group_counts(rows: &[GroupCount]) -> (Self, i64) {
        let mut breakdown = Self::default();
        let mut unrecognized = 0;
        for row in rows {
            let key = row.key.as_deref().or_else(|| Self::null_key());
            let recorded = key.is_some_and(|key| breakdown.record(key, row.count));
            if !recorded {
                unrecognized += row.count;
            }
        }
        (breakdown, unrecognized)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub new: i64,
    pub in_progress: i64,
    pub waiting: i64,
    pub closed: i64,
}

impl StatusBreakdown {
    pub fn sum(&self) -> i64 {
        self.new + self.in_progress + self.waiting + self.closed
    }
}

impl Breakdown for StatusBreakdown {
    fn slot(&mut self, key: &str) -> Option<&mut i64> {
        match key.parse::<AppealStatus>().ok()? {
            AppealStatus::New => Some(&mut self.new),
            AppealStatus::InProgress => Some(&mut self.in_progress),
            AppealStatus::Waiting => Some(&mut self.waiting),
            AppealStatus::Closed => Some(&mut self.closed),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityBreakdown {
    pub low: i64,
    pub normal: i64,
    pub high: i64,
    pub urgent: i64,
}

impl PriorityBreakdown {
    pub fn sum(&self) -> i64 {
        self.low + self.normal + self.high + self.urgent
    }
}

impl Breakdown for PriorityBreakdown {
    fn slot(&mut self, key: &str) -> Option<&mut i64> {
        match key.parse::<AppealPriority>().ok()? {
            AppealPriority::Low => Some(&mut self.low),
            AppealPriority::Normal => Some(&mut self.normal),
            AppealPriority::High => Some(&mut self.high),
            AppealPriority::Urgent => Some(&mut self.urgent),
        }
    }

    fn null_key() -> Option<&'static str> {
        Some(AppealPriority::Normal.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeBreakdown {
    pub news: i64,
    pub guide: i64,
    pub faq: i64,
}

impl Breakdown for ContentTypeBreakdown {
    fn slot(&mut self, key: &str) -> Option<&mut i64> {
        match key.parse::<ContentType>().ok()? {
            ContentType::News => Some(&mut self.news),
            ContentType::Guide => Some(&mut self.guide),
            ContentType::Faq => Some(&mut self.faq),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStatusBreakdown {
    pub draft: i64,
    pub published: i64,
    pub archived: i64,
}

impl Breakdown for ContentStatusBreakdown {
    fn slot(&mut self, key: &str) -> Option<&mut i64> {
        match key.parse::<ContentStatus>().ok()? {
            ContentStatus::Draft => Some(&mut self.draft),
            ContentStatus::Published => Some(&mut self.published),
            ContentStatus::Archived => Some(&mut self.archived),
        }
    }
}
