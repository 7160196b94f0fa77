//! Row shapes returned by aggregate queries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One bucket of a `GROUP BY ... COUNT(*)` query.
///
/// `key` is `None` when the grouped column is NULL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct GroupCount {
    pub key: Option<String>,
    pub count: i64,
}

impl GroupCount {
    pub fn new(key: Option<&str>, count: i64) -> Self {
        Self {
            key: key.map(str::to_string),
            count,
        }
    }
}

/// Number of records whose tracked timestamp falls on `day` (UTC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DayCount {
    pub day: NaiveDate,
    pub count: i64,
}
