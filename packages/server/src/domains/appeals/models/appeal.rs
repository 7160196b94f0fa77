use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{AppealId, DateRange, DayCount, DirectionId, GroupCount, MemberId};

/// Lifecycle status of an appeal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppealStatus {
    New,
    InProgress,
    Waiting,
    Closed,
}

impl AppealStatus {
    pub const ALL: [AppealStatus; 4] = [
        AppealStatus::New,
        AppealStatus::InProgress,
        AppealStatus::Waiting,
        AppealStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppealStatus::New => "new",
            AppealStatus::InProgress => "in_progress",
            AppealStatus::Waiting => "waiting",
            AppealStatus::Closed => "closed",
        }
    }
}

impl std::fmt::Display for AppealStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AppealStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "new" => Ok(AppealStatus::New),
            "in_progress" => Ok(AppealStatus::InProgress),
            "waiting" => Ok(AppealStatus::Waiting),
            "closed" => Ok(AppealStatus::Closed),
            _ => Err(anyhow::anyhow!("Invalid appeal status: {}", s)),
        }
    }
}

/// Priority of an appeal; rows without one are treated as `Normal`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppealPriority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl AppealPriority {
    pub const ALL: [AppealPriority; 4] = [
        AppealPriority::Low,
        AppealPriority::Normal,
        AppealPriority::High,
        AppealPriority::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppealPriority::Low => "low",
            AppealPriority::Normal => "normal",
            AppealPriority::High => "high",
            AppealPriority::Urgent => "urgent",
        }
    }
}

impl std::fmt::Display for AppealPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AppealPriority {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "low" => Ok(AppealPriority::Low),
            "normal" => Ok(AppealPriority::Normal),
            "high" => Ok(AppealPriority::High),
            "urgent" => Ok(AppealPriority::Urgent),
            _ => Err(anyhow::anyhow!("Invalid appeal priority: {}", s)),
        }
    }
}

/// Appeal as seen by the reporting layer.
///
/// `status` and `priority` stay raw strings: reports must be able to see (and
/// count) values outside the known vocabulary instead of failing to load them.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Appeal {
    pub id: AppealId,
    pub direction_id: Option<DirectionId>,
    pub title: String,
    pub institute: Option<String>,
    pub status: String,
    pub priority: Option<String>,
    pub assigned_to: Option<MemberId>,
    pub created_at: DateTime<Utc>,
    pub first_response_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
}

/// Column an appeal count can be grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppealGroupKey {
    Status,
    /// NULL priorities are reported as `normal`
    Priority,
    /// NULL direction is reported as a `None` key
    Direction,
}

impl AppealGroupKey {
    fn sql_expr(&self) -> &'static str {
        match self {
            AppealGroupKey::Status => "status",
            AppealGroupKey::Priority => "COALESCE(priority, 'normal')",
            AppealGroupKey::Direction => "direction_id::text",
        }
    }
}

/// Which timestamp a per-day count is bucketed by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DailyMetric {
    Created,
    Closed,
}

impl DailyMetric {
    fn sql_column(&self) -> &'static str {
        match self {
            DailyMetric::Created => "created_at",
            DailyMetric::Closed => "closed_at",
        }
    }
}

/// Conjunction of optional predicates over appeals. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppealFilter {
    pub created: DateRange,
    pub closed: DateRange,
    pub direction_id: Option<DirectionId>,
    pub assigned_to: Option<MemberId>,
    pub status: Option<AppealStatus>,
    /// Case-insensitive substring of `institute`
    pub institute_contains: Option<String>,
}

impl AppealFilter {
    pub fn created_within(range: DateRange) -> Self {
        Self {
            created: range,
            ..Self::default()
        }
    }

    pub fn closed_within(mut self, range: DateRange) -> Self {
        self.closed = range;
        self
    }

    pub fn with_direction(mut self, direction_id: Option<DirectionId>) -> Self {
        self.direction_id = direction_id;
        self
    }

    pub fn with_assignee(mut self, member_id: MemberId) -> Self {
        self.assigned_to = Some(member_id);
        self
    }

    pub fn with_status(mut self, status: AppealStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_institute(mut self, fragment: impl Into<String>) -> Self {
        self.institute_contains = Some(fragment.into());
        self
    }

    /// In-process evaluation with the same semantics as the SQL predicate.
    pub fn matches(&self, appeal: &Appeal) -> bool {
        self.created.contains(appeal.created_at)
            && self.closed.contains_opt(appeal.closed_at)
            && self
                .direction_id
                .map_or(true, |id| appeal.direction_id == Some(id))
            && self
                .assigned_to
                .map_or(true, |id| appeal.assigned_to == Some(id))
            && self.status.map_or(true, |s| appeal.status == s.as_str())
            && self.institute_contains.as_deref().map_or(true, |fragment| {
                appeal
                    .institute
                    .as_deref()
                    .is_some_and(|institute| {
                        institute.to_lowercase().contains(&fragment.to_lowercase())
                    })
            })
    }
}

impl Appeal {
    /// Priority with the `normal` default applied.
    pub fn effective_priority(&self) -> &str {
        self.priority
            .as_deref()
            .unwrap_or(AppealPriority::Normal.as_str())
    }

    pub fn is_closed(&self) -> bool {
        self.status == AppealStatus::Closed.as_str()
    }

    /// Hours from creation to the first staff response.
    pub fn response_time_hours(&self) -> Option<f64> {
        self.first_response_at
            .map(|at| hours_between(self.created_at, at))
    }

    /// Hours from creation to closing.
    pub fn resolution_time_hours(&self) -> Option<f64> {
        self.closed_at.map(|at| hours_between(self.created_at, at))
    }
}

pub(crate) fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 3_600_000.0
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

/// Predicate shared by every filtered appeal query; parameters $1..$8 are
/// bound by `bind_appeal_filter!` in this exact order.
const APPEAL_FILTER_SQL: &str = r#"
    ($1::timestamptz IS NULL OR created_at >= $1)
    AND ($2::timestamptz IS NULL OR created_at < $2)
    AND ($3::timestamptz IS NULL OR closed_at >= $3)
    AND ($4::timestamptz IS NULL OR closed_at < $4)
    AND ($5::uuid IS NULL OR direction_id = $5)
    AND ($6::uuid IS NULL OR assigned_to = $6)
    AND ($7::text IS NULL OR status = $7)
    AND ($8::text IS NULL OR institute ILIKE '%' || $8 || '%')
"#;

const APPEAL_COLUMNS: &str = "id, direction_id, title, institute, status, priority, \
     assigned_to, created_at, first_response_at, closed_at";

macro_rules! bind_appeal_filter {
    ($query:expr, $filter:expr) => {{
        let filter: &AppealFilter = $filter;
        $query
            .bind(filter.created.lower())
            .bind(filter.created.upper())
            .bind(filter.closed.lower())
            .bind(filter.closed.upper())
            .bind(filter.direction_id)
            .bind(filter.assigned_to)
            .bind(filter.status.map(|s| s.as_str()))
            .bind(filter.institute_contains.as_deref().map(escape_like))
    }};
}

/// Escape LIKE wildcards so a fragment matches literally.
fn escape_like(fragment: &str) -> String {
    fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

impl Appeal {
    pub async fn count_filtered(filter: &AppealFilter, pool: &PgPool) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM appeals WHERE {APPEAL_FILTER_SQL}");
        let count = bind_appeal_filter!(sqlx::query_scalar::<_, i64>(&sql), filter)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    pub async fn count_grouped(
        key: AppealGroupKey,
        filter: &AppealFilter,
        pool: &PgPool,
    ) -> Result<Vec<GroupCount>> {
        let sql = format!(
            r#"
            SELECT {expr} AS key, COUNT(*) AS count
            FROM appeals
            WHERE {APPEAL_FILTER_SQL}
            GROUP BY 1
            ORDER BY 1
            "#,
            expr = key.sql_expr(),
        );
        bind_appeal_filter!(sqlx::query_as::<_, GroupCount>(&sql), filter)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Matching appeals, oldest first.
    pub async fn find_filtered(filter: &AppealFilter, pool: &PgPool) -> Result<Vec<Self>> {
        let sql = format!(
            "SELECT {APPEAL_COLUMNS} FROM appeals WHERE {APPEAL_FILTER_SQL} ORDER BY created_at, id"
        );
        bind_appeal_filter!(sqlx::query_as::<_, Self>(&sql), filter)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }

    /// Matching appeals counted per UTC calendar day of the metric's timestamp.
    /// Days without records are absent from the result.
    pub async fn count_per_day(
        metric: DailyMetric,
        filter: &AppealFilter,
        pool: &PgPool,
    ) -> Result<Vec<DayCount>> {
        let sql = format!(
            r#"
            SELECT ({column} AT TIME ZONE 'UTC')::date AS day, COUNT(*) AS count
            FROM appeals
            WHERE {column} IS NOT NULL AND {APPEAL_FILTER_SQL}
            GROUP BY 1
            ORDER BY 1
            "#,
            column = metric.sql_column(),
        );
        bind_appeal_filter!(sqlx::query_as::<_, DayCount>(&sql), filter)
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }
}
