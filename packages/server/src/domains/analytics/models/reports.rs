use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::breakdown::{
    ContentStatusBreakdown, ContentTypeBreakdown, PriorityBreakdown, StatusBreakdown,
};
use crate::common::{MemberId, ReportPeriod};

/// Appeals attributed to one direction in the detailed report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionStat {
    pub title: String,
    pub count: i64,
}

/// Appeals created and closed on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTrend {
    pub date: NaiveDate,
    pub created: i64,
    pub closed: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedAppealStats {
    pub total: i64,
    pub by_status: StatusBreakdown,
    /// Appeals counted in `total` whose status is outside the vocabulary.
    pub unrecognized_status: i64,
    pub by_priority: PriorityBreakdown,
    pub unrecognized_priority: i64,
    pub avg_response_time_hours: Option<f64>,
    pub avg_resolution_time_hours: Option<f64>,
    /// Keyed by direction id.
    pub by_direction: BTreeMap<String, DirectionStat>,
    /// Oldest day first, last entry is the report's "today".
    pub daily_trends: Vec<DailyTrend>,
    pub period: ReportPeriod,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPerformanceStats {
    pub user_id: MemberId,
    pub total_assigned: i64,
    pub closed: i64,
    pub in_progress: i64,
    pub waiting: i64,
    pub avg_resolution_time_hours: Option<f64>,
    /// Percentage of assigned appeals that are closed; 0 when nothing is assigned.
    pub completion_rate: f64,
    pub period: ReportPeriod,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentAnalytics {
    pub total: i64,
    pub by_type: ContentTypeBreakdown,
    pub unrecognized_type: i64,
    pub by_status: ContentStatusBreakdown,
    pub unrecognized_status: i64,
    pub period: ReportPeriod,
}

/// Appeals grouped under one normalized institute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolStats {
    pub total: i64,
    /// Full school name when the group key is a known code.
    pub full_name: Option<String>,
    pub by_status: StatusBreakdown,
    pub unrecognized_status: i64,
    pub by_priority: PriorityBreakdown,
    pub unrecognized_priority: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolReport {
    pub total: i64,
    pub schools: BTreeMap<String, SchoolStats>,
    /// Normalized school code the report was restricted to, if any.
    pub school_filter: Option<String>,
    pub period: ReportPeriod,
}

/// Dashboard counters over all appeals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppealSummary {
    pub total: i64,
    pub by_status: StatusBreakdown,
    pub unrecognized_status: i64,
    /// Keyed by direction id; appeals without a direction are under `"other"`.
    pub by_direction: BTreeMap<String, i64>,
    pub created_today: i64,
    pub closed_today: i64,
}
