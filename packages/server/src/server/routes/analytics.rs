//! Report endpoints. Each handler maps query parameters onto a report
//! activity and returns its result as JSON.

use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::common::{DateRange, DirectionId, MemberId};
use crate::domains::analytics::{
    appeal_summary, appeals_by_school, content_analytics, detailed_appeal_stats,
    user_performance_stats, AppealSummary, ContentAnalytics, DetailedAppealStats, SchoolReport,
    UserPerformanceStats,
};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// `start_date` / `end_date` as `YYYY-MM-DD`, both optional
#[derive(Debug, Default, Deserialize)]
pub struct PeriodQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl PeriodQuery {
    fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DetailedStatsQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub direction_id: Option<DirectionId>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SchoolStatsQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub school_code: Option<String>,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub async fn appeal_summary_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<AppealSummary>, ApiError> {
    let summary = appeal_summary(today(), &state.server_deps).await?;
    Ok(Json(summary))
}

pub async fn detailed_stats_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<DetailedStatsQuery>,
) -> Result<Json<DetailedAppealStats>, ApiError> {
    let stats = detailed_appeal_stats(
        DateRange::new(params.start_date, params.end_date),
        params.direction_id,
        today(),
        &state.server_deps,
    )
    .await?;
    Ok(Json(stats))
}

pub async fn school_stats_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<SchoolStatsQuery>,
) -> Result<Json<SchoolReport>, ApiError> {
    let report = appeals_by_school(
        DateRange::new(params.start_date, params.end_date),
        params.school_code.as_deref(),
        &state.server_deps,
    )
    .await?;
    Ok(Json(report))
}

pub async fn user_performance_handler(
    Extension(state): Extension<AppState>,
    Path(user_id): Path<MemberId>,
    Query(params): Query<PeriodQuery>,
) -> Result<Json<UserPerformanceStats>, ApiError> {
    let stats = user_performance_stats(user_id, params.range(), &state.server_deps).await?;
    Ok(Json(stats))
}

pub async fn content_analytics_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<PeriodQuery>,
) -> Result<Json<ContentAnalytics>, ApiError> {
    let analytics = content_analytics(params.range(), &state.server_deps).await?;
    Ok(Json(analytics))
}
