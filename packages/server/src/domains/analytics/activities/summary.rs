use std::collections::BTreeMap;

use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

use crate::common::DateRange;
use crate::domains::analytics::models::{AppealSummary, Breakdown, StatusBreakdown};
use crate::domains::appeals::{AppealFilter, AppealGroupKey, AppealStatus};
use crate::kernel::ServerDeps;

/// Key used for appeals that belong to no direction.
pub const NO_DIRECTION_KEY: &str = "other";

/// Headline counters across all appeals, with "today" activity.
pub async fn appeal_summary(today: NaiveDate, deps: &ServerDeps) -> Result<AppealSummary> {
    info!(today = %today, "Computing appeal summary");

    let store = deps.report_store.as_ref();
    let everything = AppealFilter::default();

    let total = store.count_appeals(&everything).await?;

    let status_rows = store
        .count_appeals_by(AppealGroupKey::Status, &everything)
        .await?;
    let (by_status, unrecognized_status) = StatusBreakdown::from_group_counts(&status_rows);

    let by_direction = store
        .count_appeals_by(AppealGroupKey::Direction, &everything)
        .await?
        .into_iter()
        .map(|row| {
            (
                row.key.unwrap_or_else(|| NO_DIRECTION_KEY.to_string()),
                row.count,
            )
        })
        .collect::<BTreeMap<_, _>>();

    let created_today = store
        .count_appeals(&AppealFilter::created_within(DateRange::single_day(today)))
        .await?;

    let closed_today = store
        .count_appeals(
            &AppealFilter::default()
                .closed_within(DateRange::single_day(today))
                .with_status(AppealStatus::Closed),
        )
        .await?;

    Ok(AppealSummary {
        total,
        by_status,
        unrecognized_status,
        by_direction,
        created_today,
        closed_today,
    })
}
