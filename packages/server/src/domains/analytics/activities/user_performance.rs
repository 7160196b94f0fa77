use anyhow::Result;
use tracing::info;

use super::{mean_rounded, round2};
use crate::common::{DateRange, MemberId};
use crate::domains::analytics::models::UserPerformanceStats;
use crate::domains::appeals::{AppealFilter, AppealStatus};
use crate::kernel::ServerDeps;

/// Workload and throughput of one staff member over appeals assigned to them
/// and created within `range`.
pub async fn user_performance_stats(
    user_id: MemberId,
    range: DateRange,
    deps: &ServerDeps,
) -> Result<UserPerformanceStats> {
    info!(
        user_id = %user_id,
        start_date = ?range.start,
        end_date = ?range.end,
        "Computing user performance stats"
    );

    let filter = AppealFilter::created_within(range).with_assignee(user_id);
    let appeals = deps.report_store.fetch_appeals(&filter).await?;

    let count_with = |status: AppealStatus| {
        appeals
            .iter()
            .filter(|appeal| appeal.status == status.as_str())
            .count() as i64
    };

    let total_assigned = appeals.len() as i64;
    let closed = count_with(AppealStatus::Closed);
    let in_progress = count_with(AppealStatus::InProgress);
    let waiting = count_with(AppealStatus::Waiting);

    let avg_resolution_time_hours = mean_rounded(
        appeals
            .iter()
            .filter(|appeal| appeal.is_closed())
            .filter_map(|appeal| appeal.resolution_time_hours()),
    );

    let completion_rate = if total_assigned == 0 {
        0.0
    } else {
        round2(closed as f64 / total_assigned as f64 * 100.0)
    };

    Ok(UserPerformanceStats {
        user_id,
        total_assigned,
        closed,
        in_progress,
        waiting,
        avg_resolution_time_hours,
        completion_rate,
        period: range.period(),
    })
}
