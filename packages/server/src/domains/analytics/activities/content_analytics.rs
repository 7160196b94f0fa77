use anyhow::Result;
use tracing::info;

use crate::common::DateRange;
use crate::domains::analytics::models::{
    Breakdown, ContentAnalytics, ContentStatusBreakdown, ContentTypeBreakdown,
};
use crate::domains::content::{ContentFilter, ContentGroupKey};
use crate::kernel::ServerDeps;

/// Content counts by type and status for items published within `range`.
pub async fn content_analytics(range: DateRange, deps: &ServerDeps) -> Result<ContentAnalytics> {
    info!(
        start_date = ?range.start,
        end_date = ?range.end,
        "Computing content analytics"
    );

    let store = deps.report_store.as_ref();
    let filter = ContentFilter::published_within(range);

    let total = store.count_content(&filter).await?;

    let type_rows = store.count_content_by(ContentGroupKey::Type, &filter).await?;
    let (by_type, unrecognized_type) = ContentTypeBreakdown::from_group_counts(&type_rows);

    let status_rows = store
        .count_content_by(ContentGroupKey::Status, &filter)
        .await?;
    let (by_status, unrecognized_status) = ContentStatusBreakdown::from_group_counts(&status_rows);

    Ok(ContentAnalytics {
        total,
        by_type,
        unrecognized_type,
        by_status,
        unrecognized_status,
        period: range.period(),
    })
}
