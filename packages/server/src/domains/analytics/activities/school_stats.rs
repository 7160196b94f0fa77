use std::collections::BTreeMap;

use anyhow::Result;
use tracing::{debug, info};

use crate::common::DateRange;
use crate::domains::analytics::models::{Breakdown, SchoolReport, SchoolStats};
use crate::domains::appeals::AppealFilter;
use crate::domains::schools::{find_school, is_known_school, normalize_school_name, OTHER_SCHOOL};
use crate::kernel::ServerDeps;

/// Appeals created within `range`, grouped by normalized institute.
///
/// When `school_code` normalizes to a known code, only appeals whose
/// institute mentions that code are included. Appeals with an empty
/// institute land in the `"Other"` group.
pub async fn appeals_by_school(
    range: DateRange,
    school_code: Option<&str>,
    deps: &ServerDeps,
) -> Result<SchoolReport> {
    let school_filter = school_code
        .and_then(normalize_school_name)
        .filter(|code| is_known_school(code));

    info!(
        start_date = ?range.start,
        end_date = ?range.end,
        school_code = ?school_code,
        school_filter = ?school_filter,
        "Computing appeals by school"
    );

    let mut filter = AppealFilter::created_within(range);
    if let Some(code) = &school_filter {
        filter = filter.with_institute(code.clone());
    }

    let appeals = deps.report_store.fetch_appeals(&filter).await?;

    let mut schools: BTreeMap<String, SchoolStats> = BTreeMap::new();
    for appeal in &appeals {
        let key = appeal
            .institute
            .as_deref()
            .and_then(normalize_school_name)
            .unwrap_or_else(|| OTHER_SCHOOL.to_string());

        let stats = schools.entry(key).or_insert_with_key(|key| SchoolStats {
            full_name: find_school(key).map(|school| school.full_name.to_string()),
            ..SchoolStats::default()
        });

        stats.total += 1;
        if !stats.by_status.record(&appeal.status, 1) {
            debug!(appeal_id = %appeal.id, status = %appeal.status, "Unrecognized appeal status");
            stats.unrecognized_status += 1;
        }
        if !stats.by_priority.record(appeal.effective_priority(), 1) {
            debug!(appeal_id = %appeal.id, priority = ?appeal.priority, "Unrecognized appeal priority");
            stats.unrecognized_priority += 1;
        }
    }

    Ok(SchoolReport {
        total: appeals.len() as i64,
        schools,
        school_filter,
        period: range.period(),
    })
}
