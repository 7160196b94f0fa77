use std::collections::{BTreeMap, HashMap};

use anyhow::Result;
use chrono::{Days, NaiveDate};
use tracing::info;

use super::{mean_rounded, DAILY_TREND_DAYS};
use crate::common::{DateRange, DayCount, DirectionId};
use crate::domains::analytics::models::{
    Breakdown, DailyTrend, DetailedAppealStats, DirectionStat, PriorityBreakdown,
    StatusBreakdown,
};
use crate::domains::appeals::{AppealFilter, AppealGroupKey, AppealStatus, DailyMetric};
use crate::kernel::ServerDeps;

/// Detailed appeal statistics for the admin dashboard.
///
/// `range` and `direction_id` narrow the appeal set for totals, breakdowns
/// and averages. `by_direction` honours only `range`, and `daily_trends`
/// honours only `direction_id` (it always covers the 30 days ending `today`).
pub async fn detailed_appeal_stats(
    range: DateRange,
    direction_id: Option<DirectionId>,
    today: NaiveDate,
    deps: &ServerDeps,
) -> Result<DetailedAppealStats> {
    info!(
        start_date = ?range.start,
        end_date = ?range.end,
        direction_id = ?direction_id,
        "Computing detailed appeal stats"
    );

    let store = deps.report_store.as_ref();
    let filter = AppealFilter::created_within(range).with_direction(direction_id);

    let total = store.count_appeals(&filter).await?;

    let status_rows = store
        .count_appeals_by(AppealGroupKey::Status, &filter)
        .await?;
    let (by_status, unrecognized_status) = StatusBreakdown::from_group_counts(&status_rows);

    let priority_rows = store
        .count_appeals_by(AppealGroupKey::Priority, &filter)
        .await?;
    let (by_priority, unrecognized_priority) =
        PriorityBreakdown::from_group_counts(&priority_rows);

    // Closed appeals without a closed_at are skipped from both averages'
    // numerator and denominator.
    let closed = store
        .fetch_appeals(&filter.clone().with_status(AppealStatus::Closed))
        .await?;
    let avg_response_time_hours =
        mean_rounded(closed.iter().filter_map(|appeal| appeal.response_time_hours()));
    let avg_resolution_time_hours =
        mean_rounded(closed.iter().filter_map(|appeal| appeal.resolution_time_hours()));

    let by_direction = store
        .count_appeals_per_direction(&range)
        .await?
        .into_iter()
        .map(|row| {
            (
                row.direction_id.to_string(),
                DirectionStat {
                    title: row.title,
                    count: row.count,
                },
            )
        })
        .collect::<BTreeMap<_, _>>();

    let daily_trends = daily_trends(direction_id, today, deps).await?;

    if unrecognized_status > 0 || unrecognized_priority > 0 {
        info!(
            unrecognized_status,
            unrecognized_priority, "Appeals outside the status/priority vocabulary were excluded"
        );
    }

    Ok(DetailedAppealStats {
        total,
        by_status,
        unrecognized_status,
        by_priority,
        unrecognized_priority,
        avg_response_time_hours,
        avg_resolution_time_hours,
        by_direction,
        daily_trends,
        period: range.period(),
    })
}

/// Created/closed counts for each of the `DAILY_TREND_DAYS` days ending `today`,
/// oldest first. Two grouped queries, densified to one entry per day.
pub async fn daily_trends(
    direction_id: Option<DirectionId>,
    today: NaiveDate,
    deps: &ServerDeps,
) -> Result<Vec<DailyTrend>> {
    let store = deps.report_store.as_ref();
    let window = DateRange::trailing_days(today, DAILY_TREND_DAYS);

    let created_filter = AppealFilter::created_within(window).with_direction(direction_id);
    let created = store
        .count_appeals_per_day(DailyMetric::Created, &created_filter)
        .await?;

    let closed_filter = AppealFilter::default()
        .closed_within(window)
        .with_direction(direction_id)
        .with_status(AppealStatus::Closed);
    let closed = store
        .count_appeals_per_day(DailyMetric::Closed, &closed_filter)
        .await?;

    Ok(densify(window, &created, &closed))
}

fn densify(window: DateRange, created: &[DayCount], closed: &[DayCount]) -> Vec<DailyTrend> {
    let (Some(first_day), Some(last_day)) = (window.start, window.end) else {
        return Vec::new();
    };
    let created: HashMap<NaiveDate, i64> = created.iter().map(|r| (r.day, r.count)).collect();
    let closed: HashMap<NaiveDate, i64> = closed.iter().map(|r| (r.day, r.count)).collect();

    let mut trends = Vec::with_capacity(DAILY_TREND_DAYS as usize);
    let mut day = first_day;
    while day <= last_day {
        trends.push(DailyTrend {
            date: day,
            created: created.get(&day).copied().unwrap_or(0),
            closed: closed.get(&day).copied().unwrap_or(0),
        });
        match day.checked_add_days(Days::new(1)) {
            Some(next) => day = next,
            None => break,
        }
    }
    trends
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn densify_fills_missing_days_with_zero() {
        let window = DateRange::trailing_days(date(2024, 3, 3), 3);
        let created = vec![DayCount {
            day: date(2024, 3, 2),
            count: 4,
        }];
        let closed = vec![DayCount {
            day: date(2024, 3, 3),
            count: 1,
        }];

        let trends = densify(window, &created, &closed);

        assert_eq!(
            trends,
            vec![
                DailyTrend {
                    date: date(2024, 3, 1),
                    created: 0,
                    closed: 0
                },
                DailyTrend {
                    date: date(2024, 3, 2),
                    created: 4,
                    closed: 0
                },
                DailyTrend {
                    date: date(2024, 3, 3),
                    created: 0,
                    closed: 1
                },
            ]
        );
    }

    #[test]
    fn densify_crosses_month_boundaries() {
        let trends = densify(DateRange::trailing_days(date(2023, 3, 1), 30), &[], &[]);
        assert_eq!(trends.len(), 30);
        assert_eq!(trends[0].date, date(2023, 1, 31));
        assert_eq!(trends[29].date, date(2023, 3, 1));
    }

    #[test]
    fn densify_counts_leap_day() {
        let trends = densify(DateRange::trailing_days(date(2024, 3, 1), 30), &[], &[]);
        assert_eq!(trends.len(), 30);
        assert_eq!(trends[0].date, date(2024, 2, 1));
        assert_eq!(trends[28].date, date(2024, 2, 29));
        assert_eq!(trends[29].date, date(2024, 3, 1));
    }
}
