//! Report assembly. Each activity issues a fixed set of read queries through
//! `ServerDeps::report_store` and returns a serializable report.

pub mod appeal_stats;
pub mod content_analytics;
pub mod school_stats;
pub mod summary;
pub mod user_performance;

pub use appeal_stats::{daily_trends, detailed_appeal_stats};
pub use content_analytics::content_analytics;
pub use school_stats::appeals_by_school;
pub use summary::appeal_summary;
pub use user_performance::user_performance_stats;

/// Length of the `daily_trends` window, ending today.
pub const DAILY_TREND_DAYS: u64 = 30;

/// Round to two decimals, the precision every hour/percentage field is reported in.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounded arithmetic mean, `None` for an empty input.
pub(crate) fn mean_rounded(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| round2(sum / count as f64))
}
