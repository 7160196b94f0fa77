//! Reporting engine: read-only aggregate statistics over appeals and content.

pub mod activities;
pub mod models;

pub use activities::{
    appeal_summary, appeals_by_school, content_analytics, detailed_appeal_stats,
    user_performance_stats, DAILY_TREND_DAYS,
};
pub use models::*;
