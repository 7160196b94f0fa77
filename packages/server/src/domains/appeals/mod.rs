//! Appeals (support/complaint tickets) and the directions that own them.

pub mod models;

pub use models::{
    Appeal, AppealFilter, AppealGroupKey, AppealPriority, AppealStatus, DailyMetric, Direction,
    DirectionCount,
};
