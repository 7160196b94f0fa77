// Common types and utilities shared across the application

pub mod aggregates;
pub mod date_range;
pub mod entity_ids;
pub mod id;

pub use aggregates::{DayCount, GroupCount};
pub use date_range::{DateRange, ReportPeriod};
pub use entity_ids::*;
pub use id::Id;
