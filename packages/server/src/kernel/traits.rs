// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Report assembly lives in domains/analytics/activities and only talks to
// storage through these traits.
//
// Naming convention: Base* for trait names (e.g., BaseReportStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::{DateRange, DayCount, GroupCount};
use crate::domains::appeals::{Appeal, AppealFilter, AppealGroupKey, DailyMetric, DirectionCount};
use crate::domains::content::{ContentFilter, ContentGroupKey};

// =============================================================================
// Report Store Trait (Infrastructure - read-only query primitives)
// =============================================================================

#[async_trait]
pub trait BaseReportStore: Send + Sync {
    /// Cheap liveness probe used by the health endpoint
    async fn ping(&self) -> Result<()>;

    async fn count_appeals(&self, filter: &AppealFilter) -> Result<i64>;

    /// Group-by-count over matching appeals.
    /// NULL priorities are grouped as `normal`; NULL directions as a `None` key.
    async fn count_appeals_by(
        &self,
        key: AppealGroupKey,
        filter: &AppealFilter,
    ) -> Result<Vec<GroupCount>>;

    /// Matching appeals ordered by creation time, then id
    async fn fetch_appeals(&self, filter: &AppealFilter) -> Result<Vec<Appeal>>;

    /// Every direction (including those with no appeals) with the number of
    /// appeals created within `range`, ordered by title then id
    async fn count_appeals_per_direction(&self, range: &DateRange) -> Result<Vec<DirectionCount>>;

    /// Matching appeals counted per UTC day of the metric's timestamp, ascending.
    /// Days with no records are omitted.
    async fn count_appeals_per_day(
        &self,
        metric: DailyMetric,
        filter: &AppealFilter,
    ) -> Result<Vec<DayCount>>;

    async fn count_content(&self, filter: &ContentFilter) -> Result<i64>;

    async fn count_content_by(
        &self,
        key: ContentGroupKey,
        filter: &ContentFilter,
    ) -> Result<Vec<GroupCount>>;
}
