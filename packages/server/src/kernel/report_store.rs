//! Postgres implementation of `BaseReportStore`.
//!
//! Thin adapter: all SQL lives on the model types.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::common::{DateRange, DayCount, GroupCount};
use crate::domains::appeals::{
    Appeal, AppealFilter, AppealGroupKey, DailyMetric, Direction, DirectionCount,
};
use crate::domains::content::{Content, ContentFilter, ContentGroupKey};
use crate::kernel::BaseReportStore;

#[derive(Clone)]
pub struct PostgresReportStore {
    pool: PgPool,
}

impl PostgresReportStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl BaseReportStore for PostgresReportStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn count_appeals(&self, filter: &AppealFilter) -> Result<i64> {
        Appeal::count_filtered(filter, &self.pool).await
    }

    async fn count_appeals_by(
        &self,
        key: AppealGroupKey,
        filter: &AppealFilter,
    ) -> Result<Vec<GroupCount>> {
        Appeal::count_grouped(key, filter, &self.pool).await
    }

    async fn fetch_appeals(&self, filter: &AppealFilter) -> Result<Vec<Appeal>> {
        Appeal::find_filtered(filter, &self.pool).await
    }

    async fn count_appeals_per_direction(&self, range: &DateRange) -> Result<Vec<DirectionCount>> {
        Direction::count_appeals(range, &self.pool).await
    }

    async fn count_appeals_per_day(
        &self,
        metric: DailyMetric,
        filter: &AppealFilter,
    ) -> Result<Vec<DayCount>> {
        Appeal::count_per_day(metric, filter, &self.pool).await
    }

    async fn count_content(&self, filter: &ContentFilter) -> Result<i64> {
        Content::count_filtered(filter, &self.pool).await
    }

    async fn count_content_by(
        &self,
        key: ContentGroupKey,
        filter: &ContentFilter,
    ) -> Result<Vec<GroupCount>> {
        Content::count_grouped(key, filter, &self.pool).await
    }
}
