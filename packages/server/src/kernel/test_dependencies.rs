// TestDependencies - in-memory implementations for testing
//
// Provides a report store that can be injected into ServerDeps for tests
// and local experiments without a database.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;

use super::{BaseReportStore, ServerDeps};
use crate::common::{DateRange, DayCount, GroupCount};
use crate::domains::appeals::{
    Appeal, AppealFilter, AppealGroupKey, DailyMetric, Direction, DirectionCount,
};
use crate::domains::content::{Content, ContentFilter, ContentGroupKey};

// =============================================================================
// In-memory Report Store
// =============================================================================

#[derive(Default)]
struct Tables {
    directions: Vec<Direction>,
    appeals: Vec<Appeal>,
    content: Vec<Content>,
}

/// Report store over plain vectors, with the same query semantics as the
/// Postgres store. Unlike Postgres it accepts out-of-vocabulary statuses,
/// which makes it the place to test how reports treat them.
#[derive(Clone, Default)]
pub struct InMemoryReportStore {
    tables: Arc<RwLock<Tables>>,
    failure: Option<String>,
}

impl InMemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_direction(self, direction: Direction) -> Self {
        self.insert_direction(direction);
        self
    }

    pub fn with_appeal(self, appeal: Appeal) -> Self {
        self.insert_appeal(appeal);
        self
    }

    pub fn with_appeals(self, appeals: impl IntoIterator<Item = Appeal>) -> Self {
        for appeal in appeals {
            self.insert_appeal(appeal);
        }
        self
    }

    pub fn with_content(self, content: Content) -> Self {
        self.insert_content(content);
        self
    }

    pub fn insert_direction(&self, direction: Direction) {
        self.tables.write().unwrap().directions.push(direction);
    }

    pub fn insert_appeal(&self, appeal: Appeal) {
        self.tables.write().unwrap().appeals.push(appeal);
    }

    pub fn insert_content(&self, content: Content) {
        self.tables.write().unwrap().content.push(content);
    }

    /// Wrap this store in ServerDeps
    pub fn into_deps(self) -> ServerDeps {
        ServerDeps::new(Arc::new(self))
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(anyhow!("{}", message)),
            None => Ok(()),
        }
    }

    fn matching_appeals(&self, filter: &AppealFilter) -> Vec<Appeal> {
        let tables = self.tables.read().unwrap();
        let mut appeals: Vec<Appeal> = tables
            .appeals
            .iter()
            .filter(|appeal| filter.matches(appeal))
            .cloned()
            .collect();
        appeals.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        appeals
    }

    fn matching_content(&self, filter: &ContentFilter) -> Vec<Content> {
        let tables = self.tables.read().unwrap();
        tables
            .content
            .iter()
            .filter(|content| filter.matches(content))
            .cloned()
            .collect()
    }
}

fn group(keys: impl Iterator<Item = Option<String>>) -> Vec<GroupCount> {
    let mut counts: BTreeMap<Option<String>, i64> = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(key, count)| GroupCount { key, count })
        .collect()
}

#[async_trait]
impl BaseReportStore for InMemoryReportStore {
    async fn ping(&self) -> Result<()> {
        self.check()
    }

    async fn count_appeals(&self, filter: &AppealFilter) -> Result<i64> {
        self.check()?;
        Ok(self.matching_appeals(filter).len() as i64)
    }

    async fn count_appeals_by(
        &self,
        key: AppealGroupKey,
        filter: &AppealFilter,
    ) -> Result<Vec<GroupCount>> {
        self.check()?;
        let appeals = self.matching_appeals(filter);
        Ok(group(appeals.iter().map(|appeal| match key {
            AppealGroupKey::Status => Some(appeal.status.clone()),
            AppealGroupKey::Priority => Some(appeal.effective_priority().to_string()),
            AppealGroupKey::Direction => appeal.direction_id.map(|id| id.to_string()),
        })))
    }

    async fn fetch_appeals(&self, filter: &AppealFilter) -> Result<Vec<Appeal>> {
        self.check()?;
        Ok(self.matching_appeals(filter))
    }

    async fn count_appeals_per_direction(&self, range: &DateRange) -> Result<Vec<DirectionCount>> {
        self.check()?;
        let tables = self.tables.read().unwrap();
        let mut directions: Vec<&Direction> = tables.directions.iter().collect();
        directions.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));

        Ok(directions
            .into_iter()
            .map(|direction| DirectionCount {
                direction_id: direction.id,
                title: direction.title.clone(),
                count: tables
                    .appeals
                    .iter()
                    .filter(|appeal| {
                        appeal.direction_id == Some(direction.id)
                            && range.contains(appeal.created_at)
                    })
                    .count() as i64,
            })
            .collect())
    }

    async fn count_appeals_per_day(
        &self,
        metric: DailyMetric,
        filter: &AppealFilter,
    ) -> Result<Vec<DayCount>> {
        self.check()?;
        let mut counts: BTreeMap<NaiveDate, i64> = BTreeMap::new();
        for appeal in self.matching_appeals(filter) {
            let at = match metric {
                DailyMetric::Created => Some(appeal.created_at),
                DailyMetric::Closed => appeal.closed_at,
            };
            if let Some(at) = at {
                *counts.entry(at.date_naive()).or_insert(0) += 1;
            }
        }
        Ok(counts
            .into_iter()
            .map(|(day, count)| DayCount { day, count })
            .collect())
    }

    async fn count_content(&self, filter: &ContentFilter) -> Result<i64> {
        self.check()?;
        Ok(self.matching_content(filter).len() as i64)
    }

    async fn count_content_by(
        &self,
        key: ContentGroupKey,
        filter: &ContentFilter,
    ) -> Result<Vec<GroupCount>> {
        self.check()?;
        let content = self.matching_content(filter);
        Ok(group(content.iter().map(|item| match key {
            ContentGroupKey::Type => Some(item.content_type.clone()),
            ContentGroupKey::Status => Some(item.status.clone()),
        })))
    }
}
