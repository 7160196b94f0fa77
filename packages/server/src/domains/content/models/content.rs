use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{ContentId, DateRange, DirectionId, GroupCount};

/// Kind of published material
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    News,
    Guide,
    Faq,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [ContentType::News, ContentType::Guide, ContentType::Faq];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::News => "news",
            ContentType::Guide => "guide",
            ContentType::Faq => "faq",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "news" => Ok(ContentType::News),
            "guide" => Ok(ContentType::Guide),
            "faq" => Ok(ContentType::Faq),
            _ => Err(anyhow::anyhow!("Invalid content type: {}", s)),
        }
    }
}

/// Editorial status of a content item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    Draft,
    Published,
    Archived,
}

impl ContentStatus {
    pub const ALL: [ContentStatus; 3] = [
        ContentStatus::Draft,
        ContentStatus::Published,
        ContentStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Published => "published",
            ContentStatus::Archived => "archived",
        }
    }
}

impl std::fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "draft" => Ok(ContentStatus::Draft),
            "published" => Ok(ContentStatus::Published),
            "archived" => Ok(ContentStatus::Archived),
            _ => Err(anyhow::anyhow!("Invalid content status: {}", s)),
        }
    }
}

/// News item, guide or FAQ entry
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Content {
    pub id: ContentId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub content_type: String,
    pub title: String,
    pub slug: String,
    pub status: String,
    pub direction_id: Option<DirectionId>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Column a content count can be grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentGroupKey {
    Type,
    Status,
}

impl ContentGroupKey {
    fn sql_column(&self) -> &'static str {
        match self {
            ContentGroupKey::Type => "type",
            ContentGroupKey::Status => "status",
        }
    }
}

/// Content filter on the publication timestamp.
///
/// A bounded range excludes never-published items; an unbounded one keeps them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentFilter {
    pub published: DateRange,
}

impl ContentFilter {
    pub fn published_within(range: DateRange) -> Self {
        Self { published: range }
    }

    pub fn matches(&self, content: &Content) -> bool {
        self.published.contains_opt(content.published_at)
    }
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

const CONTENT_FILTER_SQL: &str = r#"
    (($1::timestamptz IS NULL AND $2::timestamptz IS NULL)
        OR (published_at IS NOT NULL
            AND ($1::timestamptz IS NULL OR published_at >= $1)
            AND ($2::timestamptz IS NULL OR published_at < $2)))
"#;

impl Content {
    pub async fn count_filtered(filter: &ContentFilter, pool: &PgPool) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM content WHERE {CONTENT_FILTER_SQL}");
        let count = sqlx::query_scalar::<_, i64>(&sql)
            .bind(filter.published.lower())
            .bind(filter.published.upper())
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    pub async fn count_grouped(
        key: ContentGroupKey,
        filter: &ContentFilter,
        pool: &PgPool,
    ) -> Result<Vec<GroupCount>> {
        let sql = format!(
            r#"
            SELECT {column} AS key, COUNT(*) AS count
            FROM content
            WHERE {CONTENT_FILTER_SQL}
            GROUP BY 1
            ORDER BY 1
            "#,
            column = key.sql_column(),
        );
        sqlx::query_as::<_, GroupCount>(&sql)
            .bind(filter.published.lower())
            .bind(filter.published.upper())
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }
}
