use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{DateRange, DirectionId};

/// Direction (committee / organizational sub-unit) that owns appeals
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Direction {
    pub id: DirectionId,
    pub slug: String,
    pub title: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Appeals attributed to one direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DirectionCount {
    pub direction_id: DirectionId,
    pub title: String,
    pub count: i64,
}

impl Direction {
    /// Every direction with its number of appeals created within `range`.
    ///
    /// Directions without matching appeals are included with a zero count.
    pub async fn count_appeals(range: &DateRange, pool: &PgPool) -> Result<Vec<DirectionCount>> {
        sqlx::query_as::<_, DirectionCount>(
            r#"
            SELECT d.id AS direction_id, d.title, COUNT(a.id) AS count
            FROM directions d
            LEFT JOIN appeals a
                ON a.direction_id = d.id
                AND ($1::timestamptz IS NULL OR a.created_at >= $1)
                AND ($2::timestamptz IS NULL OR a.created_at < $2)
            GROUP BY d.id, d.title
            ORDER BY d.title, d.id
            "#,
        )
        .bind(range.lower())
        .bind(range.upper())
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
