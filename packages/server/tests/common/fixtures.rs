//! Test fixtures for creating test data.
//!
//! Builders return plain model values so the same data can seed the
//! in-memory store or be inserted into Postgres.

use anyhow::Result;
use appeals_core::common::{AppealId, ContentId, DirectionId};
use appeals_core::domains::appeals::{Appeal, Direction};
use appeals_core::domains::content::Content;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use sqlx::PgPool;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn hours(n: i64) -> Duration {
    Duration::hours(n)
}

/// Active direction with a slug derived from its title
pub fn direction(title: &str) -> Direction {
    let id = DirectionId::new();
    Direction {
        id,
        slug: format!("{}-{}", title.to_lowercase().replace(' ', "-"), id),
        title: title.to_string(),
        is_active: true,
        created_at: at(2024, 1, 1, 0, 0),
    }
}

/// Unassigned appeal with no direction, institute, priority or timestamps
/// beyond `created_at`
pub fn appeal(status: &str, created_at: DateTime<Utc>) -> Appeal {
    Appeal {
        id: AppealId::new(),
        direction_id: None,
        title: "Dormitory heating request".to_string(),
        institute: None,
        status: status.to_string(),
        priority: None,
        assigned_to: None,
        created_at,
        first_response_at: None,
        closed_at: None,
    }
}

/// Closed appeal answered `response` and closed `resolution` after creation
pub fn closed_appeal(created_at: DateTime<Utc>, response: Duration, resolution: Duration) -> Appeal {
    Appeal {
        first_response_at: Some(created_at + response),
        closed_at: Some(created_at + resolution),
        ..appeal("closed", created_at)
    }
}

pub fn content(kind: &str, status: &str, published_at: Option<DateTime<Utc>>) -> Content {
    let id = ContentId::new();
    Content {
        id,
        content_type: kind.to_string(),
        title: format!("{} item", kind),
        slug: format!("{}-{}", kind, id),
        status: status.to_string(),
        direction_id: None,
        published_at,
    }
}

pub async fn insert_direction(pool: &PgPool, direction: &Direction) -> Result<()> {
    sqlx::query(
        "INSERT INTO directions (id, slug, title, is_active, created_at) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(direction.id)
    .bind(&direction.slug)
    .bind(&direction.title)
    .bind(direction.is_active)
    .bind(direction.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn insert_appeal(pool: &PgPool, appeal: &Appeal) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO appeals (
            id, direction_id, title, institute, status, priority,
            assigned_to, created_at, first_response_at, closed_at
        )
        VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'normal'), $7, $8, $9, $10)
        "#,
    )
    .bind(appeal.id)
    .bind(appeal.direction_id)
    .bind(&appeal.title)
    .bind(&appeal.institute)
    .bind(&appeal.status)
    .bind(&appeal.priority)
    .bind(appeal.assigned_to)
    .bind(appeal.created_at)
    .bind(appeal.first_response_at)
    .bind(appeal.closed_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn insert_content(pool: &PgPool, content: &Content) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO content (id, type, title, slug, direction_id, status, published_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(content.id)
    .bind(&content.content_type)
    .bind(&content.title)
    .bind(&content.slug)
    .bind(content.direction_id)
    .bind(&content.status)
    .bind(content.published_at)
    .execute(pool)
    .await?;
    Ok(())
}
