//! Repository for chart rows

use chrono::{DateTime, Utc};
use sqlx::{Executor, Sqlite, SqlitePool};

use crate::error::{Error, Result};
use crate::models::Chart;

const CHART_COLUMNS: &str = "id, name, config, notes, slug, published, starred, chart_type, \
     origin_url, last_edited_by, last_edited_at, created_at, updated_at";

/// Get the published chart whose slug equals `slug` or whose id equals `id`
///
/// A slug match is preferred when both exist.
pub async fn get_by_slug_or_id(pool: &SqlitePool, slug: &str, id: Option<i64>) -> Result<Option<Chart>> {
    let chart = sqlx::query_as::<_, Chart>(&format!(
        r#"
        SELECT {CHART_COLUMNS}
        FROM charts
        WHERE published = 1 AND (slug = ? OR id = ?)
        ORDER BY CASE WHEN slug = ? THEN 0 ELSE 1 END, id
        LIMIT 1
        "#
    ))
    .bind(slug)
    .bind(id)
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(chart)
}

/// Get a published chart by id
pub async fn get_published(pool: &SqlitePool, id: i64) -> Result<Option<Chart>> {
    let chart = sqlx::query_as::<_, Chart>(&format!(
        "SELECT {CHART_COLUMNS} FROM charts WHERE id = ? AND published = 1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(chart)
}

/// Insert a chart with an explicit id
pub async fn insert<'e, E>(executor: E, chart: &Chart) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(&format!(
        "INSERT INTO charts ({CHART_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
    ))
    .bind(chart.id)
    .bind(&chart.name)
    .bind(&chart.config)
    .bind(&chart.notes)
    .bind(&chart.slug)
    .bind(chart.published)
    .bind(chart.starred)
    .bind(chart.chart_type)
    .bind(&chart.origin_url)
    .bind(&chart.last_edited_by)
    .bind(chart.last_edited_at)
    .bind(chart.created_at)
    .bind(chart.updated_at)
    .execute(executor)
    .await?;

    log::debug!("Inserted chart {} ({})", chart.id, chart.name);
    Ok(())
}

/// Replace a chart's config and advance its modification time
pub async fn update_config<'e, E>(executor: E, id: i64, config: &str, at: DateTime<Utc>) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        "UPDATE charts SET config = ?, updated_at = ?, last_edited_at = ? WHERE id = ?",
    )
    .bind(config)
    .bind(at)
    .bind(at)
    .bind(id)
    .execute(executor)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(id.to_string()));
    }
    log::debug!("Updated config of chart {}", id);
    Ok(())
}
