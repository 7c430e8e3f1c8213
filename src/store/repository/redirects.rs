//! Repository for chart slug redirects

use sqlx::{Executor, Sqlite, SqlitePool};

use crate::error::Result;
use crate::models::ChartSlugRedirect;

/// Get redirect by retired slug
pub async fn get_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<ChartSlugRedirect>> {
    let redirect = sqlx::query_as::<_, ChartSlugRedirect>(
        "SELECT id, slug, chart_id FROM chart_slug_redirects WHERE slug = ?",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(redirect)
}

pub async fn insert<'e, E>(executor: E, redirect: &ChartSlugRedirect) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT INTO chart_slug_redirects (id, slug, chart_id) VALUES (?, ?, ?)")
        .bind(redirect.id)
        .bind(&redirect.slug)
        .bind(redirect.chart_id)
        .execute(executor)
        .await?;

    log::debug!("Added redirect {} -> chart {}", redirect.slug, redirect.chart_id);
    Ok(())
}
