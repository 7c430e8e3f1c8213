//! Repository for logos

use sqlx::{Executor, QueryBuilder, Sqlite, SqlitePool};

use crate::error::Result;
use crate::models::Logo;

/// Get logos whose name is in `names`
pub async fn get_by_names(pool: &SqlitePool, names: &[String]) -> Result<Vec<Logo>> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = QueryBuilder::<Sqlite>::new("SELECT id, name, svg FROM logos WHERE name IN (");
    let mut separated = query.separated(", ");
    for name in names {
        separated.push_bind(name.as_str());
    }
    separated.push_unseparated(") ORDER BY id");

    let logos = query.build_query_as::<Logo>().fetch_all(pool).await?;
    Ok(logos)
}

pub async fn insert<'e, E>(executor: E, logo: &Logo) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT INTO logos (id, name, svg) VALUES (?, ?, ?)")
        .bind(logo.id)
        .bind(&logo.name)
        .bind(&logo.svg)
        .execute(executor)
        .await?;
    Ok(())
}
