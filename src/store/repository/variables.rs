//! Repository for variables and variable types

use chrono::{DateTime, Utc};
use sqlx::{Executor, QueryBuilder, Sqlite, SqlitePool};
use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::models::{Variable, VariableType};

const VARIABLE_COLUMNS: &str = "id, name, unit, description, code, coverage, timespan, dataset_id, \
     source_id, variable_type_id, uploaded_by, uploaded_at, created_at, updated_at";

/// Get every variable whose id is in `ids`, ordered by id
///
/// Ids with no row are silently absent from the result.
pub async fn get_by_ids(pool: &SqlitePool, ids: &BTreeSet<i64>) -> Result<Vec<Variable>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = QueryBuilder::<Sqlite>::new(format!(
        "SELECT {VARIABLE_COLUMNS} FROM variables WHERE id IN ("
    ));
    let mut separated = query.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(") ORDER BY id");

    let variables = query.build_query_as::<Variable>().fetch_all(pool).await?;
    Ok(variables)
}

/// Insert a variable with an explicit id
pub async fn insert<'e, E>(executor: E, variable: &Variable) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(&format!(
        "INSERT INTO variables ({VARIABLE_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
    ))
    .bind(variable.id)
    .bind(&variable.name)
    .bind(&variable.unit)
    .bind(&variable.description)
    .bind(&variable.code)
    .bind(&variable.coverage)
    .bind(&variable.timespan)
    .bind(variable.dataset_id)
    .bind(variable.source_id)
    .bind(variable.variable_type_id)
    .bind(&variable.uploaded_by)
    .bind(variable.uploaded_at)
    .bind(variable.created_at)
    .bind(variable.updated_at)
    .execute(executor)
    .await?;

    log::debug!("Inserted variable {} ({})", variable.id, variable.name);
    Ok(())
}

/// Record that a variable's data changed
pub async fn set_updated_at<'e, E>(executor: E, id: i64, at: DateTime<Utc>) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("UPDATE variables SET updated_at = ? WHERE id = ?")
        .bind(at)
        .bind(id)
        .execute(executor)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("variable {}", id)));
    }
    Ok(())
}

/// Delete a variable and, by cascade, its data values
///
/// Charts mentioning the variable are left as they are.
pub async fn delete<'e, E>(executor: E, id: i64) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM variables WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("variable {}", id)));
    }
    log::info!("Deleted variable {}", id);
    Ok(())
}

pub async fn insert_type<'e, E>(executor: E, variable_type: &VariableType) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT INTO variable_types (id, name, is_sortable) VALUES (?, ?, ?)")
        .bind(variable_type.id)
        .bind(&variable_type.name)
        .bind(variable_type.is_sortable)
        .execute(executor)
        .await?;
    Ok(())
}

/// Count variables owned by a dataset
pub async fn count_for_dataset(pool: &SqlitePool, dataset_id: i64) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM variables WHERE dataset_id = ?")
        .bind(dataset_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}
