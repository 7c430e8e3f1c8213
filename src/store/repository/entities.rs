//! Repository for entities and their data values

use sqlx::{Executor, Sqlite, SqlitePool};

use crate::error::Result;
use crate::models::{DataValue, Entity};

pub async fn insert<'e, E>(executor: E, entity: &Entity) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT INTO entities (id, code, name, display_name, validated) VALUES (?, ?, ?, ?, ?)")
        .bind(entity.id)
        .bind(&entity.code)
        .bind(&entity.name)
        .bind(&entity.display_name)
        .bind(entity.validated)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn insert_data_value<'e, E>(executor: E, value: &DataValue) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT INTO data_values (id, value, entity_id, variable_id, year) VALUES (?, ?, ?, ?, ?)")
        .bind(value.id)
        .bind(&value.value)
        .bind(value.entity_id)
        .bind(value.variable_id)
        .bind(value.year)
        .execute(executor)
        .await?;
    Ok(())
}

/// Get data values of a variable ordered by entity and year
pub async fn data_values_for_variable(pool: &SqlitePool, variable_id: i64) -> Result<Vec<DataValue>> {
    let values = sqlx::query_as::<_, DataValue>(
        r#"
        SELECT id, value, entity_id, variable_id, year
        FROM data_values
        WHERE variable_id = ?
        ORDER BY entity_id, year
        "#,
    )
    .bind(variable_id)
    .fetch_all(pool)
    .await?;

    Ok(values)
}
