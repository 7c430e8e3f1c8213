//! Repository for datasets, their categories and sources

use sqlx::{Executor, Sqlite};

use crate::error::{Error, Result};
use crate::models::{Dataset, DatasetCategory, DatasetSubcategory, Source};

pub async fn insert_category<'e, E>(executor: E, category: &DatasetCategory) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT INTO dataset_categories (id, name) VALUES (?, ?)")
        .bind(category.id)
        .bind(&category.name)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn insert_subcategory<'e, E>(executor: E, subcategory: &DatasetSubcategory) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT INTO dataset_subcategories (id, name, category_id) VALUES (?, ?, ?)")
        .bind(subcategory.id)
        .bind(&subcategory.name)
        .bind(subcategory.category_id)
        .execute(executor)
        .await?;
    Ok(())
}

/// Insert a dataset with an explicit id
pub async fn insert<'e, E>(executor: E, dataset: &Dataset) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
        INSERT INTO datasets (id, name, description, namespace, category_id, subcategory_id, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(dataset.id)
    .bind(&dataset.name)
    .bind(&dataset.description)
    .bind(&dataset.namespace)
    .bind(dataset.category_id)
    .bind(dataset.subcategory_id)
    .bind(dataset.created_at)
    .bind(dataset.updated_at)
    .execute(executor)
    .await?;

    log::debug!("Inserted dataset {} ({}/{})", dataset.id, dataset.namespace, dataset.name);
    Ok(())
}

/// Delete a dataset together with the variables it owns
pub async fn delete<'e, E>(executor: E, id: i64) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query("DELETE FROM datasets WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("dataset {}", id)));
    }
    log::info!("Deleted dataset {}", id);
    Ok(())
}

pub async fn insert_source<'e, E>(executor: E, source: &Source) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query("INSERT INTO sources (id, name, description, dataset_id) VALUES (?, ?, ?, ?)")
        .bind(source.id)
        .bind(&source.name)
        .bind(&source.description)
        .bind(source.dataset_id)
        .execute(executor)
        .await?;
    Ok(())
}
