//! TOML dump import
//!
//! Seeds a database from a single TOML file holding every table as an
//! array of tables. The whole dump goes in one transaction.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::path::Path;

use crate::models::{
    Chart, ChartSlugRedirect, DataValue, Dataset, DatasetCategory, DatasetSubcategory, Entity, Logo,
    Source, Variable, VariableType,
};
use crate::store::repository::{charts, datasets, entities, logos, redirects, variables};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dump {
    #[serde(default)]
    pub categories: Vec<DatasetCategory>,
    #[serde(default)]
    pub subcategories: Vec<DatasetSubcategory>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub variable_types: Vec<VariableType>,
    #[serde(default)]
    pub variables: Vec<Variable>,
    #[serde(default)]
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub data_values: Vec<DataValue>,
    #[serde(default)]
    pub charts: Vec<Chart>,
    #[serde(default)]
    pub logos: Vec<Logo>,
    #[serde(default)]
    pub redirects: Vec<ChartSlugRedirect>,
}

/// Row counts written by an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub datasets: usize,
    pub variables: usize,
    pub charts: usize,
    pub logos: usize,
    pub redirects: usize,
    pub malformed_configs: usize,
}

/// Import a TOML dump file into the database
pub async fn import_from_toml(pool: &SqlitePool, path: &Path) -> Result<ImportSummary> {
    log::info!("Importing TOML dump: {:?}", path);

    let toml_content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read TOML file: {:?}", path))?;

    let dump: Dump = toml::from_str(&toml_content)
        .with_context(|| format!("Failed to parse TOML file: {:?}", path))?;

    import_dump(pool, &dump).await
}

/// Insert every record of `dump`; nothing is written if any insert fails
pub async fn import_dump(pool: &SqlitePool, dump: &Dump) -> Result<ImportSummary> {
    let mut tx = pool.begin().await.context("Failed to start transaction")?;

    for category in &dump.categories {
        datasets::insert_category(&mut *tx, category)
            .await
            .with_context(|| format!("Failed to import category '{}'", category.name))?;
    }
    for subcategory in &dump.subcategories {
        datasets::insert_subcategory(&mut *tx, subcategory)
            .await
            .with_context(|| format!("Failed to import subcategory '{}'", subcategory.name))?;
    }
    for dataset in &dump.datasets {
        datasets::insert(&mut *tx, dataset)
            .await
            .with_context(|| format!("Failed to import dataset '{}'", dataset.name))?;
    }
    for source in &dump.sources {
        datasets::insert_source(&mut *tx, source)
            .await
            .with_context(|| format!("Failed to import source '{}'", source.name))?;
    }
    for variable_type in &dump.variable_types {
        variables::insert_type(&mut *tx, variable_type)
            .await
            .with_context(|| format!("Failed to import variable type '{}'", variable_type.name))?;
    }
    for variable in &dump.variables {
        variables::insert(&mut *tx, variable)
            .await
            .with_context(|| format!("Failed to import variable '{}'", variable.name))?;
    }
    for entity in &dump.entities {
        entities::insert(&mut *tx, entity)
            .await
            .with_context(|| format!("Failed to import entity '{}'", entity.name))?;
    }
    for value in &dump.data_values {
        entities::insert_data_value(&mut *tx, value)
            .await
            .with_context(|| format!("Failed to import data value {}", value.id))?;
    }

    let mut malformed_configs = 0;
    for chart in &dump.charts {
        if let Err(e) = chart.parsed_config() {
            log::warn!("Importing chart {} with unusable config: {}", chart.id, e);
            malformed_configs += 1;
        }
        charts::insert(&mut *tx, chart)
            .await
            .with_context(|| format!("Failed to import chart {} ({})", chart.id, chart.name))?;
    }
    for logo in &dump.logos {
        logos::insert(&mut *tx, logo)
            .await
            .with_context(|| format!("Failed to import logo '{}'", logo.name))?;
    }
    for redirect in &dump.redirects {
        redirects::insert(&mut *tx, redirect)
            .await
            .with_context(|| format!("Failed to import redirect '{}'", redirect.slug))?;
    }

    tx.commit().await.context("Failed to commit import")?;

    let summary = ImportSummary {
        datasets: dump.datasets.len(),
        variables: dump.variables.len(),
        charts: dump.charts.len(),
        logos: dump.logos.len(),
        redirects: dump.redirects.len(),
        malformed_configs,
    };
    log::info!("Imported {:?}", summary);
    Ok(summary)
}
