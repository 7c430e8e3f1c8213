use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_namespace() -> String {
    "owid".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DatasetCategory {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DatasetSubcategory {
    pub id: i64,
    pub name: String,
    pub category_id: Option<i64>,
}

/// A named collection of variables. `(name, namespace)` is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Dataset {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    pub category_id: Option<i64>,
    pub subcategory_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Provenance record for variables. `(name, dataset_id)` is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Source {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub dataset_id: Option<i64>,
}
