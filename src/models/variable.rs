use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct VariableType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_sortable: bool,
}

/// A named, sourced time series owned by exactly one dataset.
///
/// Deleting the dataset deletes the variable. Charts only mention variables
/// by id inside their config, so a deleted variable leaves those mentions
/// dangling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Variable {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub unit: String,
    pub description: Option<String>,
    pub code: Option<String>,
    #[serde(default)]
    pub coverage: String,
    #[serde(default)]
    pub timespan: String,
    pub dataset_id: i64,
    pub source_id: i64,
    pub variable_type_id: i64,
    pub uploaded_by: Option<String>,
    pub uploaded_at: DateTime<Utc>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
