use serde::{Deserialize, Serialize};

/// A country, region or other unit that data values are reported for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Entity {
    pub id: i64,
    pub code: Option<String>,
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub validated: bool,
}

/// One observation of a variable for an entity in a year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct DataValue {
    pub id: i64,
    pub value: String,
    pub entity_id: Option<i64>,
    pub variable_id: i64,
    pub year: i64,
}
