//! Typed view over a chart's stored JSON configuration
//!
//! Only the keys this crate reads are given a schema: `chart-dimensions`
//! and `logos`. Every other key rides along untouched so the resolved
//! payload can hand it back to the renderer.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

pub const DIMENSIONS_KEY: &str = "chart-dimensions";
pub const LOGOS_KEY: &str = "logos";

/// One `chart-dimensions` entry. Keys other than `variableId` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dimension {
    #[serde(rename = "variableId", default, deserialize_with = "lenient_id")]
    pub variable_id: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct ChartConfig {
    fields: Map<String, Value>,
    dimensions: Vec<Dimension>,
    logos: Vec<String>,
}

impl ChartConfig {
    /// Parse a stored configuration blob.
    ///
    /// The root must be a JSON object. A missing or `null` dimensions or
    /// logos key reads as empty.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let fields = match serde_json::from_str::<Value>(raw)? {
            Value::Object(fields) => fields,
            other => {
                return Err(de::Error::custom(format!(
                    "expected a JSON object at the root, found {}",
                    kind_of(&other)
                )));
            }
        };

        let dimensions: Vec<Dimension> = optional_key(&fields, DIMENSIONS_KEY)?;
        let logos: Vec<String> = optional_key(&fields, LOGOS_KEY)?;

        Ok(Self {
            fields,
            dimensions,
            logos,
        })
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Distinct variable ids referenced by the dimensions, ascending.
    pub fn variable_ids(&self) -> BTreeSet<i64> {
        self.dimensions.iter().filter_map(|d| d.variable_id).collect()
    }

    /// Requested logo names in the order the editor listed them
    pub fn logo_names(&self) -> &[String] {
        &self.logos
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

fn optional_key<T>(fields: &Map<String, Value>, key: &str) -> Result<Vec<T>, serde_json::Error>
where
    T: de::DeserializeOwned,
{
    match fields.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => Vec::<T>::deserialize(value)
            .map_err(|e| de::Error::custom(format!("invalid '{}': {}", key, e))),
    }
}

/// Accepts `42`, `"42"` or `null`.
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Text(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Int(id)) => Ok(Some(id)),
        Some(RawId::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("variableId '{}' is not an integer", text))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
