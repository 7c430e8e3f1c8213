//! Assemble the configuration payload a client renders

use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::error::Result;
use crate::models::Chart;
use crate::store::EntityStore;

/// Resolved configuration handed to the renderer
pub type ConfigPayload = Map<String, Value>;

pub const LOGOS_SVG_KEY: &str = "logosSVG";

/// Merge the chart's stored config with its relational fields.
///
/// Relational fields win over same-named keys in the blob. Logo names
/// without a matching record are dropped; the rest keep the requested
/// order. Nothing is written back to the store.
pub async fn resolve_config(store: &dyn EntityStore, chart: &Chart) -> Result<ConfigPayload> {
    let config = chart.parsed_config()?;

    let requested = config.logo_names().to_vec();
    let logos_svg = if requested.is_empty() {
        Vec::new()
    } else {
        let logos = store.get_logos_by_names(&requested).await?;
        let mut by_name: HashMap<String, String> = HashMap::with_capacity(logos.len());
        for logo in logos {
            by_name.entry(logo.name).or_insert(logo.svg);
        }
        requested
            .iter()
            .filter_map(|name| {
                let svg = by_name.get(name);
                if svg.is_none() {
                    log::debug!("Chart {} requests unknown logo '{}'", chart.id, name);
                }
                svg.cloned().map(Value::String)
            })
            .collect()
    };

    let mut payload = config.into_fields();
    payload.insert("id".to_string(), Value::from(chart.id));
    payload.insert("title".to_string(), Value::from(chart.name.clone()));
    payload.insert(
        "chart-type".to_string(),
        chart
            .chart_type
            .map(|t| Value::from(t.as_str()))
            .unwrap_or(Value::Null),
    );
    payload.insert("internalNotes".to_string(), Value::from(chart.notes.clone()));
    payload.insert(
        "slug".to_string(),
        chart.slug.clone().map(Value::String).unwrap_or(Value::Null),
    );
    payload.insert("data-entry-url".to_string(), Value::from(chart.origin_url.clone()));
    payload.insert("published".to_string(), Value::Bool(chart.published));
    payload.insert(LOGOS_SVG_KEY.to_string(), Value::Array(logos_svg));

    Ok(payload)
}
