//! Content-derived cache tags for chart data
//!
//! A tag is the MD5 of the chart's `updated_at`, the build id and the
//! `updated_at` of every variable the chart's dimensions reference. It
//! changes whenever any of those change and is stable otherwise, so CDN
//! and browser caches can hold chart data until something moves.

use chrono::{DateTime, SecondsFormat, Utc};
use md5::Context;
use std::fmt;
use std::sync::Arc;

use crate::build_id::BuildId;
use crate::error::Result;
use crate::models::{Chart, Variable};
use crate::store::EntityStore;

/// Opaque 32-character lowercase hex digest
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheTag(String);

impl CacheTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub struct CacheTagDeriver {
    store: Arc<dyn EntityStore>,
    build_id: BuildId,
}

impl CacheTagDeriver {
    pub fn new(store: Arc<dyn EntityStore>, build_id: BuildId) -> Self {
        Self { store, build_id }
    }

    pub fn build_id(&self) -> &BuildId {
        &self.build_id
    }

    /// Compute the cache tag for `chart`.
    ///
    /// Variable ids that no longer exist contribute nothing.
    pub async fn compute(&self, chart: &Chart) -> Result<CacheTag> {
        let config = chart.parsed_config()?;
        let ids = config.variable_ids();

        let mut variables = if ids.is_empty() {
            Vec::new()
        } else {
            self.store.get_variables_by_ids(&ids).await?
        };
        if variables.len() < ids.len() {
            log::debug!(
                "Chart {} references {} variables, {} found",
                chart.id,
                ids.len(),
                variables.len()
            );
        }

        // Store iteration order must not leak into the tag.
        variables.sort_by_key(|v| v.id);

        let composite = composite_key(chart.updated_at, &self.build_id, &variables);
        let mut hasher = Context::new();
        hasher.consume(composite.as_bytes());
        Ok(CacheTag(format!("{:x}", hasher.finalize())))
    }
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn composite_key(chart_updated_at: DateTime<Utc>, build_id: &BuildId, variables: &[Variable]) -> String {
    let variable_stamps: Vec<String> = variables
        .iter()
        .map(|v| v.updated_at.map(format_timestamp).unwrap_or_default())
        .collect();

    format!(
        "{} + {}{}",
        format_timestamp(chart_updated_at),
        build_id,
        variable_stamps.join(" + ")
    )
}
