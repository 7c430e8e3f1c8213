use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::charts::config::ChartConfig;
use crate::error::{Error, Result};

/// Visualization kinds a chart may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum ChartType {
    LineChart,
    ScatterPlot,
    StackedArea,
    MultiBar,
    HorizontalMultiBar,
    DiscreteBar,
    SlopeChart,
}

impl ChartType {
    pub const ALL: [ChartType; 7] = [
        ChartType::LineChart,
        ChartType::ScatterPlot,
        ChartType::StackedArea,
        ChartType::MultiBar,
        ChartType::HorizontalMultiBar,
        ChartType::DiscreteBar,
        ChartType::SlopeChart,
    ];

    /// Tag stored in the `chart_type` column and emitted as `chart-type`
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::LineChart => "LineChart",
            ChartType::ScatterPlot => "ScatterPlot",
            ChartType::StackedArea => "StackedArea",
            ChartType::MultiBar => "MultiBar",
            ChartType::HorizontalMultiBar => "HorizontalMultiBar",
            ChartType::DiscreteBar => "DiscreteBar",
            ChartType::SlopeChart => "SlopeChart",
        }
    }

    /// Human readable label shown in the admin
    pub fn label(&self) -> &'static str {
        match self {
            ChartType::LineChart => "Line chart",
            ChartType::ScatterPlot => "Scatter plot",
            ChartType::StackedArea => "Stacked area",
            ChartType::MultiBar => "Multi bar",
            ChartType::HorizontalMultiBar => "Horizontal Multi bar",
            ChartType::DiscreteBar => "Discrete bar",
            ChartType::SlopeChart => "Slope chart",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A chart definition: JSON configuration plus relational metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Chart {
    pub id: i64,
    pub name: String,
    /// JSON-encoded configuration blob as saved by the editor
    pub config: String,
    #[serde(default)]
    pub notes: String,
    pub slug: Option<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub starred: bool,
    pub chart_type: Option<ChartType>,
    #[serde(default)]
    pub origin_url: String,
    pub last_edited_by: Option<String>,
    /// Deprecated. Written alongside `updated_at` with no documented meaning of
    /// its own; nothing derives state from it.
    pub last_edited_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    /// Advances on every save. The only freshness signal for cache tags.
    pub updated_at: DateTime<Utc>,
}

impl Chart {
    /// Parse the stored configuration into its typed view.
    pub fn parsed_config(&self) -> Result<ChartConfig> {
        ChartConfig::parse(&self.config).map_err(|source| Error::MalformedConfig {
            chart_id: self.id,
            source,
        })
    }
}
