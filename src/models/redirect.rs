use serde::{Deserialize, Serialize};

/// Maps a retired slug to the chart now serving that content.
///
/// `chart_id` is not a foreign key; a redirect can outlive its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChartSlugRedirect {
    pub id: i64,
    pub slug: String,
    pub chart_id: i64,
}
