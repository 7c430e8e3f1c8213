//! Error types for chart lookups and configuration resolution

use thiserror::Error;

/// Errors surfaced by the store and the chart operations built on it.
#[derive(Debug, Error)]
pub enum Error {
    /// The chart's stored configuration is not a usable JSON object.
    #[error("Chart {chart_id} has a malformed config: {source}")]
    MalformedConfig {
        chart_id: i64,
        #[source]
        source: serde_json::Error,
    },

    /// The store could not be reached or failed mid-query. Callers may retry.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// A write violated a unique or foreign key constraint.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// A redirect row points at a chart that is missing or unpublished.
    #[error("Redirect '{slug}' points at chart {chart_id}, which is missing or unpublished")]
    DanglingRedirect { slug: String, chart_id: i64 },

    /// No published chart and no redirect for the identifier.
    #[error("Chart not found: {0}")]
    NotFound(String),
}

impl Error {
    /// True for every outcome a client should see as "no such chart".
    ///
    /// A dangling redirect is a data-integrity fault internally but still
    /// renders as a plain miss to whoever asked for the chart.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_) | Error::DanglingRedirect { .. })
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db)
                if db.is_unique_violation()
                    || db.is_foreign_key_violation()
                    || db.is_check_violation() =>
            {
                Error::Constraint(db.message().to_string())
            }
            _ => Error::StoreUnavailable(err.to_string()),
        }
    }
}

/// Result type for store and chart operations.
pub type Result<T> = std::result::Result<T, Error>;
