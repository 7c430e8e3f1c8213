//! Entity store: the relational lookups chart operations depend on

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::collections::BTreeSet;

use crate::error::Result;
use crate::models::{Chart, ChartSlugRedirect, Logo, Variable};

pub mod compat;
pub mod db;
pub mod repository;

/// Read access to charts and the records they reference
///
/// Every method is a single read; implementations do no retrying of their
/// own and report infrastructure faults as `Error::StoreUnavailable`.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// The published chart with this slug, or with this id when one is given
    async fn get_chart_by_slug_or_id(&self, slug: &str, id: Option<i64>) -> Result<Option<Chart>>;

    async fn get_published_chart(&self, id: i64) -> Result<Option<Chart>>;

    /// Variables for the ids that exist; missing ids are skipped
    async fn get_variables_by_ids(&self, ids: &BTreeSet<i64>) -> Result<Vec<Variable>>;

    async fn get_redirect_by_slug(&self, slug: &str) -> Result<Option<ChartSlugRedirect>>;

    async fn get_logos_by_names(&self, names: &[String]) -> Result<Vec<Logo>>;
}

/// [`EntityStore`] backed by a SQLite pool
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl EntityStore for SqliteStore {
    async fn get_chart_by_slug_or_id(&self, slug: &str, id: Option<i64>) -> Result<Option<Chart>> {
        repository::charts::get_by_slug_or_id(&self.pool, slug, id).await
    }

    async fn get_published_chart(&self, id: i64) -> Result<Option<Chart>> {
        repository::charts::get_published(&self.pool, id).await
    }

    async fn get_variables_by_ids(&self, ids: &BTreeSet<i64>) -> Result<Vec<Variable>> {
        repository::variables::get_by_ids(&self.pool, ids).await
    }

    async fn get_redirect_by_slug(&self, slug: &str) -> Result<Option<ChartSlugRedirect>> {
        repository::redirects::get_by_slug(&self.pool, slug).await
    }

    async fn get_logos_by_names(&self, names: &[String]) -> Result<Vec<Logo>> {
        repository::logos::get_by_names(&self.pool, names).await
    }
}
