pub mod chart;
pub mod db;
pub mod import;
pub mod init;

use anyhow::Result;
use sqlx::SqlitePool;
use std::path::PathBuf;

use grapher_admin::config::Config;

use super::app::Cli;

/// Config and paths resolved from the command line
pub struct Session {
    pub config: Config,
    pub config_path: PathBuf,
}

impl Session {
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::get_config_path()?,
        };
        let mut config = Config::load_from(&config_path)?;

        if let Some(database) = &cli.database {
            config.database.path = Some(database.clone());
        }
        if let Some(build_id) = &cli.build_id {
            config.build.id = Some(build_id.clone());
        }

        Ok(Self {
            config,
            config_path,
        })
    }

    /// Open the configured database and make sure the schema exists
    pub async fn open_pool(&self) -> Result<SqlitePool> {
        let pool = grapher_admin::store::db::connect(&self.config.database_path()?).await?;
        grapher_admin::store::db::init_schema(&pool).await?;
        Ok(pool)
    }
}
