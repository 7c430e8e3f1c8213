use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::build_id::{BuildId, BuildIdProvider, FixedBuildId, GitRevision};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub build: BuildSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DatabaseSettings {
    /// SQLite file; defaults to the user data directory
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BuildSettings {
    /// Fixed build id. When unset the git revision of `repo_dir` is used.
    pub id: Option<String>,
    pub repo_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn app_dir(base: Option<PathBuf>, what: &str) -> Result<PathBuf> {
    let dir = if cfg!(target_os = "linux") {
        // Use XDG directories on Linux
        base.with_context(|| format!("Failed to get XDG {} directory", what))?
            .join("grapher-admin")
    } else {
        dirs::home_dir()
            .context("Failed to get home directory")?
            .join(".grapher-admin")
    };
    Ok(dir)
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        Ok(app_dir(dirs::config_dir(), "config")?.join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        debug!("Saving config to: {:?}", config_path);

        if let Some(dir) = config_path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create config directory: {:?}", dir))?;
                info!("Created config directory: {:?}", dir);
            }
        }

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database.path {
            Some(path) => Ok(path.clone()),
            None => Ok(app_dir(dirs::data_dir(), "data")?.join("grapher.db")),
        }
    }

    /// Provider for the build id: the fixed id when configured, git otherwise
    pub fn build_id_provider(&self) -> Box<dyn BuildIdProvider> {
        match &self.build.id {
            Some(id) => Box::new(FixedBuildId(id.clone())),
            None => Box::new(GitRevision::new(
                self.build
                    .repo_dir
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(".")),
            )),
        }
    }

    /// Resolve the build id once for the lifetime of the process
    pub async fn resolve_build_id(&self) -> Result<BuildId> {
        let provider = self.build_id_provider();
        BuildId::resolve(provider.as_ref())
            .await
            .context("Failed to determine build id")
    }
}
