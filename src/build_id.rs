//! Identifier of the currently deployed build
//!
//! Resolved once at startup and passed around as an immutable [`BuildId`];
//! cache tag computation never shells out.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::process::Command;

/// Source of a stable build identifier
#[async_trait]
pub trait BuildIdProvider: Send + Sync {
    async fn current_build_id(&self) -> Result<String>;
}

/// Reads `HEAD` of a git checkout
#[derive(Debug, Clone)]
pub struct GitRevision {
    repo_dir: PathBuf,
}

impl GitRevision {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }
}

#[async_trait]
impl BuildIdProvider for GitRevision {
    async fn current_build_id(&self) -> Result<String> {
        let output = Command::new("git")
            .args(["rev-parse", "HEAD"])
            .current_dir(&self.repo_dir)
            .output()
            .await
            .with_context(|| format!("Failed to run git in {}", self.repo_dir.display()))?;

        if !output.status.success() {
            anyhow::bail!(
                "git rev-parse HEAD failed in {}: {}",
                self.repo_dir.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let revision = String::from_utf8(output.stdout)
            .context("git rev-parse printed non UTF-8 output")?
            .trim()
            .to_string();

        if revision.is_empty() {
            anyhow::bail!("git rev-parse HEAD printed nothing in {}", self.repo_dir.display());
        }
        Ok(revision)
    }
}

/// A build id taken verbatim from configuration
#[derive(Debug, Clone)]
pub struct FixedBuildId(pub String);

#[async_trait]
impl BuildIdProvider for FixedBuildId {
    async fn current_build_id(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Resolved build identifier, cheap to clone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildId(Arc<str>);

impl BuildId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// Ask the provider once and freeze the answer.
    pub async fn resolve(provider: &dyn BuildIdProvider) -> Result<Self> {
        let id = provider.current_build_id().await?;
        log::debug!("Resolved build id: {}", id);
        Ok(Self::new(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
