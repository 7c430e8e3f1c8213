use anyhow::Result;
use colored::*;
use std::path::Path;

use grapher_admin::store::compat;

use super::Session;

pub async fn import_command(session: &Session, file: &Path) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("Dump file does not exist: {}", file.display());
    }

    let pool = session.open_pool().await?;
    let summary = compat::import_from_toml(&pool, file).await?;
    pool.close().await;

    println!("{}", "Import complete".green().bold());
    println!("  datasets:  {}", summary.datasets);
    println!("  variables: {}", summary.variables);
    println!("  charts:    {}", summary.charts);
    println!("  logos:     {}", summary.logos);
    println!("  redirects: {}", summary.redirects);
    if summary.malformed_configs > 0 {
        println!(
            "{}",
            format!("  {} chart(s) have a malformed config", summary.malformed_configs).yellow()
        );
    }
    Ok(())
}
