use anyhow::Result;
use colored::*;

use super::Session;

pub async fn init_command(session: &Session) -> Result<()> {
    if session.config_path.exists() {
        println!("Config already exists: {}", session.config_path.display().to_string().cyan());
    } else {
        session.config.save_to(&session.config_path)?;
        println!("Wrote config: {}", session.config_path.display().to_string().cyan());
    }

    let pool = session.open_pool().await?;
    pool.close().await;

    println!(
        "{} {}",
        "Database ready:".green(),
        session.config.database_path()?.display()
    );
    Ok(())
}
