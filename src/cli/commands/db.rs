use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;

use grapher_admin::store::db;

use super::Session;

#[derive(Args)]
pub struct DbCommands {
    #[command(subcommand)]
    pub command: DbSubcommands,
}

#[derive(Subcommand)]
pub enum DbSubcommands {
    /// Show database diagnostics
    Info,
}

pub async fn db_command(session: &Session, args: &DbCommands) -> Result<()> {
    match args.command {
        DbSubcommands::Info => {
            let pool = session.open_pool().await?;
            let info = db::get_db_info(&pool).await?;
            pool.close().await;

            println!("{}", "Database".bold());
            println!("  path:           {}", session.config.database_path()?.display());
            println!("  sqlite version: {}", info.sqlite_version);
            println!("  tables:         {}", info.table_count);
            println!("  charts:         {}", info.chart_count);
            println!("  page size:      {}", info.page_size);
            println!("  journal mode:   {}", info.journal_mode);
        }
    }
    Ok(())
}
