use anyhow::{Context, Result};
use clap::Parser;
use log::info;

mod cli;

use cli::commands::{self, Session};
use cli::{Cli, Commands};
use grapher_admin::config::LoggingSettings;

fn init_logging(settings: &LoggingSettings) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(&settings.level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if let Some(path) = &settings.file {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    }

    builder.init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let session = Session::load(&cli)?;
    init_logging(&session.config.logging)?;
    info!("Starting grapher-admin");

    match &cli.command {
        Commands::Init => commands::init::init_command(&session).await,
        Commands::Import { file } => commands::import::import_command(&session, file).await,
        Commands::Chart(args) => commands::chart::chart_command(&session, args).await,
        Commands::Db(args) => commands::db::db_command(&session, args).await,
    }
}
