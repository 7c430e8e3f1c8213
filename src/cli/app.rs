use super::commands::chart::ChartCommands;
use super::commands::db::DbCommands;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grapher-admin")]
#[command(about = "Inspect charts, resolve their configs and cache tags")]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database, overriding the config file
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// Build id, overriding the config file and git
    #[arg(long, global = true)]
    pub build_id: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config and create the database schema
    Init,
    /// Seed the database from a TOML dump
    Import {
        /// Dump file
        file: PathBuf,
    },
    /// Chart lookups
    Chart(ChartCommands),
    /// Database diagnostics
    Db(DbCommands),
}
