use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::*;
use std::sync::Arc;

use grapher_admin::charts::{CacheTagDeriver, find_with_redirects, resolve_config};
use grapher_admin::models::Chart;
use grapher_admin::store::{EntityStore, SqliteStore};
use grapher_admin::Error;

use super::Session;

#[derive(Args)]
pub struct ChartCommands {
    #[command(subcommand)]
    pub command: ChartSubcommands,
}

#[derive(Subcommand)]
pub enum ChartSubcommands {
    /// Show a published chart, following slug redirects
    Show {
        /// Slug or numeric id
        identifier: String,
    },
    /// Print the resolved configuration JSON
    Config {
        /// Slug or numeric id
        identifier: String,
        /// Single-line output
        #[arg(long)]
        compact: bool,
    },
    /// Print the cache tag for the chart's data
    CacheTag {
        /// Slug or numeric id
        identifier: String,
    },
}

pub async fn chart_command(session: &Session, args: &ChartCommands) -> Result<()> {
    let pool = session.open_pool().await?;
    let store = Arc::new(SqliteStore::new(pool.clone()));

    let result = match &args.command {
        ChartSubcommands::Show { identifier } => {
            let chart = lookup(store.as_ref(), identifier).await?;
            print_chart(&chart);
            Ok(())
        }
        ChartSubcommands::Config {
            identifier,
            compact,
        } => {
            let chart = lookup(store.as_ref(), identifier).await?;
            let payload = resolve_config(store.as_ref(), &chart).await?;
            let rendered = if *compact {
                serde_json::to_string(&payload)
            } else {
                serde_json::to_string_pretty(&payload)
            }
            .context("Failed to serialize chart config")?;
            println!("{}", rendered);
            Ok(())
        }
        ChartSubcommands::CacheTag { identifier } => {
            let chart = lookup(store.as_ref(), identifier).await?;
            let build_id = session.config.resolve_build_id().await?;
            let deriver = CacheTagDeriver::new(store.clone(), build_id);
            let tag = deriver.compute(&chart).await?;
            println!("{}", tag);
            Ok(())
        }
    };

    pool.close().await;
    result
}

async fn lookup(store: &dyn EntityStore, identifier: &str) -> Result<Chart> {
    match find_with_redirects(store, identifier).await {
        Ok(chart) => Ok(chart),
        Err(err @ Error::DanglingRedirect { .. }) => {
            eprintln!("{} {}", "Integrity fault:".red().bold(), err);
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

fn print_chart(chart: &Chart) {
    println!("{} {}", format!("#{}", chart.id).dimmed(), chart.name.bold());
    println!("  slug:      {}", chart.slug.as_deref().unwrap_or("-").cyan());
    println!(
        "  type:      {}",
        chart.chart_type.map(|t| t.label()).unwrap_or("-")
    );
    println!("  published: {}", chart.published);
    println!("  starred:   {}", chart.starred);
    println!("  updated:   {}", chart.updated_at);
    if !chart.origin_url.is_empty() {
        println!("  origin:    {}", chart.origin_url);
    }
    if let Some(editor) = &chart.last_edited_by {
        println!("  editor:    {}", editor);
    }
}
