//! CLI administration tool for shorturl-service.
//!
//! Inspects stored mappings and checks the database without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show mapping count and highest identifier
//! cargo run --bin admin -- stats
//!
//! # Show the 10 most recent mappings
//! cargo run --bin admin -- list --limit 10
//!
//! # Show a single mapping
//! cargo run --bin admin -- lookup 42
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database variables as the server: `DATABASE_URL`, or
//! `DB_HOST` / `DB_PORT` / `DB_USER` / `DB_PASSWORD` / `DB_NAME`.

use shorturl_service::config::Config;
use shorturl_service::domain::repositories::UrlRepository;
use shorturl_service::infrastructure::persistence::PgUrlRepository;
use shorturl_service::server::connect_database;
use shorturl_service::utils::short_id::parse_short_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorturl-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show mapping statistics
    Stats,

    /// List the most recent mappings
    List {
        /// Maximum number of mappings to show
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },

    /// Show the mapping for a short identifier
    Lookup {
        /// Short identifier
        short_url: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    config.validate()?;

    let pool = connect_database(&config).await?;
    let repo = PgUrlRepository::new(Arc::new(pool.clone()));

    match cli.command {
        Commands::Stats => handle_stats(&repo).await?,
        Commands::List { limit } => list_mappings(&repo, limit).await?,
        Commands::Lookup { short_url } => lookup_mapping(&repo, &short_url).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays the number of mappings and the highest identifier in use.
async fn handle_stats(repo: &PgUrlRepository) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    let highest = repo
        .list_recent(1)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .first()
        .map(|m| m.short_url.to_string())
        .unwrap_or_else(|| "-".to_string());

    println!("  Mappings:         {}", count.to_string().bright_green().bold());
    println!("  Highest short id: {}", highest.bright_green().bold());
    println!();

    Ok(())
}

/// Prints the most recent mappings, newest first.
async fn list_mappings(repo: &PgUrlRepository, limit: i64) -> Result<()> {
    println!("{}", "🔗 Recent Mappings".bright_blue().bold());
    println!();

    let mappings = repo
        .list_recent(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    if mappings.is_empty() {
        println!("{}", "  No mappings stored yet".yellow());
        println!();
        return Ok(());
    }

    for mapping in mappings {
        println!(
            "  {:>8}  {}  {}",
            mapping.short_url.to_string().cyan(),
            mapping
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            mapping.original_url
        );
    }
    println!();

    Ok(())
}

/// Shows the mapping stored under a short identifier.
async fn lookup_mapping(repo: &PgUrlRepository, raw: &str) -> Result<()> {
    let short_url = parse_short_url(raw).context("Short identifier must be an integer")?;

    let mapping = repo
        .find_by_short_url(short_url)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match mapping {
        Some(mapping) => {
            println!("  Short id: {}", mapping.short_url.to_string().cyan());
            println!("  URL:      {}", mapping.original_url.bright_white());
            println!(
                "  Created:  {}",
                mapping.created_at.to_rfc3339().bright_black()
            );
        }
        None => {
            println!("{}", format!("⚠️  No URL found for {short_url}").yellow());
        }
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
