//! CLI administration tool for shorturls.
//!
//! Read-only views over the stored short URLs, without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List short URLs, newest first
//! cargo run --bin admin -- list --page 1 --page-size 20
//!
//! # Show a single short URL
//! cargo run --bin admin -- show B
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use shorturls::application::services::ShortUrlService;
use shorturls::domain::entities::ShortUrl;
use shorturls::infrastructure::persistence::PgShortUrlRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for inspecting shorturls.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// List short URLs, newest first
    List {
        /// Page number (1-indexed)
        #[arg(short, long, default_value_t = 1)]
        page: i64,

        /// Rows per page
        #[arg(short = 's', long, default_value_t = 20)]
        page_size: i64,
    },

    /// Show one short URL
    Show {
        /// Short code, e.g. "B"
        short_url: String,
    },

    /// Show statistics
    Stats,

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
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let service = ShortUrlService::new(Arc::new(PgShortUrlRepository::new(Arc::new(pool))));

    match cli.command {
        Commands::List { page, page_size } => list_short_urls(&service, page, page_size).await?,
        Commands::Show { short_url } => show_short_url(&service, &short_url).await?,
        Commands::Stats => handle_stats(&service).await?,
        Commands::Db { action } => handle_db_action(action, &service).await?,
    }

    Ok(())
}

/// Lists short URLs as a table.
///
/// # Output Format
///
/// ```text
/// Short URLs (page 1)
///
///   Short URL    Date submitted       Usage count
///   ─────────────────────────────────────────────
///   C            2024-01-16 14:20     0
///   B            2024-01-15 10:30     12
/// ```
async fn list_short_urls(service: &ShortUrlService, page: i64, page_size: i64) -> Result<()> {
    println!(
        "{}",
        format!("Short URLs (page {})", page).bright_blue().bold()
    );
    println!();

    let records = service
        .list(page, page_size)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list short URLs: {}", e))?;

    if records.is_empty() {
        println!("{}", "  No short URLs found".yellow());
        return Ok(());
    }

    println!(
        "  {:<12} {:<20} {}",
        "Short URL".bright_white().bold(),
        "Date submitted".bright_white().bold(),
        "Usage count".bright_white().bold()
    );
    println!("  {}", "─".repeat(45).bright_black());

    for record in &records {
        println!(
            "  {:<12} {:<20} {}",
            record.short_code().cyan(),
            format_date(record).bright_black(),
            record.usage_count.to_string().bright_green()
        );
    }

    println!();
    println!(
        "  Shown: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints every field of a single short URL.
async fn show_short_url(service: &ShortUrlService, short_url: &str) -> Result<()> {
    let record = service
        .info(short_url)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", short_url, e))?;

    println!("{}", record.to_string().bright_blue().bold());
    println!();
    println!("  Id:             {}", record.id.to_string().bright_black());
    println!("  Short URL:      {}", record.short_code().cyan());
    println!("  URL:            {}", record.url.bright_white());
    println!("  Date submitted: {}", format_date(&record));
    println!(
        "  Usage count:    {}",
        record.usage_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Displays record and usage totals.
async fn handle_stats(service: &ShortUrlService) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let summary = service
        .summary()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?;

    println!(
        "  Short URLs:  {}",
        summary.records.to_string().bright_green().bold()
    );
    println!(
        "  Total usage: {}",
        summary.total_usage.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, service: &ShortUrlService) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            service
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "Database connection OK".green().bold());
        }
    }

    Ok(())
}

fn format_date(record: &ShortUrl) -> String {
    record.date_submitted.format("%Y-%m-%d %H:%M").to_string()
}
