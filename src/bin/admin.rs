//! CLI administration tool for the KursManager dashboard.
//!
//! Prints the overview in the terminal and runs database diagnostics without
//! starting the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Print the overview as of today
//! cargo run --bin admin -- overview
//!
//! # Print the overview as if it were another day
//! cargo run --bin admin -- overview --date 2026-03-01
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*`).

use kursmanager_dashboard::application::services::OverviewService;
use kursmanager_dashboard::config;
use kursmanager_dashboard::domain::repositories::RecordSource;
use kursmanager_dashboard::infrastructure::persistence::PgRecordSource;
use kursmanager_dashboard::server::connect_pool;
use kursmanager_dashboard::web::view::{self, DashboardView};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for the KursManager dashboard.
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
    /// Load the overview once and print it
    Overview {
        /// Reference date for upcoming courses (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
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

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Overview { date } => handle_overview(pool, date).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Loads the overview and prints every panel of the dashboard.
async fn handle_overview(pool: PgPool, date: Option<NaiveDate>) -> Result<()> {
    let today = date.unwrap_or_else(|| Utc::now().date_naive());
    let source: Arc<dyn RecordSource> = Arc::new(PgRecordSource::new(Arc::new(pool)));
    let service = OverviewService::new(source);

    service
        .load_at(today)
        .await
        .context("Failed to load overview")?;

    let view = DashboardView::render(&service.current().await, today);
    print_view(&view);

    Ok(())
}

fn print_view(view: &DashboardView) {
    println!("{}", "KursManager".bright_blue().bold());
    println!("{}", view.heute.bright_black());
    println!();

    println!(
        "  Bezahlt: {}   Ausstehend: {}",
        view.bezahlt.to_string().bright_green().bold(),
        view.unbezahlt.to_string().yellow().bold()
    );
    if let Some(umsatz) = &view.umsatz {
        println!("  Gesch. Umsatz: {}", umsatz.bright_white().bold());
    }
    println!();

    for tile in &view.kpi_tiles {
        println!(
            "  {:<14} {:>6}",
            tile.label,
            tile.value.to_string().bright_white().bold()
        );
    }
    println!();

    println!("{}", "Kurse pro Monat".bright_white().bold());
    if view.bars.is_empty() {
        println!("  {}", view::EMPTY_BARS.bright_black());
    }
    for bar in &view.bars {
        let width = (bar.height_percent as usize).div_ceil(5).max(1);
        println!("  {:<5} {} {}", bar.label, "█".repeat(width).blue(), bar.count);
    }
    println!();

    println!("{}", "Nächste Kurse".bright_white().bold());
    if view.upcoming.is_empty() {
        println!("  {}", view::EMPTY_UPCOMING.bright_black());
    }
    for item in &view.upcoming {
        println!(
            "  {:<15} {:<30} {}",
            item.datum.bright_black(),
            item.titel.cyan(),
            item.preis.as_deref().unwrap_or_default()
        );
    }
    println!();

    println!("{}", "Letzte Anmeldungen".bright_white().bold());
    if view.recent.is_empty() {
        println!("  {}", view::EMPTY_REGISTRATIONS.bright_black());
    }
    for item in &view.recent {
        let badge = if item.bezahlt {
            item.badge.green()
        } else {
            item.badge.red()
        };
        println!("  {:<12} {}", item.datum.bright_black(), badge);
    }
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
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
