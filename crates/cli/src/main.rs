//! Database initialization CLI.
//!
//! Flags compose: `--reset --sample-data` drops everything, recreates the
//! schema, and loads the sample catalog. Running with no flags prints
//! usage and exits without touching the database.

use std::io::{BufRead, Write};

use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

/// Initialize the waxlab database.
#[derive(Parser, Debug)]
#[command(name = "waxlab-init")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Create database tables (no-op if already created)
    #[arg(long)]
    create_tables: bool,

    /// Populate with sample data
    #[arg(long)]
    sample_data: bool,

    /// Drop existing tables and recreate (WARNING: deletes all data!)
    #[arg(long)]
    reset: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "waxlab_cli=info,waxlab_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if !cli.create_tables && !cli.sample_data && !cli.reset {
        Cli::command().print_help()?;
        return Ok(());
    }

    let database_url = config::database_url()?;
    let pool = waxlab_db::create_pool(&database_url).await?;
    waxlab_db::health_check(&pool).await?;
    tracing::info!("Database connection established");

    if cli.reset {
        if !confirm_reset()? {
            println!("Aborted.");
            return Ok(());
        }
        waxlab_db::drop_all_tables(&pool).await?;
        waxlab_db::run_migrations(&pool).await?;
        tracing::info!("Schema recreated");
    } else if cli.create_tables {
        waxlab_db::run_migrations(&pool).await?;
        tracing::info!("Tables created");
    }

    if cli.sample_data {
        let summary = waxlab_db::seed::populate_sample_data(&pool).await?;
        tracing::info!(
            ski_models = summary.ski_models,
            wax_products = summary.wax_products,
            test_sessions = summary.test_sessions,
            "Sample data populated"
        );
    }

    println!("Database initialization complete.");
    Ok(())
}

/// Ask for explicit confirmation before the destructive reset. Only the
/// exact answer "yes" proceeds.
fn confirm_reset() -> anyhow::Result<bool> {
    print!("WARNING: This will delete ALL data in the database. Are you sure? (yes/no): ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}
