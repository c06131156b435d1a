//! Shopforge ingestion job.
//!
//! Reads the CSV files produced by `shopforge-generate`, recreates the
//! constrained SQLite schema and bulk-inserts every table in
//! dependency order. Re-running drops and reloads all tables.

use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

use config::IngestConfig;
use dataset_store::{load_dataset, Database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = IngestConfig::from_env();

    let log_level = match config.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("shopforge_ingest={log_level},dataset_store={log_level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Reject a missing data directory before touching the database.
    let dataset = load_dataset(&config.data_dir)?;

    info!(path = %config.db_path.display(), "connecting to SQLite database");
    let db = Database::connect(&config.db_path).await?;

    db.reset_schema().await?;
    db.ingest(&dataset).await?;

    for (table, rows) in db.table_counts().await? {
        info!(table, rows, "table loaded");
    }

    info!("SQLite ingestion completed successfully");
    Ok(())
}
