//! Shopforge dataset generator CLI.
//!
//! Generates the five entity tables (users, products, orders, order
//! items, payments) and writes them as CSV files to the data
//! directory. Ingestion into SQLite is a separate batch job,
//! `shopforge-ingest`.

use std::path::PathBuf;

use clap::Parser;
use datagen::{export_csv, generate, GeneratorConfig, DEFAULT_ORDER_COUNT};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "shopforge-generate")]
#[command(version)]
#[command(about = "Generate synthetic e-commerce datasets", long_about = None)]
struct Cli {
    /// Approximate number of orders to generate; user and product
    /// counts are derived from it
    #[arg(long, default_value_t = DEFAULT_ORDER_COUNT)]
    rows: u32,

    /// Random seed for reproducibility (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory for the generated CSV files
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shopforge_generate=info,datagen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(datagen::random_seed);
    info!(seed, "using random seed");

    let config = GeneratorConfig::new(cli.rows, seed)?;
    let dataset = generate(&config)?;
    export_csv(&dataset, &cli.data_dir)?;

    info!(path = %cli.data_dir.display(), "data generation complete");
    Ok(())
}
