//! Ingestion configuration.

use std::env;
use std::path::PathBuf;

/// Ingestion configuration loaded from environment variables.
///
/// The job takes no command line options; paths default to the layout
/// `shopforge-generate` writes.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Directory holding the generated CSV files.
    pub data_dir: PathBuf,
    /// SQLite database file to (re)load.
    pub db_path: PathBuf,
    /// Log level.
    pub log_level: String,
}

impl IngestConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("SHOPFORGE_DATA_DIR")
                .unwrap_or_else(|_| "data".to_string())
                .into(),
            db_path: env::var("SHOPFORGE_DB_PATH")
                .unwrap_or_else(|_| "ecommerce.db".to_string())
                .into(),
            log_level: env::var("SHOPFORGE_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
