//! CSV loading of a previously generated dataset.

use std::path::Path;

use entities::{
    Dataset, ORDERS_CSV, ORDER_ITEMS_CSV, PAYMENTS_CSV, PRODUCTS_CSV, USERS_CSV,
};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::{StoreError, StoreResult};

/// Reads the five entity CSV files under `data_dir` into a [`Dataset`].
///
/// Rejects a missing data directory before anything else, so ingestion
/// never mutates the database when there is nothing to load.
pub fn load_dataset(data_dir: &Path) -> StoreResult<Dataset> {
    if !data_dir.is_dir() {
        return Err(StoreError::MissingDataDir(data_dir.to_path_buf()));
    }

    let dataset = Dataset {
        users: read_table(&data_dir.join(USERS_CSV))?,
        products: read_table(&data_dir.join(PRODUCTS_CSV))?,
        orders: read_table(&data_dir.join(ORDERS_CSV))?,
        order_items: read_table(&data_dir.join(ORDER_ITEMS_CSV))?,
        payments: read_table(&data_dir.join(PAYMENTS_CSV))?,
    };

    info!(
        path = %data_dir.display(),
        rows = dataset.row_count(),
        "loaded dataset from CSV"
    );
    Ok(dataset)
}

fn read_table<T: DeserializeOwned>(path: &Path) -> StoreResult<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)?;
    let rows = reader.deserialize().collect::<Result<Vec<T>, _>>()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_data_dir_rejected() {
        let result = load_dataset(Path::new("/nonexistent/shopforge-data"));
        assert!(matches!(result, Err(StoreError::MissingDataDir(_))));
    }

    #[test]
    fn test_export_then_load_round_trips() {
        let dataset =
            datagen::generate(&datagen::GeneratorConfig::new(10, 5).unwrap()).unwrap();
        let dir = tempfile::tempdir().unwrap();

        datagen::export_csv(&dataset, dir.path()).unwrap();
        let loaded = load_dataset(dir.path()).unwrap();

        assert_eq!(loaded, dataset);
    }

    #[test]
    fn test_malformed_csv_rejected() {
        let dataset =
            datagen::generate(&datagen::GeneratorConfig::new(5, 6).unwrap()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        datagen::export_csv(&dataset, dir.path()).unwrap();

        std::fs::write(
            dir.path().join(PRODUCTS_CSV),
            "product_id,product_name,category,price,stock_quantity\n1,Bad Row,books,not_a_price,2\n",
        )
        .unwrap();

        assert!(matches!(load_dataset(dir.path()), Err(StoreError::Csv(_))));
    }
}
