//! SQLite connection, schema reset and bulk ingestion.

use std::path::Path;

use entities::{Dataset, Order, OrderItem, Payment, Product, User};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tracing::info;

use crate::schema::{DROP_ORDER, INSERT_ORDER, SCHEMA_SQL};
use crate::StoreResult;

/// Database connection pool
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Opens (creating if missing) the database file at `db_path`,
    /// with foreign key enforcement on.
    pub async fn connect(db_path: &Path) -> StoreResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Opens an in-memory database. A single connection keeps every
    /// query on the same memory store.
    pub async fn connect_in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::new()
            .in_memory(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Drops all dataset tables (children first) and recreates them
    /// with their constraints. Destructive: a re-run reloads from
    /// scratch rather than appending.
    pub async fn reset_schema(&self) -> StoreResult<()> {
        info!("dropping existing tables");
        for table in DROP_ORDER {
            sqlx::query(&format!("DROP TABLE IF EXISTS {table};"))
                .execute(&self.pool)
                .await?;
        }

        info!("creating tables with constraints");
        sqlx::raw_sql(SCHEMA_SQL).execute(&self.pool).await?;
        Ok(())
    }

    /// Inserts every table of `dataset` in dependency order (parents
    /// before children). Each table is one transaction; a constraint
    /// violation rolls back that table's whole batch.
    pub async fn ingest(&self, dataset: &Dataset) -> StoreResult<()> {
        self.insert_users(&dataset.users).await?;
        self.insert_products(&dataset.products).await?;
        self.insert_orders(&dataset.orders).await?;
        self.insert_order_items(&dataset.order_items).await?;
        self.insert_payments(&dataset.payments).await?;
        Ok(())
    }

    async fn insert_users(&self, users: &[User]) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;
        for user in users {
            sqlx::query(
                "INSERT INTO users (user_id, full_name, email, signup_date, phone_number) \
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(user.user_id)
            .bind(&user.full_name)
            .bind(&user.email)
            .bind(user.signup_date)
            .bind(&user.phone_number)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        info!(rows = users.len(), "inserted users");
        Ok(())
    }

    async fn insert_products(&self, products: &[Product]) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;
        for product in products {
            sqlx::query(
                "INSERT INTO products (product_id, product_name, category, price, \
                 stock_quantity) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(product.product_id)
            .bind(&product.product_name)
            .bind(product.category.as_str())
            .bind(product.price)
            .bind(product.stock_quantity)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        info!(rows = products.len(), "inserted products");
        Ok(())
    }

    async fn insert_orders(&self, orders: &[Order]) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;
        for order in orders {
            sqlx::query(
                "INSERT INTO orders (order_id, user_id, order_date, total_amount, \
                 order_status) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(order.order_id)
            .bind(order.user_id)
            .bind(order.order_date)
            .bind(order.total_amount)
            .bind(order.order_status.as_str())
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        info!(rows = orders.len(), "inserted orders");
        Ok(())
    }

    async fn insert_order_items(&self, items: &[OrderItem]) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;
        for item in items {
            sqlx::query(
                "INSERT INTO order_items (item_id, order_id, product_id, quantity, \
                 unit_price, line_total) VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(item.item_id)
            .bind(item.order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.unit_price)
            .bind(item.line_total)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        info!(rows = items.len(), "inserted order items");
        Ok(())
    }

    async fn insert_payments(&self, payments: &[Payment]) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;
        for payment in payments {
            sqlx::query(
                "INSERT INTO payments (payment_id, order_id, payment_method, \
                 payment_status, payment_date, amount_paid) VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(payment.payment_id)
            .bind(payment.order_id)
            .bind(payment.payment_method.as_str())
            .bind(payment.payment_status.as_str())
            .bind(payment.payment_date)
            .bind(payment.amount_paid)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        info!(rows = payments.len(), "inserted payments");
        Ok(())
    }

    /// Row count per table, in insert order.
    pub async fn table_counts(&self) -> StoreResult<Vec<(&'static str, i64)>> {
        let mut counts = Vec::with_capacity(INSERT_ORDER.len());
        for table in INSERT_ORDER {
            let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(&self.pool)
                .await?;
            counts.push((table, count));
        }
        Ok(counts)
    }
}
