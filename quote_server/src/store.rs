//! Append-only SQLite storage for observed quotes.
//!
//! The table is created once, before the service accepts requests. Each request then
//! performs exactly one parameterized insert, bounded by the store's own deadline.
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use quote_common::{QuoteError, RateQuote, Result, Stage};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Sqlite, SqlitePool, Transaction};

/// Durable sink for quotes.
#[async_trait]
pub trait RateStore: Send + Sync {
    /// Appends one quote under the store's own deadline.
    async fn persist(&self, quote: &RateQuote) -> Result<()>;
}

/// Opens (creating if missing) the SQLite database at `path`.
pub async fn connect(path: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    SqlitePool::connect_with(options)
        .await
        .map_err(|e| QuoteError::StorageUnavailable(format!("Failed to connect to database: {}", e)))
}

/// Creates the `exchange_rate` table if it does not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS exchange_rate (
            code TEXT,
            name TEXT,
            bid TEXT,
            timestamp TEXT
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(|e| QuoteError::StorageUnavailable(format!("Failed to create table: {}", e)))?;
    info!("exchange_rate table ready");
    Ok(())
}

/// SQLite-backed store sharing one connection pool across requests.
pub struct SqliteRateStore {
    pool: SqlitePool,
    budget: Duration,
}

impl SqliteRateStore {
    /// Creates a store over an already initialized `pool`.
    pub fn new(pool: SqlitePool, budget: Duration) -> Self {
        Self { pool, budget }
    }

    /// Runs the insert inside an open transaction and hands it back uncommitted.
    async fn insert(&self, quote: &RateQuote) -> Result<Transaction<'static, Sqlite>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| QuoteError::StorageUnavailable(e.to_string()))?;
        sqlx::query(
            r#"
            INSERT INTO exchange_rate
            (code, name, bid, timestamp)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(quote.code())
        .bind(quote.name())
        .bind(quote.bid())
        .bind(quote.timestamp())
        .execute(&mut *tx)
        .await
        .map_err(|e| QuoteError::StorageWrite(format!("Failed to insert exchange rate: {}", e)))?;
        Ok(tx)
    }
}

#[async_trait]
impl RateStore for SqliteRateStore {
    async fn persist(&self, quote: &RateQuote) -> Result<()> {
        debug!("Persisting quote {} (budget {:?})", quote.bid(), self.budget);
        // A transaction dropped on expiry is rolled back, even if the worker
        // already ran the insert.
        let tx = tokio::time::timeout(self.budget, self.insert(quote))
            .await
            .map_err(|_| QuoteError::timeout(Stage::Persist, self.budget))??;
        tx.commit()
            .await
            .map_err(|e| QuoteError::StorageWrite(format!("Failed to commit exchange rate: {}", e)))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use sqlx::Row;
    use sqlx::sqlite::SqlitePoolOptions;

    /// Single-connection in-memory pool, so every query sees the same database.
    pub(crate) async fn memory_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    pub(crate) async fn rows(pool: &SqlitePool) -> Vec<RateQuote> {
        sqlx::query("SELECT code, name, bid, timestamp FROM exchange_rate")
            .fetch_all(pool)
            .await
            .unwrap()
            .iter()
            .map(|row| {
                RateQuote::new(
                    row.get::<&str, _>("code"),
                    row.get::<&str, _>("name"),
                    row.get::<&str, _>("bid"),
                    row.get::<&str, _>("timestamp"),
                )
            })
            .collect()
    }

    fn quote() -> RateQuote {
        RateQuote::new("USD", "Dolar/Real", "5.43", "1700000000")
    }

    #[tokio::test]
    async fn persist_appends_one_row_in_declared_order() {
        let pool = memory_pool().await;
        init_schema(&pool).await.unwrap();
        let store = SqliteRateStore::new(pool.clone(), Duration::from_secs(1));

        store.persist(&quote()).await.unwrap();

        assert_eq!(rows(&pool).await, vec![quote()]);
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let pool = memory_pool().await;
        init_schema(&pool).await.unwrap();
        init_schema(&pool).await.unwrap();
        let store = SqliteRateStore::new(pool.clone(), Duration::from_secs(1));
        store.persist(&quote()).await.unwrap();
        store.persist(&quote()).await.unwrap();
        assert_eq!(rows(&pool).await.len(), 2);
    }

    #[tokio::test]
    async fn missing_table_is_a_write_error() {
        let pool = memory_pool().await;
        let store = SqliteRateStore::new(pool, Duration::from_secs(1));
        let err = store.persist(&quote()).await.unwrap_err();
        assert!(matches!(err, QuoteError::StorageWrite(_)));
    }

    #[tokio::test]
    async fn busy_storage_is_a_persist_timeout() {
        let pool = memory_pool().await;
        init_schema(&pool).await.unwrap();
        let store = SqliteRateStore::new(pool.clone(), Duration::from_millis(10));

        // Holding the only connection keeps the insert waiting past its budget.
        let held = pool.acquire().await.unwrap();
        let err = store.persist(&quote()).await.unwrap_err();
        drop(held);

        assert!(matches!(
            err,
            QuoteError::Timeout {
                stage: Stage::Persist,
                ..
            }
        ));
        assert!(rows(&pool).await.is_empty());
    }

    #[tokio::test]
    async fn expired_insert_is_never_committed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exchange_rate.db");
        let path = path.to_str().unwrap();
        let pool = connect(path).await.unwrap();
        init_schema(&pool).await.unwrap();

        let mut committed = 0;
        let mut timed_out = 0;
        for micros in 0..400 {
            let store = SqliteRateStore::new(pool.clone(), Duration::from_micros(micros));
            match store.persist(&quote()).await {
                Ok(()) => committed += 1,
                Err(err) if err.is_timeout() => timed_out += 1,
                Err(_) => {}
            }
        }
        assert!(timed_out > 0);

        // Give the worker time to finish anything still queued.
        tokio::time::sleep(Duration::from_millis(50)).await;
        let fresh = connect(path).await.unwrap();
        assert_eq!(rows(&fresh).await.len(), committed);
    }

    #[tokio::test]
    async fn connect_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exchange_rate.db");
        let pool = connect(path.to_str().unwrap()).await.unwrap();
        init_schema(&pool).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn unopenable_path_is_storage_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("exchange_rate.db");
        let err = connect(path.to_str().unwrap()).await.unwrap_err();
        assert!(matches!(err, QuoteError::StorageUnavailable(_)));
    }
}
