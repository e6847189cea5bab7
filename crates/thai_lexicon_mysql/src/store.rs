//! MySQL implementation of [`StopwordStore`].
//!
//! All SQL is runtime-checked (sqlx::query, not sqlx::query!) to avoid a
//! compile-time database requirement. Insert-or-ignore comes from
//! `INSERT IGNORE` against the unique key on `StopwordText`; the column's
//! `utf8mb4_unicode_ci` collation makes that key case-insensitive.

use async_trait::async_trait;
use sqlx::mysql::MySqlPool;
use sqlx::{MySql, QueryBuilder};
use thai_lexicon_core::{StopwordStore, StoreError};
use tracing::{debug, warn};

pub const STOPWORDS_TABLE: &str = "Stopwords";

/// Rows per `INSERT` statement inside one chunk transaction, keeping each
/// statement well under the server's placeholder limit.
const ROWS_PER_STATEMENT: usize = 1000;

#[derive(Debug, Clone)]
pub struct MySqlStopwordStore {
    pool: MySqlPool,
}

impl MySqlStopwordStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl StopwordStore for MySqlStopwordStore {
    fn table_name(&self) -> &str {
        STOPWORDS_TABLE
    }

    async fn table_exists(&self) -> Result<bool, StoreError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM information_schema.tables
            WHERE table_schema = DATABASE()
              AND table_name = ?
            "#,
        )
        .bind(STOPWORDS_TABLE)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::new("check Stopwords table", e))?;

        Ok(count > 0)
    }

    async fn existing_stopwords(&self) -> Result<Vec<String>, StoreError> {
        sqlx::query_scalar("SELECT StopwordText FROM Stopwords")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::new("read existing stopwords", e))
    }

    async fn active_negative_keywords(&self) -> Result<Vec<String>, StoreError> {
        sqlx::query_scalar("SELECT Word FROM NegativeKeywords WHERE IsActive = 1")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::new("read active negative keywords", e))
    }

    async fn insert_chunk(&self, words: &[String]) -> Result<u64, StoreError> {
        if words.is_empty() {
            return Ok(0);
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StoreError::new("begin chunk transaction", e))?;

        let mut inserted = 0;
        for rows in words.chunks(ROWS_PER_STATEMENT) {
            let mut builder: QueryBuilder<MySql> =
                QueryBuilder::new("INSERT IGNORE INTO Stopwords (StopwordText) ");
            builder.push_values(rows, |mut row, word| {
                row.push_bind(word.as_str());
            });

            let result = builder.build().execute(&mut *tx).await;
            match result {
                Ok(result) => inserted += result.rows_affected(),
                Err(e) => {
                    if let Err(rollback) = tx.rollback().await {
                        warn!("Rollback after failed insert also failed: {}", rollback);
                    }
                    return Err(StoreError::new("insert stopwords", e));
                }
            }
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::new("commit chunk transaction", e))?;

        debug!("Committed {} of {} stopwords", inserted, words.len());
        Ok(inserted)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Stopwords")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::new("count stopwords", e))?;
        Ok(count.max(0) as u64)
    }

    async fn sample(&self, limit: usize) -> Result<Vec<String>, StoreError> {
        sqlx::query_scalar("SELECT StopwordText FROM Stopwords ORDER BY StopwordText LIMIT ?")
            .bind(limit as u64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::new("sample stopwords", e))
    }
}
