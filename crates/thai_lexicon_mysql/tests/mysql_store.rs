//! MySQL store integration tests.
//!
//! Requires a scratch MySQL database.
//! Run with: DATABASE_URL="mysql://root@localhost/lexicon_test" cargo test -p thai_lexicon_mysql -- --ignored

use std::num::NonZeroUsize;
use std::time::Duration;

use sqlx::mysql::MySqlPool;
use thai_lexicon_core::{
    run_sync, BatchLoader, CorpusSource, StaticExclusions, StopwordStore, SyncOptions,
};
use thai_lexicon_mysql::{MySqlConfig, MySqlStopwordStore, SCHEMA_SQL};

// =========================================================================
// TEST INFRASTRUCTURE
// =========================================================================

struct ListCorpus(Vec<String>);

#[async_trait::async_trait]
impl CorpusSource for ListCorpus {
    async fn fetch_candidates(&self) -> thai_lexicon_core::Result<Vec<String>> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "test corpus".to_string()
    }
}

async fn fresh_store() -> MySqlStopwordStore {
    let pool: MySqlPool = MySqlConfig::from_env()
        .connect()
        .await
        .expect("DATABASE_URL must point at a scratch MySQL database");

    sqlx::raw_sql("DROP TABLE IF EXISTS Stopwords; DROP TABLE IF EXISTS NegativeKeywords;")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::raw_sql(SCHEMA_SQL).execute(&pool).await.unwrap();

    MySqlStopwordStore::new(pool)
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

// =========================================================================
// TESTS
// =========================================================================

#[tokio::test]
#[ignore] // requires DATABASE_URL
async fn insert_ignore_is_case_insensitive() {
    let store = fresh_store().await;

    let first = store.insert_chunk(&words(&["GIN", "และ"])).await.unwrap();
    let second = store
        .insert_chunk(&words(&["gin", "Gin", "และ", "tonic"]))
        .await
        .unwrap();

    assert_eq!(first, 2);
    assert_eq!(second, 1);
    assert_eq!(store.count().await.unwrap(), 3);
}

#[tokio::test]
#[ignore] // requires DATABASE_URL
async fn scenario_run_is_idempotent() {
    let store = fresh_store().await;
    store.insert_chunk(&words(&["และ", "แต่"])).await.unwrap();
    sqlx::query("INSERT INTO NegativeKeywords (Word, IsActive) VALUES ('คือ', 1), ('กับ', 0)")
        .execute(store.pool())
        .await
        .unwrap();

    let corpus = ListCorpus(words(&["และ", "แต่", "คือ", "ที่", "กับ"]));
    let removed = StaticExclusions::new("removed-report", words(&["ที่"]));
    let options = SyncOptions {
        batch_size: NonZeroUsize::new(2),
        pause: Duration::ZERO,
        ..Default::default()
    };

    let first = run_sync(&corpus, &store, &removed, &options).await.unwrap();
    assert_eq!(first.summary.inserted_count, 1);
    assert_eq!(first.final_count, 3);

    let second = run_sync(&corpus, &store, &removed, &options).await.unwrap();
    assert_eq!(second.summary.inserted_count, 0);
    assert_eq!(second.final_count, 3);
}

#[tokio::test]
#[ignore] // requires DATABASE_URL
async fn missing_table_is_detected() {
    let store = fresh_store().await;
    sqlx::query("DROP TABLE Stopwords")
        .execute(store.pool())
        .await
        .unwrap();

    assert!(!store.table_exists().await.unwrap());
    let err = BatchLoader::default()
        .load(&store, &words(&["ที่"]))
        .await
        .unwrap_err();
    assert!(matches!(err, thai_lexicon_core::SyncError::SchemaMissing { .. }));
}
