//! MySQL adapter for the Thai stopword store.
//!
//! [`MySqlConfig`] opens the run's connection, [`MySqlStopwordStore`]
//! implements `thai_lexicon_core::StopwordStore` over it.

pub mod config;
pub mod store;

pub use config::{mask_database_url, MySqlConfig};
pub use store::{MySqlStopwordStore, STOPWORDS_TABLE};

/// DDL for the tables the sync reads and writes. The sync never applies it;
/// tests and operators do.
pub const SCHEMA_SQL: &str = include_str!("../sql/stopwords.sql");
