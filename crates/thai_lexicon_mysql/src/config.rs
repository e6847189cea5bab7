//! Connection configuration for the stopword store.
//!
//! Read from the environment: either `DATABASE_URL`, or the discrete
//! `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD` and `DB_NAME` variables.
//! The connection is always pinned to `utf8mb4` with a case-insensitive
//! Unicode collation, which the store's unique key relies on.

use std::str::FromStr;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use thai_lexicon_core::SyncError;
use tracing::{info, warn};

pub const CHARSET: &str = "utf8mb4";
pub const COLLATION: &str = "utf8mb4_unicode_ci";

#[derive(Debug, Clone)]
pub struct MySqlConfig {
    /// Takes precedence over the discrete fields when set.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub connect_timeout: Duration,
}

impl Default for MySqlConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            database: "pcru_chatbot".to_string(),
            connect_timeout: Duration::from_secs(30),
        }
    }
}

impl MySqlConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unset or empty variables
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            database_url: var("DATABASE_URL"),
            host: var("DB_HOST").unwrap_or(defaults.host),
            port: var("DB_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            user: var("DB_USER").unwrap_or(defaults.user),
            password: lookup("DB_PASSWORD").unwrap_or(defaults.password),
            database: var("DB_NAME").unwrap_or(defaults.database),
            connect_timeout: defaults.connect_timeout,
        }
    }

    pub fn connect_options(&self) -> Result<MySqlConnectOptions, sqlx::Error> {
        let options = match &self.database_url {
            Some(url) => MySqlConnectOptions::from_str(url)?,
            None => MySqlConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.database),
        };
        Ok(options.charset(CHARSET).collation(COLLATION))
    }

    /// Connection target with the password masked, for logs.
    pub fn display_target(&self) -> String {
        match &self.database_url {
            Some(url) => mask_database_url(url),
            None => format!(
                "mysql://{}@{}:{}/{}",
                self.user, self.host, self.port, self.database
            ),
        }
    }

    /// Open the run's single connection.
    ///
    /// Any failure is reported as `StoreUnreachable`.
    pub async fn connect(&self) -> Result<MySqlPool, SyncError> {
        info!("Connecting to {}", self.display_target());

        let options = self
            .connect_options()
            .map_err(|e| SyncError::StoreUnreachable(format!("invalid configuration: {e}")))?;

        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(self.connect_timeout)
            .connect_with(options)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                SyncError::StoreUnreachable(format!("{}: {}", self.display_target(), e))
            })?;

        info!("Connected to database");
        Ok(pool)
    }
}

/// Mask the password in a database URL.
pub fn mask_database_url(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(parsed) => {
            let mut masked = parsed.clone();
            if parsed.password().is_some() {
                let _ = masked.set_password(Some("***"));
            }
            masked.to_string()
        }
        Err(_) => "<unparseable database url>".to_string(),
    }
}
