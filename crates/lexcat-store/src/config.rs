//! Database connection configuration.

use std::time::Duration;

use crate::error::StoreError;

/// Connection settings for [`PgVocabularyStore`](crate::PgVocabularyStore).
///
/// Custom `Debug` implementation redacts the credentials in
/// `database_url` to prevent leaking them into log output.
#[derive(Clone)]
pub struct StoreConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
    /// How long to wait for a free connection.
    pub acquire_timeout: Duration,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("database_url", &redact_url(&self.database_url))
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl StoreConfig {
    /// Default pool size.
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    /// Default acquire timeout in seconds.
    pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

    /// Settings for `database_url` with default pool limits.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: Self::DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(Self::DEFAULT_ACQUIRE_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `DATABASE_URL` (required)
    /// - `LEXCAT_DB_MAX_CONNECTIONS` (default: 10)
    /// - `LEXCAT_DB_ACQUIRE_TIMEOUT_SECS` (default: 5)
    pub fn from_env() -> Result<Self, StoreError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StoreError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(StoreError::MissingDatabaseUrl)?;

        Ok(Self {
            database_url,
            max_connections: lookup("LEXCAT_DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .filter(|&n| n > 0)
                .unwrap_or(Self::DEFAULT_MAX_CONNECTIONS),
            acquire_timeout: Duration::from_secs(
                lookup("LEXCAT_DB_ACQUIRE_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(Self::DEFAULT_ACQUIRE_TIMEOUT_SECS),
            ),
        })
    }
}

/// Replace the `user:password` part of a URL with `[REDACTED]`.
fn redact_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://").map(|i| i + 3) else {
        return "[REDACTED]".to_string();
    };
    match url[scheme_end..].rfind('@') {
        Some(at) => format!("{}[REDACTED]{}", &url[..scheme_end], &url[scheme_end + at..]),
        None => url.to_string(),
    }
}
