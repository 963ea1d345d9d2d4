#![deny(missing_docs)]

//! # lexcat-cli — Command-Line Interface
//!
//! Provides the `lexcat` binary. With no arguments it runs the category
//! reassignment job against the database named by `DATABASE_URL`.
//!
//! ## Subcommands
//!
//! - `lexcat reassign` — rebuild categories and reclassify every entry
//!   (`--dry-run` only reports).
//! - `lexcat classify` — classify one ad-hoc entry without storage.
//! - `lexcat taxonomy` — print the built-in catalog.
//! - `lexcat categories` — list stored categories with entry counts.
//! - `lexcat find <keyword>` — first entry whose meaning contains a keyword.
//! - `lexcat sample [name]` — first entries of one stored category.
//!
//! Handlers return the process exit code; errors bubble up as
//! `anyhow::Error` and are printed by `main`.

pub mod classify;
pub mod inspect;
pub mod reassign;

use anyhow::{Context, Result};

use lexcat_store::{PgVocabularyStore, StoreConfig};

/// Connect to the database configured in the environment.
pub async fn connect_store() -> Result<PgVocabularyStore> {
    let config = StoreConfig::from_env().context("loading database configuration")?;
    tracing::debug!(?config, "connecting to storage");
    PgVocabularyStore::connect(&config)
        .await
        .context("connecting to PostgreSQL")
}
