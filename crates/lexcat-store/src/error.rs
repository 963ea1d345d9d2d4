//! Storage errors.

use lexcat_core::{CategoryId, VocabularyId};
use thiserror::Error;

/// Failures reported by a [`VocabularyStore`](crate::VocabularyStore).
#[derive(Error, Debug)]
pub enum StoreError {
    /// The database driver failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// `DATABASE_URL` is not set.
    #[error("DATABASE_URL environment variable is required")]
    MissingDatabaseUrl,

    /// No vocabulary entry has this id.
    #[error("unknown vocabulary entry {0}")]
    UnknownVocabulary(VocabularyId),

    /// No category has this id.
    #[error("unknown category {0}")]
    UnknownCategory(CategoryId),

    /// The store refused the write.
    #[error("update of {id} rejected: {reason}")]
    Rejected {
        /// Entry whose update was refused.
        id: VocabularyId,
        /// Reason given by the store.
        reason: String,
    },
}
