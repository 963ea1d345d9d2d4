//! Reassignment job errors.

use lexcat_classifier::ConfigurationError;
use lexcat_store::StoreError;
use thiserror::Error;

/// Failures that abort a reassignment run.
#[derive(Error, Debug)]
pub enum ReassignError {
    /// The classifier could not be built.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A storage call failed. The stored taxonomy is left as it was at the
    /// moment of failure; rerun the job to restore it.
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),

    /// The fallback category is missing from storage after recreation.
    #[error("fallback category {code:?} was not persisted")]
    FallbackNotPersisted {
        /// Fallback category code.
        code: String,
    },

    /// A category created earlier in the run has no recorded storage id.
    #[error("category {code:?} has no storage id")]
    CategoryNotPersisted {
        /// Category code.
        code: String,
    },

    /// `batch_size` was zero.
    #[error("batch size must be at least 1")]
    InvalidBatchSize,
}
