//! # Error Types
//!
//! Errors raised while assembling a category taxonomy. These are
//! programmer errors in the catalog data: they are detected once, at
//! startup, and are never recovered from per record.

use thiserror::Error;

/// A category catalog that cannot be used for classification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    /// Two definitions share the same code.
    #[error("duplicate category code {code:?} at position {position}")]
    DuplicateCode {
        /// The repeated code.
        code: String,
        /// Zero-based position of the second occurrence.
        position: usize,
    },

    /// A definition has an empty (or whitespace-only) code.
    #[error("category at position {position} has an empty code")]
    EmptyCode {
        /// Zero-based position of the offending definition.
        position: usize,
    },

    /// The designated fallback code has no definition.
    #[error("no definition for fallback category code {code:?}")]
    MissingFallback {
        /// The configured fallback code.
        code: String,
    },
}
