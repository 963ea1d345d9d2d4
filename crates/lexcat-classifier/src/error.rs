//! Classifier configuration errors.

use lexcat_core::TaxonomyError;
use thiserror::Error;

/// The classifier cannot be built from the supplied configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The category catalog itself is invalid (includes a missing
    /// fallback definition).
    #[error("invalid taxonomy: {0}")]
    Taxonomy(#[from] TaxonomyError),

    /// A detector resolves to a code the taxonomy does not define.
    #[error("detector {detector:?} targets unknown category code {code:?}")]
    UnknownDetectorCode {
        /// Detector name.
        detector: String,
        /// The undefined code.
        code: String,
    },
}
