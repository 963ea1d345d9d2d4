#![deny(missing_docs)]

//! # lexcat-reassign — Category Reassignment Job
//!
//! Rebuilds the stored category taxonomy from the built-in catalog and
//! files every vocabulary entry under the category the classifier picks.
//!
//! ## Phases
//!
//! 1. Load a snapshot of every entry with its current category name.
//! 2. Delete every stored category.
//! 3. Recreate one stored category per definition and confirm that the
//!    fallback category was persisted.
//! 4. Classify and update entries in fixed-size batches. Updates inside a
//!    batch run concurrently; batches run one after another.
//! 5. Report the per-category distribution.
//!
//! A failed storage call aborts the job. Rerunning is safe: the taxonomy is
//! rebuilt from scratch and the classifier is deterministic, so the same
//! corpus always produces the same distribution.

pub mod config;
pub mod error;
pub mod job;
pub mod report;

pub use config::ReassignConfig;
pub use error::ReassignError;
pub use job::ReassignJob;
pub use report::{Distribution, DistributionRow, ReassignReport};
