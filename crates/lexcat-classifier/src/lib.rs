//! # lexcat-classifier — Vocabulary Category Classifier
//!
//! Assigns every vocabulary entry to exactly one category of the taxonomy.
//! Three stages run in a fixed order and the first one that answers wins:
//!
//! 1. **Legacy hint** (`hint.rs`): the entry's pre-migration category name,
//!    when allow-listed and mapped to an explicit code. Disabled unless
//!    [`ClassifierConfig::use_legacy_hints`] is set.
//! 2. **Detector chain** (`detector.rs`): an ordered list of named
//!    predicates over the entry's normalized meaning and raw Chinese
//!    headword. First match wins; narrow detectors precede broad ones.
//! 3. **Keyword scoring** (`scoring.rs`): every definition is scored by
//!    keyword hits; the first strictly highest positive score wins and an
//!    all-zero outcome routes to the fallback category.
//!
//! Classification is pure and synchronous. A [`DetectionContext`] is
//! derived afresh for every record and nothing is cached across records.
//!
//! ## Crate Policy
//!
//! - Configuration problems (missing fallback, detector targeting an
//!   unknown code) are reported once by [`Classifier::new`], never per
//!   record.
//! - `classify` is total: it always returns a definition of the taxonomy.

pub mod classifier;
pub mod config;
pub mod context;
pub mod detector;
pub mod error;
pub mod hint;
pub mod scoring;

pub use classifier::{Classification, Classifier, Stage};
pub use config::ClassifierConfig;
pub use context::DetectionContext;
pub use detector::{Detector, DetectorChain, Signal};
pub use error::ConfigurationError;
pub use hint::resolve_legacy_hint;
pub use scoring::{score_definition, score_fallback, Scored};
