//! # lexcat-taxonomy — Vocabulary Category Catalog
//!
//! Owns the category taxonomy that every vocabulary entry is sorted into:
//!
//! - **Definition** (`definition.rs`): `CategoryDefinition` and the
//!   validated, ordered `Taxonomy` sequence. Definition order is part of
//!   the contract: the scoring fallback breaks ties in favour of the
//!   earliest definition, so the taxonomy is a `Vec`, never a map.
//!
//! - **Catalog** (`catalog.rs`): the 48 built-in definitions across five
//!   word groups, and the designated fallback code.
//!
//! - **Legacy** (`legacy.rs`): the table mapping pre-migration category
//!   display names to a new code or a word group, and the allow-list of
//!   legacy names that may be trusted.

pub mod catalog;
pub mod definition;
pub mod legacy;

pub use catalog::{default_definitions, default_taxonomy, FALLBACK_CODE};
pub use definition::{CategoryDefinition, Taxonomy};
pub use legacy::{LegacyHint, LegacyHints};
