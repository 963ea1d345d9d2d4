//! # lexcat-core — Foundational Types for Vocabulary Classification
//!
//! The leaf of the lexcat crate graph. Every other crate in the workspace
//! depends on `lexcat-core`; it depends on nothing internal.
//!
//! ## Contents
//!
//! - **Text** (`text.rs`): the deterministic normalizer that strips
//!   Vietnamese tone marks and punctuation, and the space-padded keyword
//!   matcher built on top of it.
//! - **Group** (`group.rs`): the closed `WordGroup` enumeration carried by
//!   every category definition.
//! - **Identity** (`identity.rs`): storage identifier newtypes, so a
//!   vocabulary id can never be passed where a category id is expected.
//! - **Record** (`record.rs`): the vocabulary record as read from storage.
//! - **Error** (`error.rs`): taxonomy construction errors.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `lexcat-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod group;
pub mod identity;
pub mod record;
pub mod text;

pub use error::TaxonomyError;
pub use group::WordGroup;
pub use identity::{CategoryId, VocabularyId};
pub use record::{NewCategory, VocabularyRecord};
pub use text::{count_keyword_matches, normalize, pad};
