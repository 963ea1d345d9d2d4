#![deny(missing_docs)]

//! # lexcat-store — Vocabulary Storage
//!
//! The storage collaborator the reassignment job and the inspection
//! commands talk to. Everything goes through the [`VocabularyStore`] trait
//! so the job can run against PostgreSQL in production and against
//! [`InMemoryStore`] in tests.
//!
//! ## Schema
//!
//! Two tables, owned by the surrounding application:
//!
//! - `vocabulary (vocab_id, chinese_word, pinyin, meaning_vn, category_id)`
//! - `vocabulary_categories (id, name_vi, name_en)`
//!
//! This crate never creates or migrates them.

pub mod config;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use config::StoreConfig;
pub use error::StoreError;
pub use memory::InMemoryStore;
pub use postgres::PgVocabularyStore;
pub use store::{CategorySample, CategorySummary, VocabularyEntry, VocabularyStore};
