//! # PostgreSQL Store
//!
//! [`VocabularyStore`] over the application's `vocabulary` and
//! `vocabulary_categories` tables via SQLx. Keys are cast to `BIGINT` in
//! every query so the row types do not depend on the column widths the
//! application chose.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use lexcat_core::{CategoryId, NewCategory, VocabularyId, VocabularyRecord};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::store::{CategorySample, CategorySummary, VocabularyEntry, VocabularyStore};

const VOCABULARY_COLUMNS: &str = "v.vocab_id::BIGINT AS vocab_id,
         COALESCE(v.chinese_word, '') AS chinese_word,
         COALESCE(v.pinyin, '') AS pinyin,
         COALESCE(v.meaning_vn, '') AS meaning_vn,
         v.category_id::BIGINT AS category_id,
         c.name_vi AS category_name";

/// PostgreSQL-backed vocabulary store.
#[derive(Debug, Clone)]
pub struct PgVocabularyStore {
    pool: PgPool,
}

impl PgVocabularyStore {
    /// Connect a pool using `config`.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.database_url)
            .await?;

        tracing::info!(
            max_connections = config.max_connections,
            "connected to PostgreSQL"
        );

        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl VocabularyStore for PgVocabularyStore {
    async fn list_vocabulary(&self) -> Result<Vec<VocabularyRecord>, StoreError> {
        let rows = sqlx::query_as::<_, VocabularyRow>(&format!(
            "SELECT {VOCABULARY_COLUMNS}
             FROM vocabulary v
             LEFT JOIN vocabulary_categories c ON c.id = v.category_id
             ORDER BY v.vocab_id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(VocabularyRow::into_record).collect())
    }

    async fn delete_all_categories(&self) -> Result<u64, StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE vocabulary SET category_id = NULL WHERE category_id IS NOT NULL")
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM vocabulary_categories")
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }

    async fn create_category(&self, category: &NewCategory) -> Result<CategoryId, StoreError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO vocabulary_categories (name_vi, name_en)
             VALUES ($1, $2)
             RETURNING id::BIGINT",
        )
        .bind(&category.name_local)
        .bind(&category.name_alt)
        .fetch_one(&self.pool)
        .await?;

        Ok(CategoryId(id))
    }

    async fn update_vocabulary_category(
        &self,
        id: VocabularyId,
        category: CategoryId,
    ) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE vocabulary SET category_id = $1 WHERE vocab_id = $2")
            .bind(category.get())
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::warn!(record = %id, "vocabulary entry vanished before update, skipped");
        }
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<CategorySummary>, StoreError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT c.id::BIGINT AS id, c.name_vi, COALESCE(c.name_en, '') AS name_en,
                    COUNT(v.vocab_id)::BIGINT AS vocabulary_count
             FROM vocabulary_categories c
             LEFT JOIN vocabulary v ON v.category_id = c.id
             GROUP BY c.id, c.name_vi, c.name_en
             ORDER BY c.id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CategoryRow::into_summary).collect())
    }

    async fn find_vocabulary(&self, keyword: &str) -> Result<Option<VocabularyEntry>, StoreError> {
        let pattern = format!("%{}%", escape_like(keyword));
        let row = sqlx::query_as::<_, VocabularyRow>(&format!(
            "SELECT {VOCABULARY_COLUMNS}
             FROM vocabulary v
             LEFT JOIN vocabulary_categories c ON c.id = v.category_id
             WHERE v.meaning_vn ILIKE $1
             ORDER BY v.vocab_id
             LIMIT 1"
        ))
        .bind(pattern)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| {
            let category_id = row.category_id.map(CategoryId);
            VocabularyEntry {
                record: row.into_record(),
                category_id,
            }
        }))
    }

    async fn sample_category(
        &self,
        name: &str,
        limit: usize,
    ) -> Result<Option<CategorySample>, StoreError> {
        let category: Option<(i64, String)> = sqlx::query_as(
            "SELECT id::BIGINT, name_vi
             FROM vocabulary_categories
             WHERE LOWER(name_vi) = LOWER($1)
             ORDER BY id
             LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        let Some((category_id, name_local)) = category else {
            return Ok(None);
        };

        let rows = sqlx::query_as::<_, VocabularyRow>(&format!(
            "SELECT {VOCABULARY_COLUMNS}
             FROM vocabulary v
             LEFT JOIN vocabulary_categories c ON c.id = v.category_id
             WHERE v.category_id = $1
             ORDER BY v.vocab_id
             LIMIT $2"
        ))
        .bind(category_id)
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(CategorySample {
            category_id: CategoryId(category_id),
            name_local,
            entries: rows.into_iter().map(VocabularyRow::into_record).collect(),
        }))
    }

    fn backend_name(&self) -> &str {
        "postgres"
    }
}

/// Escape `%`, `_` and `\` so `keyword` matches literally inside `ILIKE`.
fn escape_like(keyword: &str) -> String {
    let mut out = String::with_capacity(keyword.len());
    for ch in keyword.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Internal row type for SQLx mapping.
#[derive(sqlx::FromRow)]
struct VocabularyRow {
    vocab_id: i64,
    chinese_word: String,
    pinyin: String,
    meaning_vn: String,
    category_id: Option<i64>,
    category_name: Option<String>,
}

impl VocabularyRow {
    fn into_record(self) -> VocabularyRecord {
        VocabularyRecord {
            id: VocabularyId(self.vocab_id),
            chinese_word: self.chinese_word,
            pinyin: self.pinyin,
            meaning: self.meaning_vn,
            current_category_name: self.category_name,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    name_vi: String,
    name_en: String,
    vocabulary_count: i64,
}

impl CategoryRow {
    fn into_summary(self) -> CategorySummary {
        CategorySummary {
            id: CategoryId(self.id),
            name_local: self.name_vi,
            name_alt: self.name_en,
            vocabulary_count: self.vocabulary_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\"), "c:\\\\");
        assert_eq!(escape_like("lắp đặt"), "lắp đặt");
    }

    #[test]
    fn row_maps_to_record() {
        let row = VocabularyRow {
            vocab_id: 5,
            chinese_word: "狗".to_string(),
            pinyin: "gǒu".to_string(),
            meaning_vn: "con chó".to_string(),
            category_id: Some(3),
            category_name: Some("Động vật".to_string()),
        };
        let record = row.into_record();
        assert_eq!(record.id, VocabularyId(5));
        assert_eq!(record.meaning, "con chó");
        assert_eq!(record.current_category_name.as_deref(), Some("Động vật"));
    }
}
