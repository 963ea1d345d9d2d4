//! # Category Definitions and the Ordered Taxonomy
//!
//! A `CategoryDefinition` is static, author-supplied catalog data. A
//! `Taxonomy` is a validated, ordered sequence of definitions with exactly
//! one designated fallback.
//!
//! ## Invariants
//!
//! - Codes are non-empty and unique.
//! - The fallback code has a definition.
//! - Keywords are stored normalized, without duplicates, in first-seen
//!   order, so a keyword can contribute at most one point to its category.
//! - Iteration order is definition order and never changes after
//!   construction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use lexcat_core::{normalize, TaxonomyError, WordGroup};

/// One entry of the category catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    /// Stable slug; the join key between classification and storage.
    pub code: String,
    /// Vietnamese display name.
    pub name_local: String,
    /// English display name.
    pub name_alt: String,
    /// Grammatical group. Not read by any matching rule.
    pub group: WordGroup,
    /// Normalized phrases scored by the keyword fallback.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Raw Chinese substrings scored against the headword.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chinese_keywords: Vec<String>,
    /// Historical display names (normalized) once used for this category.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legacy_names: Vec<String>,
    /// Fixed bonus added before keyword matches are counted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

impl CategoryDefinition {
    /// Start a definition with no keywords.
    pub fn new(
        code: impl Into<String>,
        name_local: impl Into<String>,
        name_alt: impl Into<String>,
        group: WordGroup,
    ) -> Self {
        Self {
            code: code.into(),
            name_local: name_local.into(),
            name_alt: name_alt.into(),
            group,
            keywords: Vec::new(),
            chinese_keywords: Vec::new(),
            legacy_names: Vec::new(),
            weight: None,
        }
    }

    /// Set the scoring keywords.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the Chinese substring keywords.
    pub fn with_chinese_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chinese_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the historical display names.
    pub fn with_legacy_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.legacy_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the fixed score bonus.
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = Some(weight);
        self
    }

    fn canonicalize(&mut self) {
        self.code = self.code.trim().to_string();
        self.keywords = dedup_nonempty(self.keywords.iter().map(|k| normalize(k)));
        self.chinese_keywords =
            dedup_nonempty(self.chinese_keywords.iter().map(|k| k.trim().to_string()));
        self.legacy_names = dedup_nonempty(self.legacy_names.iter().map(|n| normalize(n)));
    }
}

fn dedup_nonempty(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !item.is_empty() && !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// Validated, ordered category catalog.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    definitions: Vec<CategoryDefinition>,
    index: HashMap<String, usize>,
    fallback: usize,
}

impl Taxonomy {
    /// Validate `definitions` and designate `fallback_code` as the catch-all.
    ///
    /// Keywords and legacy names are normalized and deduplicated in place.
    pub fn new(
        definitions: Vec<CategoryDefinition>,
        fallback_code: &str,
    ) -> Result<Self, TaxonomyError> {
        let mut definitions = definitions;
        let mut index = HashMap::with_capacity(definitions.len());

        for (position, definition) in definitions.iter_mut().enumerate() {
            definition.canonicalize();
            if definition.code.is_empty() {
                return Err(TaxonomyError::EmptyCode { position });
            }
            if index.insert(definition.code.clone(), position).is_some() {
                return Err(TaxonomyError::DuplicateCode {
                    code: definition.code.clone(),
                    position,
                });
            }
        }

        let fallback = *index
            .get(fallback_code.trim())
            .ok_or_else(|| TaxonomyError::MissingFallback {
                code: fallback_code.to_string(),
            })?;

        Ok(Self {
            definitions,
            index,
            fallback,
        })
    }

    /// Definitions in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, CategoryDefinition> {
        self.definitions.iter()
    }

    /// Definitions as a slice, in catalog order.
    pub fn definitions(&self) -> &[CategoryDefinition] {
        &self.definitions
    }

    /// Look up a definition by code.
    pub fn get(&self, code: &str) -> Option<&CategoryDefinition> {
        self.index.get(code).map(|&i| &self.definitions[i])
    }

    /// Catalog position of a code.
    pub fn position(&self, code: &str) -> Option<usize> {
        self.index.get(code).copied()
    }

    /// Whether a code is defined.
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// The designated catch-all definition.
    pub fn fallback(&self) -> &CategoryDefinition {
        &self.definitions[self.fallback]
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the taxonomy has no definitions. Always false for a
    /// constructed taxonomy, since the fallback must exist.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl<'a> IntoIterator for &'a Taxonomy {
    type Item = &'a CategoryDefinition;
    type IntoIter = std::slice::Iter<'a, CategoryDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.iter()
    }
}
