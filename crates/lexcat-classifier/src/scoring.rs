//! # Keyword Scoring Fallback
//!
//! Scores every definition against the record's normalized texts and picks
//! the first strictly highest positive score. When every definition scores
//! zero, the taxonomy's fallback definition is chosen instead.

use lexcat_core::count_keyword_matches;
use lexcat_taxonomy::{CategoryDefinition, Taxonomy};

use crate::context::DetectionContext;

/// Outcome of keyword scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scored<'t> {
    /// A definition scored above zero.
    Winner {
        definition: &'t CategoryDefinition,
        score: u32,
    },
    /// Nothing scored; the fallback definition.
    Fallback(&'t CategoryDefinition),
}

impl<'t> Scored<'t> {
    /// The chosen definition.
    pub fn definition(&self) -> &'t CategoryDefinition {
        match *self {
            Self::Winner { definition, .. } => definition,
            Self::Fallback(definition) => definition,
        }
    }
}

/// Score of one definition: its weight plus one point per matched keyword
/// plus one point per Chinese keyword found in the raw headword.
pub fn score_definition(definition: &CategoryDefinition, ctx: &DetectionContext) -> u32 {
    let keyword_hits = count_keyword_matches(&ctx.text_sources(), &definition.keywords);
    let chinese_hits = definition
        .chinese_keywords
        .iter()
        .filter(|k| !k.is_empty() && ctx.chinese_raw.contains(k.as_str()))
        .count();
    let hits = u32::try_from(keyword_hits + chinese_hits).unwrap_or(u32::MAX);
    definition.weight.unwrap_or(0).saturating_add(hits)
}

/// Pick the highest-scoring definition in taxonomy order.
///
/// Only a strictly greater score replaces the current best, so ties resolve
/// to the earlier definition.
pub fn score_fallback<'t>(taxonomy: &'t Taxonomy, ctx: &DetectionContext) -> Scored<'t> {
    let mut best: Option<(&CategoryDefinition, u32)> = None;
    for definition in taxonomy {
        let score = score_definition(definition, ctx);
        if score > best.map_or(0, |(_, s)| s) {
            best = Some((definition, score));
        }
    }
    match best {
        Some((definition, score)) => Scored::Winner { definition, score },
        None => Scored::Fallback(taxonomy.fallback()),
    }
}
