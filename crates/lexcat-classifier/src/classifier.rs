//! # Classifier Orchestrator
//!
//! Runs the legacy hint, the detector chain and keyword scoring in that
//! order for one record. Construction validates the whole configuration so
//! that `classify` can never fail.

use serde::Serialize;

use lexcat_core::VocabularyRecord;
use lexcat_taxonomy::{default_definitions, CategoryDefinition, LegacyHints, Taxonomy};

use crate::config::ClassifierConfig;
use crate::context::DetectionContext;
use crate::detector::DetectorChain;
use crate::error::ConfigurationError;
use crate::hint::resolve_legacy_hint;
use crate::scoring::{score_fallback, Scored};

/// The stage that decided a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum Stage {
    /// An allow-listed legacy category name mapped to an explicit code.
    LegacyHint,
    /// A detector of the chain fired.
    Detector { name: &'static str },
    /// Keyword scoring produced a positive winner.
    Scoring { score: u32 },
    /// Every definition scored zero.
    Fallback,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LegacyHint => f.write_str("legacy hint"),
            Self::Detector { name } => write!(f, "detector {name}"),
            Self::Scoring { score } => write!(f, "keyword score {score}"),
            Self::Fallback => f.write_str("fallback"),
        }
    }
}

/// Result of classifying one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification<'t> {
    /// The chosen category.
    pub definition: &'t CategoryDefinition,
    /// What decided it.
    #[serde(flatten)]
    pub stage: Stage,
}

impl<'t> Classification<'t> {
    /// Code of the chosen category.
    pub fn code(&self) -> &'t str {
        &self.definition.code
    }
}

/// Deterministic record classifier.
#[derive(Debug, Clone)]
pub struct Classifier {
    config: ClassifierConfig,
    taxonomy: Taxonomy,
    detectors: DetectorChain,
    hints: LegacyHints,
}

impl Classifier {
    /// Build a classifier.
    ///
    /// Fails when the definitions do not form a valid taxonomy with
    /// `config.fallback_code`, or when a detector targets a code the
    /// taxonomy does not define.
    pub fn new(
        config: ClassifierConfig,
        definitions: Vec<CategoryDefinition>,
        detectors: DetectorChain,
        hints: LegacyHints,
    ) -> Result<Self, ConfigurationError> {
        let taxonomy = Taxonomy::new(definitions, &config.fallback_code)?;

        if let Some(detector) = detectors.iter().find(|d| !taxonomy.contains(d.code)) {
            return Err(ConfigurationError::UnknownDetectorCode {
                detector: detector.name.to_string(),
                code: detector.code.to_string(),
            });
        }

        Ok(Self {
            config,
            taxonomy,
            detectors,
            hints,
        })
    }

    /// The built-in catalog, detector chain and legacy hints.
    pub fn builtin(config: ClassifierConfig) -> Result<Self, ConfigurationError> {
        Self::new(
            config,
            default_definitions(),
            DetectorChain::builtin(),
            LegacyHints::builtin(),
        )
    }

    /// Classify one record. Always returns a definition of the taxonomy.
    pub fn classify(&self, record: &VocabularyRecord) -> Classification<'_> {
        let classification = self.decide(record);
        tracing::debug!(
            record = %record.id,
            code = %classification.definition.code,
            stage = %classification.stage,
            "classified"
        );
        classification
    }

    /// Classify one record and return only the category code.
    pub fn classify_code(&self, record: &VocabularyRecord) -> &str {
        self.classify(record).code()
    }

    fn decide(&self, record: &VocabularyRecord) -> Classification<'_> {
        if let Some(definition) =
            resolve_legacy_hint(&self.config, &self.hints, &self.taxonomy, record)
        {
            return Classification {
                definition,
                stage: Stage::LegacyHint,
            };
        }

        let ctx = DetectionContext::from_record(record);

        if let Some(detector) = self.detectors.detect(&ctx) {
            if let Some(definition) = self.taxonomy.get(detector.code) {
                return Classification {
                    definition,
                    stage: Stage::Detector {
                        name: detector.name,
                    },
                };
            }
        }

        match score_fallback(&self.taxonomy, &ctx) {
            Scored::Winner { definition, score } => Classification {
                definition,
                stage: Stage::Scoring { score },
            },
            Scored::Fallback(definition) => Classification {
                definition,
                stage: Stage::Fallback,
            },
        }
    }

    /// The validated taxonomy.
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// The detector chain.
    pub fn detectors(&self) -> &DetectorChain {
        &self.detectors
    }

    /// The configuration this classifier was built with.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexcat_core::{VocabularyId, WordGroup};
    use lexcat_taxonomy::FALLBACK_CODE;
    use proptest::prelude::*;

    use crate::detector::{Detector, Signal};

    fn builtin() -> Classifier {
        Classifier::builtin(ClassifierConfig::default()).unwrap()
    }

    fn record(meaning: &str, chinese: &str) -> VocabularyRecord {
        VocabularyRecord::new(VocabularyId(1), chinese, "", meaning)
    }

    fn def(code: &str, keywords: &[&str]) -> CategoryDefinition {
        CategoryDefinition::new(code, code, code, WordGroup::Noun)
            .with_keywords(keywords.iter().copied())
    }

    // -- Construction --------------------------------------------------

    #[test]
    fn builtin_configuration_is_valid() {
        let classifier = builtin();
        assert_eq!(classifier.taxonomy().len(), 48);
        assert_eq!(classifier.taxonomy().fallback().code, FALLBACK_CODE);
    }

    #[test]
    fn missing_fallback_fails_at_construction() {
        let config = ClassifierConfig::default().with_fallback_code("khong-co");
        let err = Classifier::builtin(config).unwrap_err();
        assert!(matches!(err, ConfigurationError::Taxonomy(_)));
    }

    #[test]
    fn detector_to_unknown_code_fails_at_construction() {
        let err = Classifier::new(
            ClassifierConfig::default().with_fallback_code("a"),
            vec![def("a", &[])],
            DetectorChain::builtin(),
            LegacyHints::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::UnknownDetectorCode {
                detector: "school".to_string(),
                code: "truong-lop".to_string(),
            }
        );
    }

    // -- Pipeline ------------------------------------------------------

    #[test]
    fn narrow_detector_beats_broad_one() {
        let classifier = builtin();
        let result = classifier.classify(&record("phòng học", ""));
        assert_eq!(result.code(), "truong-lop");
        assert_eq!(result.stage, Stage::Detector { name: "school" });
    }

    #[test]
    fn dog_classifies_as_animal() {
        let classifier = builtin();
        let result = classifier.classify(&record("con chó", "狗"));
        assert_eq!(result.code(), "dong-vat");
        assert_eq!(result.stage, Stage::Detector { name: "animal" });

        // Either signal alone is enough.
        assert_eq!(classifier.classify_code(&record("con chó", "")), "dong-vat");
        assert_eq!(classifier.classify_code(&record("", "狗")), "dong-vat");
    }

    #[test]
    fn color_by_first_word() {
        let classifier = builtin();
        assert_eq!(classifier.classify_code(&record("màu đỏ", "")), "mau-sac");
    }

    #[test]
    fn empty_record_routes_to_fallback() {
        let classifier = builtin();
        let result = classifier.classify(&record("", ""));
        assert_eq!(result.code(), FALLBACK_CODE);
        assert_eq!(result.stage, Stage::Fallback);
    }

    #[test]
    fn unmatched_meaning_routes_to_fallback() {
        let classifier = builtin();
        let result = classifier.classify(&record("ý nghĩa", ""));
        assert_eq!(result.code(), FALLBACK_CODE);
        assert_eq!(result.stage, Stage::Fallback);
    }

    #[test]
    fn keyword_scoring_when_no_detector_fires() {
        let classifier = builtin();
        let result = classifier.classify(&record("đoàn thể", ""));
        assert_eq!(result.code(), "people-relations");
        assert_eq!(result.stage, Stage::Scoring { score: 1 });

        let result = classifier.classify(&record("khái niệm", ""));
        assert_eq!(result.code(), FALLBACK_CODE);
        assert_eq!(result.stage, Stage::Scoring { score: 1 });
    }

    #[test]
    fn fallback_is_independent_of_definition_order() {
        let forward = Classifier::new(
            ClassifierConfig::default().with_fallback_code("z"),
            vec![def("a", &["mot"]), def("b", &["hai"]), def("z", &[])],
            DetectorChain::empty(),
            LegacyHints::default(),
        )
        .unwrap();
        let reversed = Classifier::new(
            ClassifierConfig::default().with_fallback_code("z"),
            vec![def("z", &[]), def("b", &["hai"]), def("a", &["mot"])],
            DetectorChain::empty(),
            LegacyHints::default(),
        )
        .unwrap();
        let r = record("ba", "");
        assert_eq!(forward.classify_code(&r), "z");
        assert_eq!(reversed.classify_code(&r), "z");
    }

    #[test]
    fn scoring_tie_keeps_first_definition() {
        let classifier = Classifier::new(
            ClassifierConfig::default().with_fallback_code("z"),
            vec![def("z", &[]), def("a", &["mot"]), def("b", &["mot"])],
            DetectorChain::empty(),
            LegacyHints::default(),
        )
        .unwrap();
        assert_eq!(classifier.classify_code(&record("một", "")), "a");
    }

    #[test]
    fn custom_detector_short_circuits_scoring() {
        const ONLY: Detector = Detector {
            name: "only",
            code: "b",
            signals: &[Signal::FirstWord(&["mot"])],
        };
        let classifier = Classifier::new(
            ClassifierConfig::default().with_fallback_code("z"),
            vec![def("z", &[]), def("a", &["mot", "hai"]), def("b", &[])],
            DetectorChain::new(vec![ONLY]),
            LegacyHints::default(),
        )
        .unwrap();
        let result = classifier.classify(&record("một hai", ""));
        assert_eq!(result.code(), "b");
        assert_eq!(result.stage, Stage::Detector { name: "only" });
    }

    // -- Legacy hints --------------------------------------------------

    #[test]
    fn legacy_hint_short_circuits_when_enabled() {
        let classifier = Classifier::builtin(ClassifierConfig::default().with_legacy_hints(true))
            .unwrap();
        let r = record("con chó", "狗").with_current_category("Màu sắc");
        let result = classifier.classify(&r);
        assert_eq!(result.code(), "mau-sac");
        assert_eq!(result.stage, Stage::LegacyHint);
    }

    #[test]
    fn legacy_hint_ignored_when_disabled() {
        let classifier = builtin();
        let r = record("con chó", "狗").with_current_category("Màu sắc");
        assert_eq!(classifier.classify_code(&r), "dong-vat");
    }

    #[test]
    fn group_only_legacy_hint_falls_through() {
        let classifier = Classifier::builtin(ClassifierConfig::default().with_legacy_hints(true))
            .unwrap();
        let r = record("con chó", "").with_current_category("Động từ");
        let result = classifier.classify(&r);
        assert_eq!(result.code(), "dong-vat");
        assert_eq!(result.stage, Stage::Detector { name: "animal" });
    }

    #[test]
    fn classification_serializes_code_and_stage() {
        let classifier = builtin();
        let result = classifier.classify(&record("màu đỏ", ""));
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["definition"]["code"], "mau-sac");
        assert_eq!(json["stage"], "detector");
        assert_eq!(json["name"], "color");
    }

    // -- Properties ----------------------------------------------------

    proptest! {
        #[test]
        fn classify_is_total(
            meaning in "\\PC{0,24}",
            chinese in "\\PC{0,6}",
            pinyin in "[a-zāáǎàēéěèīíǐìōóǒòūúǔù ]{0,12}",
        ) {
            let classifier = builtin();
            let r = VocabularyRecord::new(VocabularyId(7), chinese, pinyin, meaning);
            let code = classifier.classify_code(&r);
            prop_assert!(classifier.taxonomy().contains(code));
        }

        #[test]
        fn classify_is_deterministic(meaning in "[a-zàáạảãđêôơư ]{0,24}") {
            let classifier = builtin();
            let r = record(&meaning, "");
            prop_assert_eq!(classifier.classify(&r), classifier.classify(&r));
        }
    }
}
