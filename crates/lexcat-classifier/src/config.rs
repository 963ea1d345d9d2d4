//! # Classifier Configuration
//!
//! Passed explicitly into [`Classifier::new`](crate::Classifier::new) so
//! each test can choose its own settings.

use serde::{Deserialize, Serialize};

use lexcat_taxonomy::FALLBACK_CODE;

/// Settings for one classifier instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Consult the legacy category name before the detector chain.
    /// Off by default.
    #[serde(default)]
    pub use_legacy_hints: bool,
    /// Code of the catch-all category.
    #[serde(default = "default_fallback_code")]
    pub fallback_code: String,
}

fn default_fallback_code() -> String {
    FALLBACK_CODE.to_string()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            use_legacy_hints: false,
            fallback_code: default_fallback_code(),
        }
    }
}

impl ClassifierConfig {
    /// Enable or disable legacy hints.
    pub fn with_legacy_hints(mut self, enabled: bool) -> Self {
        self.use_legacy_hints = enabled;
        self
    }

    /// Override the fallback code.
    pub fn with_fallback_code(mut self, code: impl Into<String>) -> Self {
        self.fallback_code = code.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_disables_legacy_hints() {
        let config = ClassifierConfig::default();
        assert!(!config.use_legacy_hints);
        assert_eq!(config.fallback_code, "khai-niem-truu-tuong");
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: ClassifierConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ClassifierConfig::default());

        let config: ClassifierConfig =
            serde_json::from_str(r#"{"use_legacy_hints":true}"#).unwrap();
        assert!(config.use_legacy_hints);
    }
}
