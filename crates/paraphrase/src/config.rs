use serde::{Deserialize, Serialize};

use crate::error::ParaphraseError;

/// Runtime configuration for the paraphrase route.
///
/// Serde-friendly and cheap to clone so it can sit inside higher-level
/// configs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParaphraseConfig {
    /// Pool of intermediate language codes; two distinct members are drawn
    /// per paraphrase. Must contain at least two entries.
    pub languages: Vec<String>,
    /// Language the text starts and ends in.
    pub source_language: String,
    /// Translation endpoint, Google Translate v2 shaped.
    pub api_url: String,
    /// API key passed as the `key` query parameter when present.
    pub api_key: Option<String>,
    /// Per-request timeout applied by the HTTP client, in seconds.
    pub timeout_secs: u64,
}

impl Default for ParaphraseConfig {
    fn default() -> Self {
        Self {
            languages: vec!["fr".into(), "de".into(), "es".into()],
            source_language: "en".into(),
            api_url: "https://translation.googleapis.com/language/translate/v2".into(),
            api_key: None,
            timeout_secs: 10,
        }
    }
}

impl ParaphraseConfig {
    /// Validate the configuration before any network call is attempted.
    pub fn validate(&self) -> Result<(), ParaphraseError> {
        if self.languages.len() < 2 {
            return Err(ParaphraseError::InvalidConfig(
                "at least two intermediate languages are required".into(),
            ));
        }
        if self.languages.iter().any(|lang| lang.trim().is_empty()) {
            return Err(ParaphraseError::InvalidConfig(
                "language codes must not be empty".into(),
            ));
        }
        if self.source_language.trim().is_empty() {
            return Err(ParaphraseError::InvalidConfig(
                "source_language must not be empty".into(),
            ));
        }
        if self.api_url.trim().is_empty() {
            return Err(ParaphraseError::InvalidConfig(
                "api_url must not be empty".into(),
            ));
        }
        Ok(())
    }
}
