use std::time::Duration;

use matcher::MatchStrategy;
use normalize::StopwordFilter;
use paraphrase::ParaphraseConfig;
use serde::{Deserialize, Serialize};

/// Configuration for a [`ResponsePicker`](crate::ResponsePicker).
///
/// Bundles the per-deployment knobs: which similarity strategy to run,
/// which stop-word vocabulary to filter with, and whether (and how long) to
/// attempt paraphrasing the selected response. Serde-friendly so it can be
/// embedded in service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Similarity strategy the matcher dispatches on.
    pub strategy: MatchStrategy,
    /// Stop-word vocabulary; a configuration parameter, not a constant.
    pub stopwords: StopwordFilter,
    /// Paraphrase route configuration; `None` disables paraphrasing.
    pub paraphrase: Option<ParaphraseConfig>,
    /// Budget for the optional paraphrase call. A paraphrase that misses
    /// this deadline is skipped, never awaited past it.
    pub paraphrase_timeout: Duration,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            strategy: MatchStrategy::default(),
            stopwords: StopwordFilter::assistant_defaults(),
            paraphrase: None,
            paraphrase_timeout: Duration::from_secs(3),
        }
    }
}
