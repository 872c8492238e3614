//! Umbrella crate for the Phrasepick response picker.
//!
//! This crate stitches together normalization, matching, and the optional
//! paraphrase step so callers can answer "which canned response best fits
//! this question" with a single API entry point:
//!
//! - [`select_response`] — the one-shot matching contract: input phrase in,
//!   0..2 original candidate strings out, best first.
//! - [`ResponsePicker`] — a configured picker that additionally decorates
//!   the selected response with a time-boxed paraphrase when asked to.
//!
//! The stage crates are re-exported, so depending on `phrasepick` alone is
//! enough for custom wiring (own lemmatizer, own stop-word vocabulary, own
//! translator).
//!
//! ```
//! use phrasepick::{select_response, MatchStrategy, StopwordFilter};
//!
//! let candidates = [
//!     "yes, a meeting is scheduled for you tomorrow",
//!     "yes, you do have a meeting tomorrow",
//! ];
//! let picked = select_response(
//!     "do I have a meeting tomorrow",
//!     &candidates,
//!     MatchStrategy::EditDistance,
//!     &StopwordFilter::assistant_defaults(),
//! );
//! assert_eq!(picked, vec![candidates[1].to_string()]);
//! ```

use std::time::Duration;

pub use matcher::{
    set_match_metrics, MatchError, MatchHit, MatchMetrics, MatchScore, MatchStrategy, Matcher,
};
pub use normalize::{
    default_lemmatizer, lemmatize_phrase, normalize_candidate, normalize_input,
    substitute_pronouns, tokenize, DictionaryLemmatizer, IdentityLemmatizer, Lemmatizer,
    NormalizeError, SnowballLemmatizer, StopwordFilter,
};
pub use paraphrase::{
    paraphrase_with, HttpTranslator, IdentityTranslator, ParaphraseConfig, ParaphraseError,
    Translator,
};

mod config;
pub use crate::config::PickerConfig;

/// Runs one match and maps the winning indices back to original candidate
/// text.
///
/// Returns 0, 1, or 2 candidates best-first depending on `strategy`; an
/// empty vector signals "no match" (empty candidate list, or no qualifying
/// candidate under [`MatchStrategy::SetDifference`]). Uses the process-wide
/// default lemmatizer.
pub fn select_response(
    input: &str,
    candidates: &[impl AsRef<str>],
    strategy: MatchStrategy,
    stopwords: &StopwordFilter,
) -> Vec<String> {
    let matcher = Matcher::new(default_lemmatizer(), stopwords.clone(), strategy);
    matcher
        .best_matches(input, candidates)
        .into_iter()
        .map(|hit| candidates[hit.index].as_ref().to_string())
        .collect()
}

/// The selected response, plus its reworded variant when paraphrasing was
/// configured and succeeded in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Original text of the best-matching candidate.
    pub text: String,
    /// Reworded variant; `None` when paraphrasing is disabled, failed, or
    /// missed its deadline.
    pub paraphrased: Option<String>,
}

/// A configured matcher plus optional paraphrase decoration.
///
/// The matcher runs synchronously on the critical path; the paraphrase is
/// strictly best-effort. A slow or failing translation never delays or
/// sinks the match result — it is awaited under a deadline and dropped on
/// any error.
pub struct ResponsePicker {
    matcher: Matcher,
    paraphrase: Option<ParaphraseConfig>,
    paraphrase_timeout: Duration,
}

impl ResponsePicker {
    pub fn new(config: PickerConfig) -> Self {
        let matcher = Matcher::new(default_lemmatizer(), config.stopwords, config.strategy);
        Self {
            matcher,
            paraphrase: config.paraphrase,
            paraphrase_timeout: config.paraphrase_timeout,
        }
    }

    /// Builds a picker around an explicitly constructed matcher (custom
    /// lemmatizer capability, custom vocabulary).
    pub fn with_matcher(
        matcher: Matcher,
        paraphrase: Option<ParaphraseConfig>,
        paraphrase_timeout: Duration,
    ) -> Self {
        Self {
            matcher,
            paraphrase,
            paraphrase_timeout,
        }
    }

    /// Matching only: ranked original-text candidates, best first.
    pub fn select(&self, input: &str, candidates: &[impl AsRef<str>]) -> Vec<String> {
        self.matcher
            .best_matches(input, candidates)
            .into_iter()
            .map(|hit| candidates[hit.index].as_ref().to_string())
            .collect()
    }

    /// Matches and, when configured, paraphrases the winner through the
    /// HTTP translation capability. `None` means no match.
    pub async fn respond(
        &self,
        input: &str,
        candidates: &[impl AsRef<str>],
    ) -> Option<Response> {
        let mut ranked = self.select(input, candidates);
        if ranked.is_empty() {
            return None;
        }
        let text = ranked.swap_remove(0);
        let paraphrased = match &self.paraphrase {
            Some(cfg) => {
                self.try_paraphrase(paraphrase::paraphrase(&text, cfg))
                    .await
            }
            None => None,
        };
        Some(Response { text, paraphrased })
    }

    /// [`respond`](Self::respond) with an explicit translator and random
    /// source, for tests and custom capabilities.
    pub async fn respond_with(
        &self,
        translator: &dyn Translator,
        rng: &mut fastrand::Rng,
        input: &str,
        candidates: &[impl AsRef<str>],
    ) -> Option<Response> {
        let mut ranked = self.select(input, candidates);
        if ranked.is_empty() {
            return None;
        }
        let text = ranked.swap_remove(0);
        let paraphrased = match &self.paraphrase {
            Some(cfg) => {
                self.try_paraphrase(paraphrase_with(translator, rng, &text, cfg))
                    .await
            }
            None => None,
        };
        Some(Response { text, paraphrased })
    }

    async fn try_paraphrase<F>(&self, attempt: F) -> Option<String>
    where
        F: std::future::Future<Output = Result<String, ParaphraseError>>,
    {
        match tokio::time::timeout(self.paraphrase_timeout, attempt).await {
            Ok(Ok(reworded)) => Some(reworded),
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "paraphrase_failed");
                None
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.paraphrase_timeout.as_millis() as u64,
                    "paraphrase_timed_out"
                );
                None
            }
        }
    }
}
