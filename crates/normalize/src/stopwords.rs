//! Stop-word filtering against a caller-configured vocabulary.

use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::lemma::{lemmatize_token, Lemmatizer};

/// A set of low-signal words removed from token sequences before scoring.
///
/// The vocabulary is configuration, not a constant: deployments tune
/// precision/recall by including or excluding words (personal pronouns in
/// particular), so every constructor takes the list from the caller.
/// Comparison is over lowercase words; constructors lowercase their input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

/// The vocabulary the original assistant deployment shipped with.
const ASSISTANT_DEFAULTS: [&str; 17] = [
    "yes", "no", "you", "are", "on", "at", "with", "from", "to", "am", "is", "my", "i", "for",
    "a", "of", "any",
];

impl StopwordFilter {
    /// Builds a filter from a caller-supplied vocabulary.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The stock assistant vocabulary (includes personal pronouns).
    pub fn assistant_defaults() -> Self {
        Self::from_words(ASSISTANT_DEFAULTS)
    }

    /// A filter that removes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Projects the vocabulary into lemma space.
    ///
    /// The pipeline filters *after* lemmatization, and a rule-based
    /// lemmatizer can map a vocabulary word away from itself ("any" becomes
    /// "ani" under Snowball). Filtering lemmas against the surface
    /// vocabulary would silently miss those words, so the engine runs the
    /// vocabulary through the same lemmatizer once at construction. Both
    /// forms are kept so pre-lemma callers keep working.
    pub fn lemmatized(&self, lemmatizer: &dyn Lemmatizer) -> StopwordFilter {
        let mut words: FxHashSet<String> = self
            .words
            .iter()
            .map(|word| lemmatize_token(lemmatizer, word))
            .collect();
        words.extend(self.words.iter().cloned());
        Self { words }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Removes every stop word from the sequence, preserving the relative
    /// order of the remainder.
    pub fn filter_tokens(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|token| !self.is_stopword(token))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
