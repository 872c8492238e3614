//! The lemma adapter: word-by-word reduction to base forms behind a
//! swappable capability trait.
//!
//! The pipeline does no linguistic work itself. It lowercases each token and
//! hands it to a [`Lemmatizer`], so the capability can be rule-based
//! ([`SnowballLemmatizer`]), table-driven ([`DictionaryLemmatizer`]), or a
//! no-op ([`IdentityLemmatizer`]) for tests and languages without one.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use fxhash::FxHashMap;
use once_cell::sync::Lazy;
use rust_stemmers::{Algorithm, Stemmer};

use crate::error::NormalizeError;

/// A capability that reduces a single lowercased word to its base form.
///
/// Implementations must be deterministic and pure: same word in, same lemma
/// out, no I/O after construction.
pub trait Lemmatizer: Send + Sync {
    fn lemma(&self, word: &str) -> String;
}

/// Lowercases a token and delegates to the lemmatizer capability.
pub fn lemmatize_token(lemmatizer: &dyn Lemmatizer, token: &str) -> String {
    lemmatizer.lemma(&token.to_lowercase())
}

/// Maps [`lemmatize_token`] over a token sequence, preserving order and
/// length.
pub fn lemmatize_phrase(lemmatizer: &dyn Lemmatizer, tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .map(|token| lemmatize_token(lemmatizer, token))
        .collect()
}

/// Rule-based English reduction via the Snowball stemming algorithm.
///
/// This is the default capability. It maps inflected forms onto a common
/// stem ("meetings" and "meeting" both become "meet"), which is what the
/// matcher needs: both sides of a comparison pass through the same rules, so
/// the stem does not have to be a dictionary headword.
pub struct SnowballLemmatizer {
    stemmer: Stemmer,
}

impl SnowballLemmatizer {
    pub fn english() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for SnowballLemmatizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Lemmatizer for SnowballLemmatizer {
    fn lemma(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }
}

/// Table-driven lemmatizer backed by a `word<TAB>lemma` file.
///
/// Words absent from the table pass through unchanged. Construction is the
/// only fallible step; a missing or malformed table is fatal to the
/// pipeline and surfaces as [`NormalizeError::LemmatizerUnavailable`] or
/// [`NormalizeError::MalformedLemmaEntry`].
#[derive(Debug)]
pub struct DictionaryLemmatizer {
    entries: FxHashMap<String, String>,
}

impl DictionaryLemmatizer {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, NormalizeError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            NormalizeError::LemmatizerUnavailable(format!("{}: {err}", path.display()))
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self, NormalizeError> {
        let mut entries = FxHashMap::default();
        for (idx, line) in reader.lines().enumerate() {
            let line = line
                .map_err(|err| NormalizeError::LemmatizerUnavailable(err.to_string()))?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let (word, lemma) =
                trimmed
                    .split_once('\t')
                    .ok_or_else(|| NormalizeError::MalformedLemmaEntry {
                        line: idx + 1,
                        entry: trimmed.to_string(),
                    })?;
            entries.insert(word.trim().to_lowercase(), lemma.trim().to_lowercase());
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Lemmatizer for DictionaryLemmatizer {
    fn lemma(&self, word: &str) -> String {
        match self.entries.get(word) {
            Some(lemma) => lemma.clone(),
            None => word.to_string(),
        }
    }
}

/// No-op lemmatizer: every word is its own lemma.
///
/// Satisfies the same contract as the real capabilities so tests (and
/// deployments without an English lemmatizer) can run the full pipeline
/// deterministically.
pub struct IdentityLemmatizer;

impl Lemmatizer for IdentityLemmatizer {
    fn lemma(&self, word: &str) -> String {
        word.to_string()
    }
}

static DEFAULT_LEMMATIZER: Lazy<Arc<SnowballLemmatizer>> =
    Lazy::new(|| Arc::new(SnowballLemmatizer::english()));

/// Process-wide shared default lemmatizer.
///
/// Constructed once on first use and reused for every call; the underlying
/// rule table is read-only and safe for concurrent readers.
pub fn default_lemmatizer() -> Arc<SnowballLemmatizer> {
    Arc::clone(&DEFAULT_LEMMATIZER)
}
