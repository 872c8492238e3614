use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use fxhash::FxHashSet;
use normalize::{
    default_lemmatizer, normalize_candidate, normalize_input, DictionaryLemmatizer, Lemmatizer,
    StopwordFilter,
};

use crate::metrics::metrics_recorder;
use crate::similarity::common_subsequence_len;
use crate::types::{MatchError, MatchHit, MatchScore, MatchStrategy};

#[cfg(test)]
mod tests;

/// Ranks a candidate phrase list against an input phrase.
///
/// Owns the normalization capabilities (lemmatizer + stop-word vocabulary)
/// and one [`MatchStrategy`]; everything else is per-call. Construction
/// projects the stop-word vocabulary into lemma space so filtering behaves
/// identically whichever lemmatizer is plugged in.
pub struct Matcher {
    lemmatizer: Arc<dyn Lemmatizer>,
    stopwords: StopwordFilter,
    strategy: MatchStrategy,
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("lemmatizer", &"<dyn Lemmatizer>")
            .field("stopwords", &self.stopwords)
            .field("strategy", &self.strategy)
            .finish()
    }
}

impl Matcher {
    /// Construct a matcher from an explicit lemmatizer capability.
    pub fn new(
        lemmatizer: Arc<dyn Lemmatizer>,
        stopwords: StopwordFilter,
        strategy: MatchStrategy,
    ) -> Self {
        let stopwords = stopwords.lemmatized(lemmatizer.as_ref());
        Self {
            lemmatizer,
            stopwords,
            strategy,
        }
    }

    /// Convenience constructor: shared default lemmatizer and the stock
    /// assistant stop-word vocabulary.
    pub fn with_defaults(strategy: MatchStrategy) -> Self {
        Self::new(
            default_lemmatizer(),
            StopwordFilter::assistant_defaults(),
            strategy,
        )
    }

    /// Construct a matcher over a table-driven lemmatizer loaded from
    /// `path`. A missing or malformed table is fatal and propagates.
    pub fn with_dictionary(
        path: impl AsRef<Path>,
        stopwords: StopwordFilter,
        strategy: MatchStrategy,
    ) -> Result<Self, MatchError> {
        let lemmatizer = DictionaryLemmatizer::from_path(path)?;
        Ok(Self::new(Arc::new(lemmatizer), stopwords, strategy))
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Ranks `candidates` against `input` and returns the best hit(s).
    ///
    /// Strategies `EditDistance` and `Lcs` return exactly one hit for a
    /// non-empty candidate list; `SetDifference` returns zero, one, or two,
    /// best-first. An empty candidate list always yields no hits. Indices in
    /// the hits refer to the caller's slice; mapping back to original
    /// (unnormalized) text is the caller's job.
    pub fn best_matches(&self, input: &str, candidates: &[impl AsRef<str>]) -> Vec<MatchHit> {
        let start = Instant::now();
        let input_tokens = normalize_input(input, self.lemmatizer.as_ref(), &self.stopwords);
        let normalized: Vec<Vec<String>> = candidates
            .iter()
            .map(|candidate| {
                normalize_candidate(candidate.as_ref(), self.lemmatizer.as_ref(), &self.stopwords)
            })
            .collect();

        let hits = match self.strategy {
            MatchStrategy::EditDistance => rank_edit_distance(&input_tokens, &normalized),
            MatchStrategy::Lcs => rank_lcs(&input_tokens, &normalized),
            MatchStrategy::SetDifference => rank_set_difference(&input_tokens, &normalized),
        };

        tracing::debug!(
            strategy = ?self.strategy,
            candidates = normalized.len(),
            input_tokens = input_tokens.len(),
            hits = hits.len(),
            "match_complete"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_match(self.strategy, candidates.len(), hits.len(), start.elapsed());
        }

        hits
    }
}

/// Joins tokens into the single comparison string the character-level
/// strategies score: sorted lexicographically, space-separated. Sorting
/// neutralizes word order so phrasing differences do not inflate distance.
fn sorted_join(tokens: &[String]) -> String {
    let mut words: Vec<&str> = tokens.iter().map(String::as_str).collect();
    words.sort_unstable();
    words.join(" ")
}

fn rank_edit_distance(input: &[String], candidates: &[Vec<String>]) -> Vec<MatchHit> {
    let target = sorted_join(input);
    let mut best: Option<MatchHit> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let edits = strsim::levenshtein(&target, &sorted_join(candidate));
        // Strict improvement only, so the first occurrence keeps a tie.
        let improves = match best {
            Some(MatchHit {
                score: MatchScore::Distance { edits: current },
                ..
            }) => edits < current,
            _ => true,
        };
        if improves {
            best = Some(MatchHit {
                index,
                score: MatchScore::Distance { edits },
            });
        }
    }
    best.into_iter().collect()
}

fn rank_lcs(input: &[String], candidates: &[Vec<String>]) -> Vec<MatchHit> {
    let target = sorted_join(input);
    let mut best: Option<MatchHit> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let length = common_subsequence_len(&target, &sorted_join(candidate));
        let improves = match best {
            Some(MatchHit {
                score: MatchScore::CommonSubsequence { length: current },
                ..
            }) => length > current,
            _ => true,
        };
        if improves {
            best = Some(MatchHit {
                index,
                score: MatchScore::CommonSubsequence { length },
            });
        }
    }
    best.into_iter().collect()
}

fn rank_set_difference(input: &[String], candidates: &[Vec<String>]) -> Vec<MatchHit> {
    let input_set: FxHashSet<&str> = input.iter().map(String::as_str).collect();
    // At least two distinct input tokens must appear in a candidate; with
    // fewer than two distinct tokens no candidate can qualify.
    let Some(max_missing) = input_set.len().checked_sub(2) else {
        return Vec::new();
    };

    // One representative per missing-token count, lowest candidate index
    // winning within a count.
    let mut buckets: BTreeMap<usize, usize> = BTreeMap::new();
    for (index, candidate) in candidates.iter().enumerate() {
        let candidate_set: FxHashSet<&str> = candidate.iter().map(String::as_str).collect();
        let missing = input_set
            .iter()
            .filter(|token| !candidate_set.contains(*token))
            .count();
        if missing <= max_missing {
            buckets.entry(missing).or_insert(index);
        }
    }

    buckets
        .into_iter()
        .take(2)
        .map(|(count, index)| MatchHit {
            index,
            score: MatchScore::MissingTokens { count },
        })
        .collect()
}
