use normalize::NormalizeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Selects the similarity metric used to rank candidates.
///
/// The three strategies are interchangeable but never combined; a caller
/// picks one per deployment (or per test).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Character edit distance over the sorted, space-joined lemmas.
    /// Smallest distance wins; returns exactly one hit.
    #[default]
    EditDistance,
    /// Longest common subsequence over the same sorted representation.
    /// Largest length wins; returns exactly one hit.
    Lcs,
    /// Token-set difference with a minimum-overlap threshold.
    /// Fewest missing tokens wins; returns up to two hits, or none.
    SetDifference,
}

/// Strategy-specific score attached to a hit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "metric", rename_all = "snake_case")]
pub enum MatchScore {
    /// Single-character edits separating the comparison strings (lower is
    /// better).
    Distance { edits: usize },
    /// Length of the longest common character subsequence (higher is
    /// better).
    CommonSubsequence { length: usize },
    /// Distinct input tokens absent from the candidate (lower is better).
    MissingTokens { count: usize },
}

/// A single ranked hit against the candidate set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchHit {
    /// Index into the caller's candidate slice.
    pub index: usize,
    /// Score under the strategy that produced this hit.
    pub score: MatchScore,
}

/// Errors produced by the matching layer.
///
/// Matching itself is total: an empty candidate set or a candidate set with
/// no qualifying member yields an empty hit list, not an error. Only
/// capability construction can fail.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The normalization pipeline could not be built.
    #[error("normalization error: {0}")]
    Normalize(#[from] NormalizeError),
}
