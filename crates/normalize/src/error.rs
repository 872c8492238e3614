use thiserror::Error;

/// Errors that can occur while building the normalization pipeline.
///
/// Normalization itself never fails: any phrase, including the empty one,
/// produces a (possibly empty) token sequence. Only capability construction
/// can go wrong, and that must be loud — matching with silently unlemmatized
/// tokens would change results in a hard-to-diagnose way.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// The lemmatizer capability could not be initialized.
    #[error("lemmatizer unavailable: {0}")]
    LemmatizerUnavailable(String),
    /// A lemma table row did not parse as `word<TAB>lemma`.
    #[error("malformed lemma table entry at line {line}: {entry:?}")]
    MalformedLemmaEntry { line: usize, entry: String },
}
