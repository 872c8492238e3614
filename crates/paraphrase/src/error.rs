use thiserror::Error;

/// Errors surfaced by the paraphrase layer.
///
/// Callers treat every variant as recoverable: a paraphrase that fails is
/// skipped, never allowed to sink the match result it decorates.
#[derive(Debug, Error)]
pub enum ParaphraseError {
    /// Configuration is inconsistent (e.g., fewer than two intermediate
    /// languages to route through).
    #[error("invalid paraphrase config: {0}")]
    InvalidConfig(String),
    /// The underlying translation call failed, timed out, or returned a
    /// response we could not interpret.
    #[error("translation failed: {0}")]
    Translation(String),
}
