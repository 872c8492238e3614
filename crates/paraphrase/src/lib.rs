//! Phrasepick paraphrase layer.
//!
//! Rewords a selected response by round-tripping it through machine
//! translation: two hops through randomly chosen intermediate languages,
//! then back to the source language. The translation service is an opaque
//! text-to-text transform behind the [`Translator`] trait; this crate only
//! routes through it.
//!
//! A few things worth knowing:
//!
//! - Paraphrasing is strictly optional decoration. It performs network I/O,
//!   can be slow, and can fail; callers run it off the critical path and
//!   fall back to the unreworded text. Nothing here retries.
//! - The language route is drawn from an injectable random source, so tests
//!   can pin the sequence with a seeded [`fastrand::Rng`].
//! - [`IdentityTranslator`] satisfies the same contract as the HTTP
//!   implementation for offline tests.
//!
//! ## Example
//!
//! ```no_run
//! use paraphrase::{paraphrase, ParaphraseConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let cfg = ParaphraseConfig {
//!         api_key: Some("YOUR_API_KEY".into()),
//!         ..Default::default()
//!     };
//!     let reworded = paraphrase("your shift starts tomorrow", &cfg).await.unwrap();
//!     println!("{reworded}");
//! }
//! ```

mod config;
mod error;
mod translator;

pub use crate::config::ParaphraseConfig;
pub use crate::error::ParaphraseError;
pub use crate::translator::{HttpTranslator, IdentityTranslator, Translator};

/// Rewords `text` using the HTTP translator and a fresh random source.
pub async fn paraphrase(text: &str, cfg: &ParaphraseConfig) -> Result<String, ParaphraseError> {
    let translator = HttpTranslator::new(cfg);
    let mut rng = fastrand::Rng::new();
    paraphrase_with(&translator, &mut rng, text, cfg).await
}

/// Rewords `text` through an explicit translator and random source.
///
/// Draws two distinct intermediate languages from `cfg.languages`, then
/// applies three translation hops: source → first → second → back to
/// `cfg.source_language`. Any hop failing fails the whole paraphrase; the
/// caller decides whether that is fatal (it should not be).
pub async fn paraphrase_with(
    translator: &dyn Translator,
    rng: &mut fastrand::Rng,
    text: &str,
    cfg: &ParaphraseConfig,
) -> Result<String, ParaphraseError> {
    cfg.validate()?;
    let (first, second) = pick_route(rng, &cfg.languages);
    tracing::debug!(%first, %second, "paraphrase_route");

    let hop = translator.translate(text, first).await?;
    let hop = translator.translate(&hop, second).await?;
    translator.translate(&hop, &cfg.source_language).await
}

/// Draws two distinct languages from the pool.
///
/// The second draw is over the remaining pool, so the pair is always
/// distinct; validation guarantees the pool has at least two members.
fn pick_route<'a>(rng: &mut fastrand::Rng, languages: &'a [String]) -> (&'a str, &'a str) {
    let first = rng.usize(..languages.len());
    let mut second = rng.usize(..languages.len() - 1);
    if second >= first {
        second += 1;
    }
    (&languages[first], &languages[second])
}
