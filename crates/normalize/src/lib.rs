//! Phrasepick normalization layer.
//!
//! This crate turns a free-text phrase into the token representation the
//! matching engine scores: split into words, reduced to lemmas, stripped of
//! low-signal stop words, and (for the input side only) rewritten from
//! second person into first person.
//!
//! ## What we do
//!
//! - Tokenization on whitespace plus a small punctuation delimiter set
//! - Per-token lowercasing and lemmatization behind a swappable capability
//! - Stop-word filtering against a caller-configured vocabulary
//! - Whole-word pronoun substitution (`your` -> `my`, `you` -> `i`)
//!
//! ## Pure function guarantee
//!
//! No I/O and no clock calls on the hot path. Give us the same phrase,
//! lemmatizer, and stop-word set, you get the same token sequence on any
//! machine. The only construction-time I/O is [`DictionaryLemmatizer`]
//! loading its table, and that failure is surfaced as a typed error rather
//! than a silent fallback.
//!
//! ## Invariants worth knowing
//!
//! - Token order is preserved through every stage; nothing here sorts
//! - A lemma sequence has the same length and order as its source tokens
//! - Stop-word filtering happens in lemma space (see
//!   [`StopwordFilter::lemmatized`])
//! - Pronoun substitution applies to the input phrase only, after the
//!   stop-word pass, so substituted words survive pronoun-bearing stop lists

mod error;
mod lemma;
mod pipeline;
mod pronouns;
mod stopwords;
mod token;

pub use crate::error::NormalizeError;
pub use crate::lemma::{
    default_lemmatizer, lemmatize_phrase, lemmatize_token, DictionaryLemmatizer,
    IdentityLemmatizer, Lemmatizer, SnowballLemmatizer,
};
pub use crate::pipeline::{normalize_candidate, normalize_input};
pub use crate::pronouns::{substitute_pronouns, substitute_tokens};
pub use crate::stopwords::StopwordFilter;
pub use crate::token::tokenize;
