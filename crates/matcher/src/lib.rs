//! # Phrasepick Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` sits on top of the normalization layer (`normalize`). It turns
//! an input phrase and a caller-supplied candidate list into normalized
//! token representations, scores every candidate under one of three
//! interchangeable similarity strategies, and returns the best candidate
//! index(es), ranked best-first.
//!
//! In a typical deployment you will:
//! - Build one [`Matcher`] per strategy/vocabulary configuration at startup.
//! - Call [`Matcher::best_matches`] per incoming question with the fresh
//!   candidate list; nothing is cached between calls.
//!
//! ## Core Types
//!
//! - [`MatchStrategy`]: selects the scoring strategy:
//!   - `EditDistance` — character edit distance over sorted, joined lemmas.
//!   - `Lcs` — longest common subsequence over the same representation.
//!   - `SetDifference` — missing-token count with a minimum-overlap
//!     threshold.
//! - [`MatchScore`]: the strategy-specific score carried on each hit.
//! - [`MatchHit`]: candidate index + score.
//! - [`Matcher`]: the engine wiring normalization and scoring together.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{Matcher, MatchStrategy};
//! use normalize::StopwordFilter;
//! use std::sync::Arc;
//!
//! let matcher = Matcher::new(
//!     Arc::new(normalize::IdentityLemmatizer),
//!     StopwordFilter::assistant_defaults(),
//!     MatchStrategy::EditDistance,
//! );
//!
//! let candidates = [
//!     "yes, a meeting is scheduled for you tomorrow",
//!     "yes, you do have a meeting tomorrow",
//! ];
//! let hits = matcher.best_matches("do I have a meeting tomorrow", &candidates);
//! assert_eq!(hits[0].index, 1);
//! ```
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to
//! record per-request strategy, candidate count, hit count, and latency.
//! This is typically done once during service startup so all calls through
//! [`Matcher`] share the same metrics backend.

pub mod engine;
pub mod metrics;
pub mod similarity;
pub mod types;

pub use crate::engine::Matcher;
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::types::{MatchError, MatchHit, MatchScore, MatchStrategy};
