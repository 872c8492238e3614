use super::*;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use normalize::{IdentityLemmatizer, StopwordFilter};

use crate::metrics::{set_match_metrics, MatchMetrics};
use crate::types::{MatchScore, MatchStrategy};

/// Matcher with the no-op lemmatizer and the stock assistant vocabulary,
/// so every expectation below is hand-checkable.
fn identity_matcher(strategy: MatchStrategy) -> Matcher {
    Matcher::new(
        Arc::new(IdentityLemmatizer),
        StopwordFilter::assistant_defaults(),
        strategy,
    )
}

const MEETING_RESPONSES: [&str; 3] = [
    "yes, a meeting is scheduled for you tomorrow",
    "yes, you do have a meeting tomorrow",
    "yes, you are meeting someone tomorrow",
];

const MESSAGE_RESPONSES: [&str; 3] = [
    "yes, you have three new messages",
    "sure, I can check your messages",
    "yes, you have three pending messages",
];

const SHIFT_RESPONSES: [&str; 3] = [
    "your next shift is tomorrow at 10am",
    "you are working next tomorrow at 10am",
    "you have to go to work tomorrow at 10am",
];

// ==================== Scenario tables ====================

#[test]
fn meeting_questions_edit_distance() {
    let matcher = identity_matcher(MatchStrategy::EditDistance);
    let cases = [
        ("am I scheduled for a meeting tomorrow", 0),
        ("do I have a meeting tomorrow", 1),
        ("am I meeting someone tomorrow", 2),
    ];
    for (question, expected) in cases {
        let hits = matcher.best_matches(question, &MEETING_RESPONSES);
        assert_eq!(hits.len(), 1, "{question}");
        assert_eq!(hits[0].index, expected, "{question}");
        // Normalized forms are identical, so the winning distance is zero.
        assert_eq!(hits[0].score, MatchScore::Distance { edits: 0 });
    }
}

#[test]
fn meeting_questions_lcs() {
    let matcher = identity_matcher(MatchStrategy::Lcs);
    let cases = [
        ("am I scheduled for a meeting tomorrow", 0, 26),
        ("do I have a meeting tomorrow", 1, 24),
        ("am I meeting someone tomorrow", 2, 24),
    ];
    for (question, expected, length) in cases {
        let hits = matcher.best_matches(question, &MEETING_RESPONSES);
        assert_eq!(hits.len(), 1, "{question}");
        assert_eq!(hits[0].index, expected, "{question}");
        assert_eq!(hits[0].score, MatchScore::CommonSubsequence { length });
    }
}

#[test]
fn message_questions_edit_distance() {
    let matcher = identity_matcher(MatchStrategy::EditDistance);
    let cases = [
        ("do I have any messages", 0, 13),
        ("can you check my messages for me", 1, 12),
        ("do I have any pending messages", 2, 9),
    ];
    for (question, expected, edits) in cases {
        let hits = matcher.best_matches(question, &MESSAGE_RESPONSES);
        assert_eq!(hits[0].index, expected, "{question}");
        assert_eq!(hits[0].score, MatchScore::Distance { edits });
    }
}

#[test]
fn shift_questions_edit_distance() {
    let matcher = identity_matcher(MatchStrategy::EditDistance);
    let cases = [
        ("when is my next shift", 0),
        ("when am I working next", 1),
        ("when do I have to go to work", 2),
    ];
    for (question, expected) in cases {
        let hits = matcher.best_matches(question, &SHIFT_RESPONSES);
        assert_eq!(hits[0].index, expected, "{question}");
    }
}

#[test]
fn meeting_question_with_default_lemmatizer() {
    // "scheduled"/"meeting" stem identically on both sides, so the best
    // candidate still collapses to distance zero under the rule-based
    // default.
    let matcher = Matcher::with_defaults(MatchStrategy::EditDistance);
    let hits = matcher.best_matches("am I scheduled for a meeting tomorrow", &MEETING_RESPONSES);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].index, 0);
    assert_eq!(hits[0].score, MatchScore::Distance { edits: 0 });
}

#[test]
fn pronoun_substitution_reaches_set_difference() {
    let matcher = Matcher::new(
        Arc::new(IdentityLemmatizer),
        StopwordFilter::from_words(["what's", "is"]),
        MatchStrategy::SetDifference,
    );
    let candidates = ["my name is Bambi", "i can help with that"];
    let hits = matcher.best_matches("what's your name", &candidates);
    // Input normalizes to {my, name}; the first candidate covers both.
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].index, 0);
    assert_eq!(hits[0].score, MatchScore::MissingTokens { count: 0 });
}

// ==================== Strategy A/B properties ====================

#[test]
fn edit_distance_returns_exactly_one_in_range_hit() {
    let matcher = identity_matcher(MatchStrategy::EditDistance);
    for question in ["do I have any messages", "completely unrelated words", ""] {
        let hits = matcher.best_matches(question, &MESSAGE_RESPONSES);
        assert_eq!(hits.len(), 1, "{question:?}");
        assert!(hits[0].index < MESSAGE_RESPONSES.len());
    }
}

#[test]
fn lcs_returns_exactly_one_in_range_hit() {
    let matcher = identity_matcher(MatchStrategy::Lcs);
    for question in ["when is my next shift", ""] {
        let hits = matcher.best_matches(question, &SHIFT_RESPONSES);
        assert_eq!(hits.len(), 1, "{question:?}");
        assert!(hits[0].index < SHIFT_RESPONSES.len());
    }
}

#[test]
fn word_order_does_not_change_scores() {
    let matcher = Matcher::new(
        Arc::new(IdentityLemmatizer),
        StopwordFilter::empty(),
        MatchStrategy::EditDistance,
    );
    let input = "alpha beta gamma";
    let straight = matcher.best_matches(input, &["gamma beta alpha delta"]);
    let permuted = matcher.best_matches(input, &["delta alpha gamma beta"]);
    assert_eq!(straight[0].score, permuted[0].score);
}

#[test]
fn ties_keep_the_first_occurrence() {
    let matcher = Matcher::new(
        Arc::new(IdentityLemmatizer),
        StopwordFilter::empty(),
        MatchStrategy::EditDistance,
    );
    // Both candidates normalize to the same sorted string.
    let hits = matcher.best_matches("alpha beta", &["beta alpha", "alpha beta"]);
    assert_eq!(hits[0].index, 0);
    assert_eq!(hits[0].score, MatchScore::Distance { edits: 0 });

    let matcher = Matcher::new(
        Arc::new(IdentityLemmatizer),
        StopwordFilter::empty(),
        MatchStrategy::Lcs,
    );
    let hits = matcher.best_matches("alpha beta", &["beta alpha", "alpha beta"]);
    assert_eq!(hits[0].index, 0);
}

// ==================== Strategy C semantics ====================

#[test]
fn set_difference_ranks_ascending_and_caps_at_two() {
    let matcher = identity_matcher(MatchStrategy::SetDifference);
    // Input set {do, have, pending, messages}: candidate 2 misses one
    // token, candidate 0 misses two, candidate 1 misses too many.
    let hits = matcher.best_matches("do I have any pending messages", &MESSAGE_RESPONSES);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].index, 2);
    assert_eq!(hits[0].score, MatchScore::MissingTokens { count: 1 });
    assert_eq!(hits[1].index, 0);
    assert_eq!(hits[1].score, MatchScore::MissingTokens { count: 2 });
}

#[test]
fn set_difference_keeps_lowest_index_within_a_bucket() {
    let matcher = identity_matcher(MatchStrategy::SetDifference);
    // Candidates 0 and 2 both miss exactly {do}; the representative for
    // that bucket is the earlier index, and candidate 1 does not qualify.
    let hits = matcher.best_matches("do I have any messages", &MESSAGE_RESPONSES);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].index, 0);
    assert_eq!(hits[0].score, MatchScore::MissingTokens { count: 1 });
}

#[test]
fn set_difference_threshold_boundaries() {
    let matcher = Matcher::new(
        Arc::new(IdentityLemmatizer),
        StopwordFilter::empty(),
        MatchStrategy::SetDifference,
    );

    // One distinct token: no candidate can qualify, even an exact copy.
    assert!(matcher.best_matches("alpha", &["alpha"]).is_empty());

    // Two distinct tokens: both must be present (d <= 0).
    let hits = matcher.best_matches("alpha beta", &["alpha gamma", "beta alpha delta"]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].index, 1);
    assert_eq!(hits[0].score, MatchScore::MissingTokens { count: 0 });

    // Three distinct tokens: one may be missing (d <= 1).
    let hits = matcher.best_matches("alpha beta gamma", &["alpha beta x", "alpha y z"]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].index, 0);
    assert_eq!(hits[0].score, MatchScore::MissingTokens { count: 1 });
}

#[test]
fn set_difference_collapses_duplicate_input_tokens() {
    let matcher = Matcher::new(
        Arc::new(IdentityLemmatizer),
        StopwordFilter::empty(),
        MatchStrategy::SetDifference,
    );
    // {alpha, beta} has two distinct members, so the threshold is d <= 0.
    let hits = matcher.best_matches("alpha alpha beta", &["beta alpha"]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].score, MatchScore::MissingTokens { count: 0 });
}

#[test]
fn set_difference_no_overlap_yields_no_hits() {
    let matcher = identity_matcher(MatchStrategy::SetDifference);
    let hits = matcher.best_matches("entirely unrelated question", &MEETING_RESPONSES);
    assert!(hits.is_empty());
}

// ==================== Edge conditions ====================

#[test]
fn empty_candidate_list_yields_no_hits_for_every_strategy() {
    let empty: [&str; 0] = [];
    for strategy in [
        MatchStrategy::EditDistance,
        MatchStrategy::Lcs,
        MatchStrategy::SetDifference,
    ] {
        let matcher = identity_matcher(strategy);
        assert!(matcher.best_matches("do I have any messages", &empty).is_empty());
    }
}

#[test]
fn whitespace_only_input_is_handled() {
    let matcher = identity_matcher(MatchStrategy::SetDifference);
    assert!(matcher.best_matches("   ", &MEETING_RESPONSES).is_empty());
}

#[test]
fn with_dictionary_propagates_missing_table() {
    let err = Matcher::with_dictionary(
        "./missing/lemmas.tsv",
        StopwordFilter::assistant_defaults(),
        MatchStrategy::EditDistance,
    )
    .expect_err("missing lemma table should be fatal");
    assert!(matches!(err, MatchError::Normalize(_)));
    assert!(err.to_string().contains("lemmatizer unavailable"));
}

#[test]
fn adding_a_shared_stop_word_never_increases_overlap() {
    let input = "the alpha beta";
    let candidate = "the alpha gamma";
    let overlap = |stopwords: StopwordFilter| {
        let input_tokens = normalize_input(input, &IdentityLemmatizer, &stopwords);
        let candidate_tokens = normalize_candidate(candidate, &IdentityLemmatizer, &stopwords);
        let candidate_set: FxHashSet<&str> =
            candidate_tokens.iter().map(String::as_str).collect();
        input_tokens
            .iter()
            .filter(|token| candidate_set.contains(token.as_str()))
            .count()
    };
    let without = overlap(StopwordFilter::empty());
    let with = overlap(StopwordFilter::from_words(["the"]));
    assert!(with <= without);
    assert_eq!(without, 2);
    assert_eq!(with, 1);
}

// ==================== Metrics ====================

#[derive(Default)]
struct RecordingMetrics {
    calls: RwLock<Vec<(MatchStrategy, usize, usize)>>,
}

impl MatchMetrics for RecordingMetrics {
    fn record_match(
        &self,
        strategy: MatchStrategy,
        candidates: usize,
        hits: usize,
        _latency: Duration,
    ) {
        self.calls
            .write()
            .expect("recorder lock")
            .push((strategy, candidates, hits));
    }
}

#[test]
fn installed_recorder_sees_every_match() {
    let recorder = Arc::new(RecordingMetrics::default());
    set_match_metrics(Some(recorder.clone()));

    let matcher = identity_matcher(MatchStrategy::SetDifference);
    matcher.best_matches("do I have any messages", &MESSAGE_RESPONSES);

    set_match_metrics(None);

    // The recorder slot is process-global, so sibling tests may also have
    // reported while ours was installed; assert containment, not equality.
    let calls = recorder.calls.read().expect("recorder lock");
    assert!(calls
        .iter()
        .any(|call| *call == (MatchStrategy::SetDifference, MESSAGE_RESPONSES.len(), 1)));
}
