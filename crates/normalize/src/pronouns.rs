//! Second-person to first-person rewriting.
//!
//! Candidate phrases are pre-written responses ("your shift is tomorrow")
//! while the input is a question ("when is my shift"). Rewriting the
//! question into response voice before comparison maximizes token overlap.
//! Applied to the input phrase only, never to candidates.

use once_cell::sync::Lazy;
use regex::Regex;

static YOUR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\byour\b").expect("pronoun pattern compiles"));
static YOU: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\byou\b").expect("pronoun pattern compiles"));

/// Whole-word replacement of `your` -> `my` and `you` -> `i` in raw text.
///
/// Word-boundary matching, case-insensitive; replacements are lowercase
/// since the comparison domain is lowercase. "yours" and "youth" are left
/// alone.
pub fn substitute_pronouns(text: &str) -> String {
    let text = YOUR.replace_all(text, "my");
    YOU.replace_all(&text, "i").into_owned()
}

/// The same rewrite over an already-tokenized sequence.
///
/// A token is a whole word, so exact comparison here is equivalent to the
/// word-boundary match of [`substitute_pronouns`]. This is the form the
/// pipeline uses.
pub fn substitute_tokens(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .map(|token| {
            if token.eq_ignore_ascii_case("your") {
                "my".to_string()
            } else if token.eq_ignore_ascii_case("you") {
                "i".to_string()
            } else {
                token
            }
        })
        .collect()
}
