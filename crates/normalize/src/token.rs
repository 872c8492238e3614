/// Characters that terminate a token, in addition to Unicode whitespace.
///
/// Commas, periods, and parentheses show up inside canned response phrases
/// ("yes, a meeting is scheduled..."); everything else is left attached to
/// its word.
const DELIMITERS: [char; 4] = [',', '.', '(', ')'];

/// Splits a phrase into word tokens.
///
/// Splits on whitespace and [`DELIMITERS`], discarding empty entries. Case
/// is preserved; lowercasing happens later, per token, in the lemma adapter.
/// Any input is accepted — an empty or all-delimiter phrase yields an empty
/// sequence.
pub fn tokenize(phrase: &str) -> Vec<String> {
    phrase
        .split(|ch: char| ch.is_whitespace() || DELIMITERS.contains(&ch))
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
