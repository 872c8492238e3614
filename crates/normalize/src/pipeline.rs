use crate::lemma::{lemmatize_phrase, Lemmatizer};
use crate::pronouns::substitute_tokens;
use crate::stopwords::StopwordFilter;
use crate::token::tokenize;

/// Normalizes a candidate phrase: tokenize, lemmatize, drop stop words.
///
/// The stop-word filter is expected to already be in the same space as the
/// lemmas it sees (see [`StopwordFilter::lemmatized`]).
pub fn normalize_candidate(
    phrase: &str,
    lemmatizer: &dyn Lemmatizer,
    stopwords: &StopwordFilter,
) -> Vec<String> {
    stopwords.filter_tokens(lemmatize_phrase(lemmatizer, &tokenize(phrase)))
}

/// Normalizes the input phrase: everything [`normalize_candidate`] does,
/// then pronoun substitution.
///
/// Substitution runs after the stop-word pass so that substituted words
/// survive vocabularies that list personal pronouns.
pub fn normalize_input(
    phrase: &str,
    lemmatizer: &dyn Lemmatizer,
    stopwords: &StopwordFilter,
) -> Vec<String> {
    substitute_tokens(normalize_candidate(phrase, lemmatizer, stopwords))
}
