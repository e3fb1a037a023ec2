//! Fuzzy matching utilities
//!
//! Bounded string similarity used to score utterances against station names.

use strsim::normalized_levenshtein;

/// Calculate similarity score between two strings
///
/// Score is in `[0.0, 1.0]` and only reaches `1.0` for identical strings.
/// Comparison is case-sensitive; callers lowercase both sides first.
pub fn similarity(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

/// Highest similarity between `phrase` and any of `candidates`
///
/// Returns `0.0` when there are no candidates.
pub fn best_similarity<'a, I>(phrase: &str, candidates: I) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .map(|candidate| similarity(phrase, candidate))
        .fold(0.0, f64::max)
}
