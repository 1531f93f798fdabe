//! Fuzzy field matcher
//!
//! Scores how well a single text field matches a query using four tiers:
//!
//! | Tier      | Condition                          | Score |
//! |-----------|------------------------------------|-------|
//! | Exact     | text equals query                  | 100   |
//! | Prefix    | text starts with query             | 80    |
//! | Substring | text contains query                | 60    |
//! | Fuzzy     | query is (partly) a subsequence    | ≤ 50  |
//!
//! All comparisons are case-insensitive.

/// Score for an exact (case-insensitive) match
pub const EXACT_SCORE: f64 = 100.0;

/// Score when the text starts with the query
pub const PREFIX_SCORE: f64 = 80.0;

/// Score when the text contains the query
pub const SUBSTRING_SCORE: f64 = 60.0;

/// Points per query character found in order
const FUZZY_POINTS_PER_CHAR: f64 = 10.0;

/// Upper bound for the fuzzy tier
pub const FUZZY_CAP: f64 = 50.0;

/// Score a single text field against a query
///
/// The query must be non-empty; the relevance aggregator short-circuits blank
/// queries before reaching here. Returns 0 when no character of the query
/// can be found in order (including when `text` is empty).
pub fn match_score(query: &str, text: &str) -> f64 {
    let query = query.to_lowercase();
    let text = text.to_lowercase();

    if text == query {
        return EXACT_SCORE;
    }
    if text.starts_with(&query) {
        return PREFIX_SCORE;
    }
    if text.contains(&query) {
        return SUBSTRING_SCORE;
    }

    fuzzy_score(&query, &text)
}

/// Subsequence scan: each query character found in order earns points,
/// scaled by the fraction of the query that was matched.
fn fuzzy_score(query: &str, text: &str) -> f64 {
    let query: Vec<char> = query.chars().collect();
    if query.is_empty() {
        return 0.0;
    }

    let mut matched = 0usize;
    for c in text.chars() {
        if matched == query.len() {
            break;
        }
        if c == query[matched] {
            matched += 1;
        }
    }

    let raw = matched as f64 * FUZZY_POINTS_PER_CHAR;
    let coverage = matched as f64 / query.len() as f64;
    (raw * coverage).min(FUZZY_CAP)
}
