//! Relevance aggregator
//!
//! Combines per-field match scores into one relevance number per record.

use super::match_score;
use crate::loader::Record;

/// Weight applied to the title match score
pub const TITLE_WEIGHT: f64 = 3.0;

/// Weight applied to the category match score
pub const CATEGORY_WEIGHT: f64 = 2.0;

/// Weight applied to description, content and why match scores
pub const BODY_WEIGHT: f64 = 1.0;

/// Flat bonus when the query matches the difficulty label
pub const DIFFICULTY_BONUS: f64 = 5.0;

/// Difficulty match score that must be exceeded to earn the bonus
pub const DIFFICULTY_BONUS_THRESHOLD: f64 = 20.0;

/// Weighted relevance of a record for a query
///
/// Blank queries score 0. A record qualifies as a search result iff its
/// relevance is strictly greater than 0.
pub fn relevance(query: &str, record: &Record) -> f64 {
    if query.trim().is_empty() {
        return 0.0;
    }

    let mut score = match_score(query, &record.title) * TITLE_WEIGHT;
    score += match_score(query, &record.category) * CATEGORY_WEIGHT;

    for body in [&record.description, &record.content, &record.why]
        .into_iter()
        .flatten()
    {
        score += match_score(query, body) * BODY_WEIGHT;
    }

    if let Some(difficulty) = record.difficulty {
        if match_score(query, difficulty.as_str()) > DIFFICULTY_BONUS_THRESHOLD {
            score += DIFFICULTY_BONUS;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::Difficulty;

    #[test]
    fn test_blank_query_scores_zero() {
        let record = Record::new("Anything", "Everything");
        assert_eq!(relevance("", &record), 0.0);
        assert_eq!(relevance("   \t", &record), 0.0);
    }

    #[test]
    fn test_exact_title_contributes_300() {
        let record = Record::new("Claude Code Setup", "Unrelated");
        let score = relevance("Claude Code Setup", &record);
        assert!(score >= 300.0);
    }

    #[test]
    fn test_category_weight() {
        // Title "zzz" shares no chars with "mcp"; category exact -> 200
        let record = Record::new("zzz", "MCP");
        assert_eq!(relevance("mcp", &record), 200.0);
    }

    #[test]
    fn test_body_fields_weight_one() {
        let record = Record::new("zzz", "qqq")
            .with_description("uses mcp")
            .with_content("the mcp server")
            .with_why("mcp is great");
        // description substring 60, content substring 60, why prefix 80
        assert_eq!(relevance("mcp", &record), 200.0);
    }

    #[test]
    fn test_missing_optional_fields_contribute_nothing() {
        let bare = Record::new("zzz", "qqq");
        assert_eq!(relevance("mcp", &bare), 0.0);
    }

    #[test]
    fn test_difficulty_bonus() {
        let record = Record::new("zzz", "qqq").with_difficulty(Difficulty::Beginner);
        // "begin" is a prefix of "beginner" (80 > 20)
        assert_eq!(relevance("begin", &record), DIFFICULTY_BONUS);
    }

    #[test]
    fn test_weak_difficulty_match_earns_no_bonus() {
        // "bx" vs "beginner": only 'b' in order -> 10 * 1/2 = 5, below threshold
        let record = Record::new("zzz", "qqq").with_difficulty(Difficulty::Beginner);
        assert_eq!(relevance("bx", &record), 0.0);
    }
}
