//! Search module
//!
//! This module provides field matching, relevance aggregation, ranking and
//! the result type handed back to callers.

mod matcher;
mod relevance;
pub mod render;
mod searcher;

pub use matcher::{match_score, EXACT_SCORE, FUZZY_CAP, PREFIX_SCORE, SUBSTRING_SCORE};
pub use relevance::{
    relevance, BODY_WEIGHT, CATEGORY_WEIGHT, DIFFICULTY_BONUS, DIFFICULTY_BONUS_THRESHOLD,
    TITLE_WEIGHT,
};
pub use searcher::Searcher;

use crate::loader::{Difficulty, Record};
use serde::{Deserialize, Serialize};

/// Search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Record title
    pub title: String,
    /// Record category
    pub category: String,
    /// First available of description / why (empty when neither is set)
    pub description: String,
    /// Difficulty level, if the record has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Key of the section the record came from
    pub section: String,
    /// Relevance score
    pub score: f64,
}

impl SearchResult {
    /// Build a result from a scored record
    pub fn from_record(section: &str, record: &Record, score: f64) -> Self {
        Self {
            title: record.title.clone(),
            category: record.category.clone(),
            description: record.summary().to_string(),
            difficulty: record.difficulty,
            section: section.to_string(),
            score,
        }
    }
}
