//! Search configuration structures
//!
//! Defines the per-query options for the search engine.

use serde::{Deserialize, Serialize};

/// Default cap on the number of ranked results
pub const DEFAULT_MAX_RESULTS: usize = 20;

/// Search configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of results to return
    pub max_results: usize,
    /// Optional section key; records from other sections are skipped
    pub section_filter: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            section_filter: None,
        }
    }
}

impl SearchConfig {
    /// Create a new search configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of results to return
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set the section filter
    pub fn with_section_filter(mut self, section: Option<String>) -> Self {
        self.section_filter = section;
        self
    }
}
