//! Searcher implementation
//!
//! Ranks every record of a catalog against a query. The catalog is borrowed
//! per call and nothing is cached between calls, so each query is a full
//! recomputation.

use super::{relevance, SearchResult};
use crate::config::{SearchConfig, DEFAULT_MAX_RESULTS};
use crate::loader::Catalog;

/// Ranks catalog records by relevance
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    /// Create a searcher with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a searcher with a specific configuration
    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Score every record, keep those above 0, sort by descending score and
    /// truncate to `max_results`
    ///
    /// Sorting is stable: records with equal scores keep catalog order. The
    /// list never exceeds [`DEFAULT_MAX_RESULTS`], whatever the config says.
    pub fn search(&self, query: &str, catalog: &Catalog) -> Vec<SearchResult> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let section_filter = self.config.section_filter.as_deref();
        let mut results: Vec<SearchResult> = catalog
            .iter()
            .filter(|(section, _)| section_filter.map_or(true, |f| f == *section))
            .filter_map(|(section, record)| {
                let score = relevance(query, record);
                (score > 0.0).then(|| SearchResult::from_record(section, record, score))
            })
            .collect();

        let matched = results.len();
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(self.config.max_results.min(DEFAULT_MAX_RESULTS));

        tracing::debug!(
            query,
            scanned = catalog.len(),
            matched,
            returned = results.len(),
            "search recomputed"
        );
        results
    }
}
