//! kbsearch: fuzzy relevance search for a knowledge-base content catalog
//!
//! This library ranks content records (articles, prompts, case studies,
//! best practices) against a live query using a four-tier field matcher and
//! a weighted multi-field relevance score.
//!
//! # Features
//!
//! - Case-insensitive exact / prefix / substring / subsequence matching
//! - Weighted relevance over title, category and body fields
//! - Stable, capped ranking recomputed per query
//! - Keyboard-driven search session with wrap-around selection
//! - Catalog loading from JSON / JSONL data files
//!
//! # Modules
//!
//! - `config`: Application settings and per-query search options
//! - `loader`: Records, sections and catalog file loading
//! - `search`: Field matcher, relevance aggregator, searcher and rendering
//! - `session`: Search session state machine, selection cursor and hotkey

pub mod config;
pub mod loader;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use config::SearchConfig;
pub use loader::{Catalog, Record, Section};
pub use search::{SearchResult, Searcher};
pub use session::{SearchSession, SessionState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
