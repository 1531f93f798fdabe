//! Content catalog loading module
//!
//! This module provides the searchable record types and loaders for the
//! structured data files that make up the content catalog.

mod catalog;
mod jsonl;
mod record;
mod sections;

pub use catalog::{Catalog, Section};
pub use jsonl::JsonlLoader;
pub use record::{Difficulty, Record, RecordError};
pub use sections::section_label;
