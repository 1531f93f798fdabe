//! Configuration module for kbsearch
//!
//! This module defines the application settings and per-query search options.

pub mod app_config;
pub mod path_resolver;
mod search_config;

pub use search_config::{SearchConfig, DEFAULT_MAX_RESULTS};
