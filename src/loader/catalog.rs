//! Content catalog
//!
//! A catalog is an ordered list of sections, each holding the records of one
//! content collection. Catalog files live in a single directory; every
//! `*.json` (array of records) or `*.jsonl` file becomes one section keyed by
//! its file stem.

use super::{JsonlLoader, Record};
use anyhow::{anyhow, bail, Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// A named content collection
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Section key (e.g. `aa`, `prompts`)
    pub key: String,
    /// Records in catalog order
    pub records: Vec<Record>,
}

impl Section {
    /// Create a section from its key and records
    pub fn new(key: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            key: key.into(),
            records,
        }
    }
}

/// Read-only collection of sections supplied to the search engine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    sections: Vec<Section>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from pre-built sections
    pub fn from_sections(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Append a section
    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// All sections in order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Total number of records across all sections
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.records.len()).sum()
    }

    /// Check if the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate `(section key, record)` pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> {
        self.sections
            .iter()
            .flat_map(|s| s.records.iter().map(move |r| (s.key.as_str(), r)))
    }

    /// Record count per section
    pub fn section_counts(&self) -> Vec<(&str, usize)> {
        self.sections
            .iter()
            .map(|s| (s.key.as_str(), s.records.len()))
            .collect()
    }

    /// Load a single catalog file as one section
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Section> {
        let path = path.as_ref();
        let key = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| anyhow!("Cannot derive section key from {}", path.display()))?;

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        let records = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str::<Vec<Record>>(&content)
                .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?,
            Some("jsonl") => JsonlLoader::load_from_string(&content)
                .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?,
            _ => bail!("Unsupported catalog file type: {}", path.display()),
        };

        tracing::debug!("Loaded {} records from {}", records.len(), path.display());
        Ok(Section::new(key, records))
    }

    /// Load every `*.json` / `*.jsonl` file directly under `dir`
    ///
    /// Files are read in file-name order so that section order, and with it
    /// tie-breaking in ranking, is deterministic.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            bail!("Catalog directory not found: {}", dir.display());
        }

        let mut catalog = Self::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.with_context(|| format!("Failed to scan {}", dir.display()))?;
            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            match path.extension().and_then(|e| e.to_str()) {
                Some("json") | Some("jsonl") => catalog.push(Self::load_file(path)?),
                _ => tracing::warn!("Skipping non-catalog file: {}", path.display()),
            }
        }

        tracing::info!(
            "Loaded catalog from {}: {} sections, {} records",
            dir.display(),
            catalog.sections.len(),
            catalog.len()
        );
        Ok(catalog)
    }
}
