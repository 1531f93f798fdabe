//! JSONL record loader
//!
//! Loads catalog records from JSONL format (one JSON object per line).
//! This is used for `.jsonl` catalog files and pipe-based workflows.

use super::Record;
use anyhow::{Context, Result};
use std::io::{BufRead, BufReader, Read};

/// JSONL loader for reading records from a reader
pub struct JsonlLoader;

impl JsonlLoader {
    /// Load records from a reader (e.g., stdin)
    ///
    /// Each line should be a valid JSON representation of a Record.
    /// Empty lines and lines starting with # are skipped.
    pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<Record>> {
        let buf_reader = BufReader::new(reader);
        let mut records = Vec::new();

        for (idx, line_result) in buf_reader.lines().enumerate() {
            let line_number = idx + 1;
            let line = line_result.with_context(|| format!("Failed to read line {}", line_number))?;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let record: Record = serde_json::from_str(trimmed)
                .with_context(|| format!("Invalid record at line {}", line_number))?;

            records.push(record);
        }

        Ok(records)
    }

    /// Load records from a string
    pub fn load_from_string(content: &str) -> Result<Vec<Record>> {
        Self::load_from_reader(content.as_bytes())
    }
}
