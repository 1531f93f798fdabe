//! Record data structures
//!
//! Defines the searchable content records and the boundary validation applied
//! when they are deserialized from catalog files.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when a catalog record violates its preconditions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A required field is absent or blank
    #[error("record is missing required field `{0}`")]
    MissingField(&'static str),

    /// The difficulty label is not one of the known levels
    #[error("invalid difficulty '{0}' (expected beginner, intermediate or advanced)")]
    InvalidDifficulty(String),
}

/// Difficulty level attached to a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Lowercase label, as written in catalog files
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(RecordError::InvalidDifficulty(s.to_string())),
        }
    }
}

/// Wire shape of a record before validation
#[derive(Debug, Deserialize)]
struct RawRecord {
    title: Option<String>,
    category: Option<String>,
    description: Option<String>,
    content: Option<String>,
    why: Option<String>,
    difficulty: Option<String>,
}

/// A searchable content item (article, prompt, case study or practice)
///
/// The section a record belongs to is not stored here; it is attached by the
/// [`Section`](super::Section) grouping that owns the record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Record title
    pub title: String,
    /// Record category
    pub category: String,
    /// Short description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Full body text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Rationale text (used by best-practice entries)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,
    /// Difficulty level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawRecord::deserialize(deserializer)?;
        Record::validate(raw).map_err(serde::de::Error::custom)
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, RecordError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(RecordError::MissingField(field)),
    }
}

impl Record {
    fn validate(raw: RawRecord) -> Result<Self, RecordError> {
        let title = required(raw.title, "title")?;
        let category = required(raw.category, "category")?;
        let difficulty = raw
            .difficulty
            .as_deref()
            .map(|d| d.parse::<Difficulty>())
            .transpose()?;

        Ok(Self {
            title,
            category,
            description: raw.description,
            content: raw.content,
            why: raw.why,
            difficulty,
        })
    }

    /// Create a record with the two required fields
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            description: None,
            content: None,
            why: None,
            difficulty: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the body content
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the rationale text
    pub fn with_why(mut self, why: impl Into<String>) -> Self {
        self.why = Some(why.into());
        self
    }

    /// Set the difficulty
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// First non-empty of description and why, or an empty string
    pub fn summary(&self) -> &str {
        [&self.description, &self.why]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.is_empty())
            .unwrap_or("")
    }
}
