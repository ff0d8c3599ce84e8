//! Parser configuration

use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use quill_core::error::ChangelogError;

// `\w` is ASCII-only in both patterns so `föat: x` is not a typed header.
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?-u:\w)*)(?:\((.*)\))?: (.*)$").expect("Invalid regex")
});

static REVERT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^revert:\s([\s\S]*?)\s*This reverts commit ((?-u:\w)*)\.")
        .expect("Invalid regex")
});

/// Default note keywords, in match order
pub const NOTE_KEYWORDS: [&str; 2] = ["BREAKING CHANGE", "ISSUES CLOSED"];

/// How a commit message is tokenized.
///
/// Capture groups of `header_pattern` and `revert_pattern` map positionally to
/// the field names in the matching correspondence list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserConfig {
    /// Pattern for the first line of a commit message
    #[serde(serialize_with = "serialize_regex")]
    pub header_pattern: Regex,
    /// Field names for the header pattern's capture groups
    pub header_correspondence: Vec<String>,
    /// Phrases that open a note block in the body
    pub note_keywords: Vec<String>,
    /// Pattern recognizing a revert commit
    #[serde(serialize_with = "serialize_regex")]
    pub revert_pattern: Regex,
    /// Field names for the revert pattern's capture groups
    pub revert_correspondence: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            header_pattern: HEADER_PATTERN.clone(),
            header_correspondence: strings(&["type", "scope", "subject"]),
            note_keywords: strings(&NOTE_KEYWORDS),
            revert_pattern: REVERT_PATTERN.clone(),
            revert_correspondence: strings(&["header", "hash"]),
        }
    }
}

impl ParserConfig {
    /// Replace the header pattern
    pub fn with_header_pattern(mut self, pattern: &str) -> Result<Self, ChangelogError> {
        self.header_pattern = compile("header", pattern)?;
        Ok(self)
    }

    /// Replace the revert pattern
    pub fn with_revert_pattern(mut self, pattern: &str) -> Result<Self, ChangelogError> {
        self.revert_pattern = compile("revert", pattern)?;
        Ok(self)
    }

    /// Add a note keyword
    pub fn note_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.note_keywords.push(keyword.into());
        self
    }

    /// Pattern matching a body line that opens a note.
    ///
    /// Group 1 is the keyword, group 2 the first line of the note text.
    pub fn notes_pattern(&self) -> Result<Regex, ChangelogError> {
        let keywords = self
            .note_keywords
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        compile("notes", &format!(r"(?i)^[\s|*]*({keywords})[:\s]+(.*)"))
    }
}

fn compile(field: &'static str, pattern: &str) -> Result<Regex, ChangelogError> {
    Regex::new(pattern).map_err(|source| ChangelogError::InvalidPattern { field, source })
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn serialize_regex<S: Serializer>(regex: &Regex, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(regex.as_str())
}
