//! Git types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commit read from the repository history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitInfo {
    /// Commit hash (full)
    pub hash: String,
    /// First line of the commit message
    pub summary: String,
    /// Everything after the summary, if any
    pub body: Option<String>,
    /// Author name
    pub author: String,
    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
}

impl CommitInfo {
    /// Create a new CommitInfo
    pub fn new(
        hash: impl Into<String>,
        summary: impl Into<String>,
        author: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            hash: hash.into(),
            summary: summary.into(),
            body: None,
            author: author.into(),
            timestamp,
        }
    }

    /// Set the commit body; an empty body is stored as `None`
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        let body = body.into();
        self.body = if body.trim().is_empty() { None } else { Some(body) };
        self
    }

    /// The full message: summary, blank line, body
    pub fn message(&self) -> String {
        match &self.body {
            Some(body) => format!("{}\n\n{}", self.summary, body),
            None => self.summary.clone(),
        }
    }
}
