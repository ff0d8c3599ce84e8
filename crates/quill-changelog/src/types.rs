//! Changelog types

use serde::{Deserialize, Serialize};

/// Named field access used by group and sort directives
pub trait Fields {
    /// Value of the named field, `None` if absent or unknown
    fn field(&self, name: &str) -> Option<&str>;
}

/// A commit parsed from its message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Commit type (feat, fix, ...), replaced by its section title when transformed
    #[serde(rename = "type")]
    pub commit_type: Option<String>,
    /// Scope (optional, in parentheses)
    pub scope: Option<String>,
    /// Commit subject
    pub subject: Option<String>,
    /// Commit hash
    pub hash: Option<String>,
    /// First line of the message
    pub header: Option<String>,
    /// Message body without the notes
    pub body: Option<String>,
    /// Annotation blocks such as `BREAKING CHANGE`
    pub notes: Vec<Note>,
    /// Set when the commit reverts another one
    pub revert: Option<Revert>,
}

impl Fields for Commit {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "type" => self.commit_type.as_deref(),
            "scope" => self.scope.as_deref(),
            "subject" => self.subject.as_deref(),
            "hash" => self.hash.as_deref(),
            "header" => self.header.as_deref(),
            "body" => self.body.as_deref(),
            _ => None,
        }
    }
}

/// An annotation block from a commit body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Keyword that opened the block
    pub title: String,
    /// Block content
    pub text: String,
}

impl Note {
    /// Create a new note
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

impl Fields for Note {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(self.title.as_str()),
            "text" => Some(self.text.as_str()),
            _ => None,
        }
    }
}

/// The commit a revert points back to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revert {
    /// Header of the reverted commit
    pub header: Option<String>,
    /// Hash of the reverted commit
    pub hash: Option<String>,
}

/// Commits sharing a section title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitGroup {
    /// Section title
    pub title: String,
    /// Commits in this section
    pub commits: Vec<Commit>,
}

/// Notes sharing a title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteGroup {
    /// Note title, e.g. `BREAKING CHANGES`
    pub title: String,
    /// Notes in this group
    pub notes: Vec<Note>,
}
