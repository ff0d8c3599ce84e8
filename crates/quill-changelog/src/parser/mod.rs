//! Commit parsing

mod config;
mod conventional;

pub use config::ParserConfig;
pub use conventional::ConventionalParser;

use crate::types::Commit;
use quill_git::CommitInfo;

/// Trait for commit parsers
pub trait CommitParser: Send + Sync {
    /// Parse a raw commit message
    fn parse_message(&self, hash: Option<&str>, message: &str) -> Commit;

    /// Parse a commit read from git
    fn parse(&self, commit: &CommitInfo) -> Commit {
        self.parse_message(Some(&commit.hash), &commit.message())
    }
}
