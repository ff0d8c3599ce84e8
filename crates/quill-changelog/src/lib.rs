//! Quill Changelog - conventional changelog preset with Jira issue links
//!
//! This crate assembles the parser and writer configuration consumed by a
//! changelog renderer, and provides a reference parser and writer pipeline
//! to exercise that configuration.

pub mod parser;
pub mod preset;
pub mod templates;
pub mod transform;
pub mod types;
pub mod writer;

pub use parser::{CommitParser, ConventionalParser, ParserConfig};
pub use preset::Preset;
pub use templates::Templates;
pub use transform::{CommitTransform, JiraTransform};
pub use types::{Commit, CommitGroup, Fields, Note, NoteGroup, Revert};
pub use writer::{ProcessedCommits, WriterConfig};
