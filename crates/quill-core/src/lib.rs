//! Quill Core - Core library for the Quill changelog preset
//!
//! This crate provides error handling, project manifest loading, issue tracker
//! URL derivation and issue linkification shared by the other Quill crates.

pub mod error;
pub mod link;
pub mod manifest;
pub mod options;
pub mod urls;

pub use error::{QuillError, Result};
pub use link::IssueLinker;
pub use manifest::Manifest;
pub use options::PresetOptions;
pub use urls::{github_issue_url, github_url_from_git, jira_issue_url};
