//! Per-commit transform applied before grouping

use std::fmt::Debug;

use tracing::trace;

use crate::types::Commit;
use quill_core::{github_issue_url, jira_issue_url, IssueLinker, Manifest};

/// Hash prefix length kept in the changelog
pub const HASH_LENGTH: usize = 17;

/// Classifies and annotates a parsed commit, or drops it from the output
pub trait CommitTransform: Send + Sync + Debug {
    /// Return the rewritten commit, or `None` to leave it out of the changelog
    fn transform(&self, commit: Commit) -> Option<Commit>;
}

/// Transform that titles commits by type and links Jira issue keys
#[derive(Debug, Clone, Default)]
pub struct JiraTransform {
    manifest: Manifest,
}

impl JiraTransform {
    /// Create a transform reading tracker URLs from `manifest`
    pub fn new(manifest: Manifest) -> Self {
        Self { manifest }
    }

    /// The manifest tracker URLs are derived from
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Jira browse URL from `bugs.url`
    pub fn jira_url(&self) -> Option<String> {
        jira_issue_url(&self.manifest)
    }

    /// GitHub issues URL from `repository.url`
    pub fn issue_url(&self) -> Option<String> {
        github_issue_url(&self.manifest)
    }
}

impl CommitTransform for JiraTransform {
    fn transform(&self, mut commit: Commit) -> Option<Commit> {
        let mut discard = true;
        let linker = self.jira_url().map(IssueLinker::new);

        for note in &mut commit.notes {
            if note.title == "BREAKING CHANGE" {
                note.title = "BREAKING CHANGES".to_string();
            }

            if note.title.starts_with("ISSUES CLOSED") {
                if let Some(linker) = &linker {
                    note.text = linker.linkify(&note.text).into_owned();
                }
            }

            discard = false;
        }

        // Without notes, only feat/fix/perf/revert survive.
        let title = match commit.commit_type.as_deref() {
            Some("feat") => Some("Features"),
            Some("fix") => Some("Bug Fixes"),
            Some("perf") => Some("Performance Improvements"),
            Some("revert") => Some("Reverts"),
            _ if discard => {
                trace!(header = ?commit.header, "dropping commit without notes");
                return None;
            }
            Some("docs") => Some("Documentation"),
            Some("style") => Some("Styles"),
            Some("refactor") => Some("Code Refactoring"),
            Some("test") => Some("Tests"),
            Some("chore") => Some("Chores"),
            _ => None,
        };
        if let Some(title) = title {
            commit.commit_type = Some(title.to_string());
        }

        if commit.scope.as_deref() == Some("*") {
            commit.scope = Some(String::new());
        }

        if let Some(hash) = commit.hash.as_mut() {
            if let Some((end, _)) = hash.char_indices().nth(HASH_LENGTH) {
                hash.truncate(end);
            }
        }

        if let (Some(subject), Some(linker)) = (commit.subject.as_mut(), &linker) {
            *subject = linker.linkify(subject).into_owned();
        }

        Some(commit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Note;
    use serde_json::json;

    fn jira_transform() -> JiraTransform {
        JiraTransform::new(Manifest::from_value(json!({
            "bugs": { "url": "https://acme.atlassian.net/jira/browse" },
            "repository": { "url": "git+https://github.com/acme/app.git" }
        })))
    }

    fn commit(commit_type: &str) -> Commit {
        Commit {
            commit_type: Some(commit_type.to_string()),
            subject: Some("do something".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_titles_for_release_types() {
        let transform = JiraTransform::default();
        for (raw, title) in [
            ("feat", "Features"),
            ("fix", "Bug Fixes"),
            ("perf", "Performance Improvements"),
            ("revert", "Reverts"),
        ] {
            let out = transform.transform(commit(raw)).unwrap();
            assert_eq!(out.commit_type.as_deref(), Some(title));
        }
    }

    #[test]
    fn test_docs_without_notes_is_dropped() {
        let transform = JiraTransform::default();
        for raw in ["docs", "style", "refactor", "test", "chore", "build"] {
            assert!(transform.transform(commit(raw)).is_none(), "{raw} kept");
        }
    }

    #[test]
    fn test_docs_with_note_is_kept() {
        let mut docs = commit("docs");
        docs.notes.push(Note::new("ISSUES CLOSED", "DOC-1"));

        let out = JiraTransform::default().transform(docs).unwrap();
        assert_eq!(out.commit_type.as_deref(), Some("Documentation"));
    }

    #[test]
    fn test_unknown_type_with_note_passes_through() {
        let mut build = commit("build");
        build.notes.push(Note::new("BREAKING CHANGE", "node 20 required"));

        let out = JiraTransform::default().transform(build).unwrap();
        assert_eq!(out.commit_type.as_deref(), Some("build"));
        assert_eq!(out.notes[0].title, "BREAKING CHANGES");
    }

    #[test]
    fn test_hash_truncated() {
        let mut feat = commit("feat");
        feat.hash = Some("0123456789abcdef0123456789abcdef01234567".to_string());

        let out = JiraTransform::default().transform(feat).unwrap();
        assert_eq!(out.hash.as_deref(), Some("0123456789abcdef0"));

        let out = JiraTransform::default().transform(commit("fix")).unwrap();
        assert!(out.hash.is_none());
    }

    #[test]
    fn test_wildcard_scope_cleared() {
        let mut feat = commit("feat");
        feat.scope = Some("*".to_string());
        let out = JiraTransform::default().transform(feat).unwrap();
        assert_eq!(out.scope.as_deref(), Some(""));

        let mut fix = commit("fix");
        fix.scope = Some("api".to_string());
        let out = JiraTransform::default().transform(fix).unwrap();
        assert_eq!(out.scope.as_deref(), Some("api"));
    }

    #[test]
    fn test_breaking_change_renamed_and_keeps_chore() {
        let mut chore = commit("chore");
        chore.notes.push(Note::new("BREAKING CHANGE", "drop node 16"));

        let out = JiraTransform::default().transform(chore).unwrap();
        assert_eq!(out.commit_type.as_deref(), Some("Chores"));
        assert_eq!(out.notes[0].title, "BREAKING CHANGES");
    }

    #[test]
    fn test_links_issue_keys_in_notes_and_subject() {
        let mut fix = commit("fix");
        fix.subject = Some("stop crash in APP-42".to_string());
        fix.notes.push(Note::new("ISSUES CLOSED", "APP-42"));

        let out = jira_transform().transform(fix).unwrap();
        assert_eq!(
            out.subject.as_deref(),
            Some("stop crash in [APP-42](https://acme.atlassian.net/browse/APP-42)")
        );
        assert_eq!(
            out.notes[0].text,
            "[APP-42](https://acme.atlassian.net/browse/APP-42)"
        );
    }

    #[test]
    fn test_no_links_without_jira_url() {
        let mut fix = commit("fix");
        fix.subject = Some("stop crash in APP-42".to_string());
        fix.notes.push(Note::new("ISSUES CLOSED", "APP-42"));

        let out = JiraTransform::default().transform(fix).unwrap();
        assert_eq!(out.subject.as_deref(), Some("stop crash in APP-42"));
        assert_eq!(out.notes[0].text, "APP-42");
    }

    #[test]
    fn test_tracker_urls() {
        let transform = jira_transform();
        assert_eq!(
            transform.jira_url().as_deref(),
            Some("https://acme.atlassian.net/browse/")
        );
        assert_eq!(
            transform.issue_url().as_deref(),
            Some("https://github.com/acme/app/issues/")
        );
    }
}
