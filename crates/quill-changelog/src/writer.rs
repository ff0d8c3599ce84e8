//! Writer configuration and the commit processing pipeline

use std::cmp::Ordering;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::templates::Templates;
use crate::transform::CommitTransform;
use crate::types::{Commit, CommitGroup, Fields, Note, NoteGroup};

/// How transformed commits are grouped, sorted and rendered
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriterConfig {
    #[serde(skip)]
    transform: Arc<dyn CommitTransform>,
    /// Commit field commits are grouped by
    pub group_by: String,
    /// Group field commit groups are sorted by
    pub commit_groups_sort: String,
    /// Commit fields commits are sorted by within a group
    pub commits_sort: Vec<String>,
    /// Group field note groups are sorted by
    pub note_groups_sort: String,
    /// Note fields notes are sorted by within a group
    pub notes_sort: Vec<String>,
    /// Templates for the renderer
    #[serde(flatten)]
    pub templates: Templates,
}

/// Output of [`WriterConfig::process`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedCommits {
    /// Commits grouped by section
    pub commit_groups: Vec<CommitGroup>,
    /// Notes grouped by title
    pub note_groups: Vec<NoteGroup>,
}

impl ProcessedCommits {
    /// Whether nothing survived the transform
    pub fn is_empty(&self) -> bool {
        self.commit_groups.is_empty()
    }
}

impl WriterConfig {
    /// Create a writer configuration with the default directives
    pub fn new<T: CommitTransform + 'static>(transform: T, templates: Templates) -> Self {
        Self {
            transform: Arc::new(transform),
            group_by: "type".to_string(),
            commit_groups_sort: "title".to_string(),
            commits_sort: vec!["scope".to_string(), "subject".to_string()],
            note_groups_sort: "title".to_string(),
            notes_sort: vec!["title".to_string(), "text".to_string()],
            templates,
        }
    }

    /// The per-commit transform
    pub fn transform(&self) -> &dyn CommitTransform {
        self.transform.as_ref()
    }

    /// Transform, group and sort commits
    #[instrument(skip(self, commits))]
    pub fn process(&self, commits: impl IntoIterator<Item = Commit>) -> ProcessedCommits {
        let mut commit_groups: Vec<CommitGroup> = Vec::new();
        let mut note_groups: Vec<NoteGroup> = Vec::new();
        let mut dropped = 0usize;

        for commit in commits {
            let Some(commit) = self.transform.transform(commit) else {
                dropped += 1;
                continue;
            };

            for note in &commit.notes {
                push_note(&mut note_groups, note.clone());
            }

            let title = commit.field(&self.group_by).unwrap_or_default().to_string();
            match commit_groups.iter_mut().find(|g| g.title == title) {
                Some(group) => group.commits.push(commit),
                None => commit_groups.push(CommitGroup {
                    title,
                    commits: vec![commit],
                }),
            }
        }

        if self.commit_groups_sort == "title" {
            commit_groups.sort_by(|a, b| a.title.cmp(&b.title));
        }
        for group in &mut commit_groups {
            group
                .commits
                .sort_by(|a, b| compare_fields(&self.commits_sort, a, b));
        }

        if self.note_groups_sort == "title" {
            note_groups.sort_by(|a, b| a.title.cmp(&b.title));
        }
        for group in &mut note_groups {
            group
                .notes
                .sort_by(|a, b| compare_fields(&self.notes_sort, a, b));
        }

        debug!(
            groups = commit_groups.len(),
            note_groups = note_groups.len(),
            dropped,
            "commits processed"
        );

        ProcessedCommits {
            commit_groups,
            note_groups,
        }
    }
}

fn push_note(groups: &mut Vec<NoteGroup>, note: Note) {
    match groups.iter_mut().find(|g| g.title == note.title) {
        Some(group) => group.notes.push(note),
        None => groups.push(NoteGroup {
            title: note.title.clone(),
            notes: vec![note],
        }),
    }
}

/// Compare two values field by field; absent fields sort first
fn compare_fields<T: Fields>(keys: &[String], a: &T, b: &T) -> Ordering {
    keys.iter()
        .map(|key| a.field(key).cmp(&b.field(key)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}
