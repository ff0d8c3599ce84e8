//! Conventional commit parser driven by a [`ParserConfig`]

use regex::{Captures, Regex};
use tracing::trace;

use super::{CommitParser, ParserConfig};
use crate::types::{Commit, Note, Revert};
use quill_core::error::ChangelogError;

/// Parser for conventional commit messages
pub struct ConventionalParser {
    config: ParserConfig,
    notes_pattern: Regex,
}

impl ConventionalParser {
    /// Create a parser for the given configuration
    pub fn new(config: ParserConfig) -> Result<Self, ChangelogError> {
        let notes_pattern = config.notes_pattern()?;
        Ok(Self {
            config,
            notes_pattern,
        })
    }

    /// The configuration this parser applies
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    fn apply_header(&self, commit: &mut Commit, header: &str) {
        let Some(caps) = self.config.header_pattern.captures(header) else {
            trace!(header, "header does not match pattern");
            return;
        };

        for (name, value) in correspond(&self.config.header_correspondence, &caps) {
            match name {
                "type" => commit.commit_type = value,
                "scope" => commit.scope = value,
                "subject" => commit.subject = value,
                _ => {}
            }
        }
    }

    fn apply_revert(&self, commit: &mut Commit, message: &str) {
        let Some(caps) = self.config.revert_pattern.captures(message) else {
            return;
        };

        let mut revert = Revert::default();
        for (name, value) in correspond(&self.config.revert_correspondence, &caps) {
            match name {
                "header" => revert.header = value,
                "hash" => revert.hash = value,
                _ => {}
            }
        }
        commit.revert = Some(revert);
    }

    /// Split the body into free text and note blocks.
    ///
    /// A note runs from its keyword line to the next keyword line.
    fn apply_body<'a>(&self, commit: &mut Commit, lines: impl Iterator<Item = &'a str>) {
        let mut body_lines = Vec::new();
        let mut notes: Vec<Note> = Vec::new();

        for line in lines {
            if let Some(caps) = self.notes_pattern.captures(line) {
                notes.push(Note::new(&caps[1], &caps[2]));
            } else if let Some(note) = notes.last_mut() {
                note.text.push('\n');
                note.text.push_str(line);
            } else {
                body_lines.push(line);
            }
        }

        for note in &mut notes {
            note.text = note.text.trim().to_string();
        }

        let body = body_lines.join("\n").trim().to_string();
        commit.body = (!body.is_empty()).then_some(body);
        commit.notes = notes;
    }
}

impl CommitParser for ConventionalParser {
    fn parse_message(&self, hash: Option<&str>, message: &str) -> Commit {
        let mut lines = message.lines().map(|l| l.trim_end_matches('\r'));
        let header = lines.next().unwrap_or_default().trim_end();

        let mut commit = Commit {
            hash: hash.map(str::to_string),
            header: Some(header.to_string()),
            ..Default::default()
        };

        self.apply_header(&mut commit, header);
        self.apply_body(&mut commit, lines);
        self.apply_revert(&mut commit, message);

        commit
    }
}

/// Pair correspondence names with capture groups 1..n
fn correspond<'n>(
    names: &'n [String],
    caps: &Captures<'_>,
) -> impl Iterator<Item = (&'n str, Option<String>)> {
    let values: Vec<Option<String>> = (1..=names.len())
        .map(|i| caps.get(i).map(|m| m.as_str().to_string()))
        .collect();
    names.iter().map(String::as_str).zip(values)
}
