//! Preview command

use clap::Args;
use console::style;
use tracing::info;

use quill_changelog::{CommitParser, Preset, ProcessedCommits};
use quill_git::GitRepo;

use crate::cli::output;
use crate::cli::{Cli, OutputFormat};

/// Classify the repository history with the preset
#[derive(Debug, Args)]
pub struct PreviewCommand {
    /// Only consider commits after this revision (tag, branch or hash)
    #[arg(long, value_name = "REV")]
    pub from: Option<String>,

    /// Maximum number of commits to read
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

impl PreviewCommand {
    /// Execute the preview command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(from = ?self.from, limit = ?self.limit, "executing preview command");
        let cwd = std::env::current_dir()?;

        let runtime = tokio::runtime::Runtime::new()?;
        let preset = runtime.block_on(Preset::load(&cli.preset_options()))?;
        let parser = preset.parser()?;

        let repo = GitRepo::discover(&cwd)?;
        info!(root = %repo.root().display(), "reading history");
        let mut history = match &self.from {
            Some(rev) => repo.commits_since(rev)?,
            None => repo.history(self.limit)?,
        };
        if let Some(limit) = self.limit {
            history.truncate(limit);
        }

        let total = history.len();
        let processed = preset
            .writer_opts
            .process(history.iter().map(|c| parser.parse(c)));

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&processed)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    print_text(&processed, total);
                }
            }
        }

        Ok(())
    }
}

fn print_text(processed: &ProcessedCommits, total: usize) {
    if processed.is_empty() {
        output::warning(&format!("None of {} commits would appear in the changelog.", total));
        return;
    }

    let kept: usize = processed.commit_groups.iter().map(|g| g.commits.len()).sum();
    output::info(&format!("{} of {} commits would appear in the changelog", kept, total));
    println!();

    for group in &processed.commit_groups {
        println!("{}", output::header(&group.title));
        for commit in &group.commits {
            let scope = match commit.scope.as_deref() {
                Some(scope) if !scope.is_empty() => format!("{}: ", style(scope).bold()),
                _ => String::new(),
            };
            let text = commit
                .subject
                .as_deref()
                .or(commit.header.as_deref())
                .unwrap_or_default();
            let hash = commit.hash.as_deref().unwrap_or_default();
            println!("  - {}{} {}", scope, text, style(hash).dim());
        }
        println!();
    }

    for group in &processed.note_groups {
        println!("{}", output::header(&group.title));
        for note in &group.notes {
            println!("  - {}", note.text);
        }
        println!();
    }
}
