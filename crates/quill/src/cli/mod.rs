//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::{ConfigCommand, PreviewCommand};
use quill_core::PresetOptions;

/// Quill - Jira-flavoured conventional changelog preset
#[derive(Debug, Parser)]
#[command(name = "quill")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// Project manifest (defaults to ./package.json)
    #[arg(long, global = true, env = "QUILL_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Directory containing template.hbs, header.hbs, commit.hbs and footer.hbs
    #[arg(long, global = true, env = "QUILL_TEMPLATES")]
    pub templates: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the resolved parser and writer configuration
    Config(ConfigCommand),

    /// Show how the repository history would be classified
    Preview(PreviewCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Config(ref cmd) => cmd.execute(&self),
            Commands::Preview(ref cmd) => cmd.execute(&self),
        }
    }

    /// Preset options after applying `--manifest` and `--templates`
    pub fn preset_options(&self) -> PresetOptions {
        let mut options = PresetOptions::default();
        if let Some(manifest) = &self.manifest {
            options = options.with_manifest(manifest);
        }
        if let Some(templates) = &self.templates {
            options = options.with_templates_dir(templates);
        }
        options
    }
}
