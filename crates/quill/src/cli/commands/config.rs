//! Config command

use clap::Args;
use tracing::info;

use quill_changelog::{JiraTransform, Preset, Templates};
use quill_core::Manifest;

use crate::cli::output;
use crate::cli::{Cli, OutputFormat};

/// Print the resolved preset
#[derive(Debug, Args)]
pub struct ConfigCommand {
    /// Include the template sources in text output
    #[arg(long)]
    pub show_templates: bool,
}

impl ConfigCommand {
    /// Execute the config command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let options = cli.preset_options();
        info!(manifest = %options.manifest_path.display(), "executing config command");

        let manifest = Manifest::load(&options.manifest_path);
        let runtime = tokio::runtime::Runtime::new()?;
        let templates = runtime.block_on(Templates::load_for(&options))?;
        let preset = Preset::assemble(manifest.clone(), templates);

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&preset)?);
            }
            OutputFormat::Text => {
                if cli.quiet {
                    return Ok(());
                }
                let transform = JiraTransform::new(manifest);
                print_text(&preset, &transform, self.show_templates || cli.verbose);
            }
        }

        Ok(())
    }
}

fn print_text(preset: &Preset, transform: &JiraTransform, with_templates: bool) {
    let parser = &preset.parser_opts;
    let writer = &preset.writer_opts;

    println!("{}", output::header("Parser"));
    println!("{}", output::key_value("header pattern", parser.header_pattern.as_str()));
    println!(
        "{}",
        output::key_value("header fields", &parser.header_correspondence.join(", "))
    );
    println!("{}", output::key_value("note keywords", &parser.note_keywords.join(", ")));
    println!("{}", output::key_value("revert pattern", parser.revert_pattern.as_str()));
    println!();

    println!("{}", output::header("Writer"));
    println!("{}", output::key_value("group by", &writer.group_by));
    println!("{}", output::key_value("groups sorted by", &writer.commit_groups_sort));
    println!("{}", output::key_value("commits sorted by", &writer.commits_sort.join(", ")));
    println!("{}", output::key_value("note groups sorted by", &writer.note_groups_sort));
    println!("{}", output::key_value("notes sorted by", &writer.notes_sort.join(", ")));
    println!();

    println!("{}", output::header("Issue trackers"));
    let unset = || "(not configured)".to_string();
    println!(
        "{}",
        output::key_value("jira", &transform.jira_url().unwrap_or_else(unset))
    );
    println!(
        "{}",
        output::key_value("github", &transform.issue_url().unwrap_or_else(unset))
    );

    if with_templates {
        let templates = &writer.templates;
        for (name, source) in [
            ("main template", &templates.main_template),
            ("header partial", &templates.header_partial),
            ("commit partial", &templates.commit_partial),
            ("footer partial", &templates.footer_partial),
        ] {
            println!();
            println!("{}", output::header(name));
            println!("{}", source.trim_end());
        }
    }
}
