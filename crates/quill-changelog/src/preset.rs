//! Preset assembly

use serde::Serialize;
use tracing::{info, instrument};

use crate::parser::{ConventionalParser, ParserConfig};
use crate::templates::Templates;
use crate::transform::JiraTransform;
use crate::writer::WriterConfig;
use quill_core::{Manifest, PresetOptions, Result};

/// The resolved changelog configuration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    /// How commit messages are tokenized
    pub parser_opts: ParserConfig,
    /// How commits are classified, grouped and rendered
    pub writer_opts: WriterConfig,
}

impl Preset {
    /// Load the manifest and templates named by `options` and assemble the preset.
    ///
    /// A missing manifest is tolerated; a missing template is not.
    #[instrument(skip(options), fields(manifest = %options.manifest_path.display()))]
    pub async fn load(options: &PresetOptions) -> Result<Self> {
        let manifest = Manifest::load(&options.manifest_path);
        let templates = Templates::load_for(options).await?;
        Ok(Self::assemble(manifest, templates))
    }

    /// Assemble using `./package.json` and the bundled templates
    pub async fn load_default() -> Result<Self> {
        Self::load(&PresetOptions::default()).await
    }

    /// Assemble from an already loaded manifest and template set
    pub fn assemble(manifest: Manifest, templates: Templates) -> Self {
        let writer_opts = WriterConfig::new(JiraTransform::new(manifest), templates);

        info!("changelog preset assembled");
        Self {
            parser_opts: ParserConfig::default(),
            writer_opts,
        }
    }

    /// Build a parser for the preset's parser options
    pub fn parser(&self) -> Result<ConventionalParser> {
        Ok(ConventionalParser::new(self.parser_opts.clone())?)
    }
}
