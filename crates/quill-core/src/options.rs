//! Preset loading options

use std::path::PathBuf;

use crate::manifest::default_manifest_path;

/// Where the preset reads its inputs from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetOptions {
    /// Project manifest (`package.json`)
    pub manifest_path: PathBuf,
    /// Directory holding the four templates; `None` uses the bundled ones
    pub templates_dir: Option<PathBuf>,
}

impl Default for PresetOptions {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
            templates_dir: None,
        }
    }
}

impl PresetOptions {
    /// Read the manifest from a specific path
    pub fn with_manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = path.into();
        self
    }

    /// Read the templates from a specific directory
    pub fn with_templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = Some(dir.into());
        self
    }
}
