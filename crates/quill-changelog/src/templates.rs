//! Changelog templates

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use quill_core::error::TemplateError;
use quill_core::PresetOptions;

/// Main document template file name
pub const MAIN_TEMPLATE: &str = "template.hbs";
/// Release header partial file name
pub const HEADER_PARTIAL: &str = "header.hbs";
/// Single commit entry partial file name
pub const COMMIT_PARTIAL: &str = "commit.hbs";
/// Footer partial file name
pub const FOOTER_PARTIAL: &str = "footer.hbs";

/// The four template fragments handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Templates {
    /// Overall document template
    pub main_template: String,
    /// Release header partial
    pub header_partial: String,
    /// Commit entry partial
    pub commit_partial: String,
    /// Footer partial
    pub footer_partial: String,
}

impl Templates {
    /// Directory of the templates bundled with this crate
    pub fn bundled_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
    }

    /// The bundled templates as compiled into the binary
    pub fn embedded() -> Self {
        Self {
            main_template: include_str!("../templates/template.hbs").to_string(),
            header_partial: include_str!("../templates/header.hbs").to_string(),
            commit_partial: include_str!("../templates/commit.hbs").to_string(),
            footer_partial: include_str!("../templates/footer.hbs").to_string(),
        }
    }

    /// Load the templates `options` point at, or the bundled ones
    pub async fn load_for(options: &PresetOptions) -> Result<Self, TemplateError> {
        match &options.templates_dir {
            Some(dir) => Self::load(dir).await,
            None => Self::load_bundled().await,
        }
    }

    /// Read all four templates from `dir` concurrently.
    ///
    /// Fails as a whole if any single read fails.
    #[instrument(fields(dir = %dir.display()))]
    pub async fn load(dir: &Path) -> Result<Self, TemplateError> {
        info!(dir = %dir.display(), "loading templates");

        let (main_template, header_partial, commit_partial, footer_partial) = tokio::try_join!(
            read_template("main", dir.join(MAIN_TEMPLATE)),
            read_template("header", dir.join(HEADER_PARTIAL)),
            read_template("commit", dir.join(COMMIT_PARTIAL)),
            read_template("footer", dir.join(FOOTER_PARTIAL)),
        )?;

        Ok(Self {
            main_template,
            header_partial,
            commit_partial,
            footer_partial,
        })
    }

    /// Read the bundled templates from the crate's source tree.
    ///
    /// A relocated binary no longer has that directory and gets the embedded copies.
    pub async fn load_bundled() -> Result<Self, TemplateError> {
        let dir = Self::bundled_dir();
        if dir.is_dir() {
            return Self::load(&dir).await;
        }

        debug!(dir = %dir.display(), "bundled template directory missing, using embedded templates");
        Ok(Self::embedded())
    }
}

async fn read_template(name: &'static str, path: PathBuf) -> Result<String, TemplateError> {
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => {
            debug!(name, path = %path.display(), bytes = content.len(), "template read");
            Ok(content)
        }
        Err(source) => Err(TemplateError::Read { name, path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_templates(dir: &Path, skip: Option<&str>) {
        for file in [MAIN_TEMPLATE, HEADER_PARTIAL, COMMIT_PARTIAL, FOOTER_PARTIAL] {
            if Some(file) != skip {
                std::fs::write(dir.join(file), format!("<{file}>")).unwrap();
            }
        }
    }

    #[tokio::test]
    async fn test_load_templates() {
        let temp = TempDir::new().unwrap();
        write_templates(temp.path(), None);

        let templates = Templates::load(temp.path()).await.unwrap();
        assert_eq!(templates.main_template, "<template.hbs>");
        assert_eq!(templates.header_partial, "<header.hbs>");
        assert_eq!(templates.commit_partial, "<commit.hbs>");
        assert_eq!(templates.footer_partial, "<footer.hbs>");
    }

    #[tokio::test]
    async fn test_single_missing_template_fails_load() {
        let temp = TempDir::new().unwrap();
        write_templates(temp.path(), Some(COMMIT_PARTIAL));

        let err = Templates::load(temp.path()).await.unwrap_err();
        let TemplateError::Read { name, path, .. } = err;
        assert_eq!(name, "commit");
        assert!(path.ends_with(COMMIT_PARTIAL));
    }

    #[tokio::test]
    async fn test_load_for_custom_dir() {
        let temp = TempDir::new().unwrap();
        write_templates(temp.path(), None);

        let options = PresetOptions::default().with_templates_dir(temp.path());
        let templates = Templates::load_for(&options).await.unwrap();
        assert_eq!(templates.footer_partial, "<footer.hbs>");
    }

    #[tokio::test]
    async fn test_load_for_custom_dir_does_not_fall_back() {
        let temp = TempDir::new().unwrap();
        let options = PresetOptions::default().with_templates_dir(temp.path().join("missing"));
        assert!(Templates::load_for(&options).await.is_err());
    }

    #[tokio::test]
    async fn test_embedded_matches_bundled_dir() {
        let from_disk = Templates::load(&Templates::bundled_dir()).await.unwrap();
        assert_eq!(Templates::embedded(), from_disk);
    }

    #[tokio::test]
    async fn test_load_bundled() {
        let templates = Templates::load_bundled().await.unwrap();
        assert!(templates.main_template.contains("commitGroups"));
        assert!(templates.header_partial.contains("version"));
        assert!(!templates.commit_partial.is_empty());
    }
}
