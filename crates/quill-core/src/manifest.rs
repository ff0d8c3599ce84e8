//! Project manifest loading
//!
//! The manifest is the project's `package.json`. Only two nested fields are
//! read from it (`bugs.url` and `repository.url`), so it is kept as a loose
//! JSON document instead of a typed struct: a field of an unexpected shape
//! reads as absent rather than failing the whole load.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::error::ManifestError;

/// Default manifest file name, resolved against the working directory
pub const MANIFEST_FILE: &str = "package.json";

/// A loaded project manifest
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    document: Value,
}

impl Manifest {
    /// An empty manifest with no fields
    pub fn empty() -> Self {
        Self {
            document: Value::Object(Default::default()),
        }
    }

    /// Wrap an already parsed document
    pub fn from_value(document: Value) -> Self {
        Self { document }
    }

    /// Load a manifest, failing on a missing or malformed file
    #[instrument(fields(path = %path.display()))]
    pub fn try_load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let document = serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "manifest loaded");
        Ok(Self { document })
    }

    /// Load a manifest, falling back to an empty one on any failure.
    ///
    /// The failure is reported as a warning and never propagated.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(manifest) => manifest,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "no root package.json found");
                Self::empty()
            }
        }
    }

    /// Load `package.json` from the current working directory
    pub fn load_from_cwd() -> Self {
        let path = default_manifest_path();
        info!(path = %path.display(), "loading project manifest");
        Self::load(&path)
    }

    /// Whether the manifest has no fields at all
    pub fn is_empty(&self) -> bool {
        match &self.document {
            Value::Object(map) => map.is_empty(),
            Value::Null => true,
            _ => false,
        }
    }

    /// The `bugs.url` field, if present and a string
    pub fn bugs_url(&self) -> Option<&str> {
        self.document.pointer("/bugs/url").and_then(Value::as_str)
    }

    /// The `repository.url` field, if present and a string
    pub fn repository_url(&self) -> Option<&str> {
        self.document.pointer("/repository/url").and_then(Value::as_str)
    }

    /// The underlying document
    pub fn document(&self) -> &Value {
        &self.document
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::empty()
    }
}

/// `./package.json` relative to the process working directory
pub fn default_manifest_path() -> PathBuf {
    std::env::current_dir()
        .map(|cwd| cwd.join(MANIFEST_FILE))
        .unwrap_or_else(|_| PathBuf::from(MANIFEST_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_missing_manifest_is_empty() {
        let temp = TempDir::new().unwrap();
        let manifest = Manifest::load(&temp.path().join(MANIFEST_FILE));
        assert!(manifest.is_empty());
        assert!(manifest.bugs_url().is_none());
        assert!(manifest.repository_url().is_none());
    }

    #[test]
    fn test_malformed_manifest_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(MANIFEST_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Manifest::try_load(&path),
            Err(ManifestError::Parse { .. })
        ));
        assert!(Manifest::load(&path).is_empty());
    }

    #[test]
    fn test_try_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = Manifest::try_load(&temp.path().join(MANIFEST_FILE));
        assert!(matches!(result, Err(ManifestError::Read { .. })));
    }

    #[test]
    fn test_load_nested_urls() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(MANIFEST_FILE);
        std::fs::write(
            &path,
            r#"{
                "name": "demo",
                "bugs": { "url": "https://acme.atlassian.net/jira/browse" },
                "repository": { "type": "git", "url": "git+https://github.com/acme/demo.git" }
            }"#,
        )
        .unwrap();

        let manifest = Manifest::load(&path);
        assert!(!manifest.is_empty());
        assert_eq!(
            manifest.bugs_url(),
            Some("https://acme.atlassian.net/jira/browse")
        );
        assert_eq!(
            manifest.repository_url(),
            Some("git+https://github.com/acme/demo.git")
        );
    }

    #[test]
    fn test_wrong_shape_reads_as_absent() {
        let manifest = Manifest::from_value(json!({
            "bugs": "https://acme.atlassian.net/jira",
            "repository": { "url": 42 }
        }));
        assert!(manifest.bugs_url().is_none());
        assert!(manifest.repository_url().is_none());
    }
}
