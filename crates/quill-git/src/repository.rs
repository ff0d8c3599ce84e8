//! Git repository access

use std::path::Path;

use git2::{ErrorCode, Repository};
use tracing::{debug, instrument};

use quill_core::error::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// The repository whose history feeds a changelog preview
pub struct GitRepo {
    pub(crate) repo: Repository,
}

impl GitRepo {
    /// Find the repository containing `start`, walking up parent directories
    #[instrument(fields(start = %start.display()))]
    pub fn discover(start: &Path) -> Result<Self> {
        let repo = Repository::discover(start).map_err(|e| match e.code() {
            ErrorCode::NotFound => GitError::NotARepository(start.to_path_buf()),
            _ => GitError::Git2(e),
        })?;

        debug!(git_dir = %repo.path().display(), "repository found");
        Ok(Self { repo })
    }

    /// Working tree root, or the git dir of a bare repository
    pub fn root(&self) -> &Path {
        self.repo.workdir().unwrap_or_else(|| self.repo.path())
    }

    pub(crate) fn head_commit(&self) -> Result<git2::Commit<'_>> {
        Ok(self.repo.head()?.peel_to_commit()?)
    }
}
