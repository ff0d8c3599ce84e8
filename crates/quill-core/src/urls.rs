//! Issue tracker URL derivation from the project manifest

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use url::Url;

use crate::manifest::Manifest;

/// Matches the git remote forms npm accepts for GitHub-hosted repositories
static GITHUB_REMOTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://|git://|git\+ssh://|git\+https://|ssh://)?(?:[^@]+@)?(?P<host>gist\.github\.com|github\.com)(?::/?|/)(?P<path>[^/]+/[^/]+?|[0-9]+)$",
    )
    .expect("Invalid regex")
});

/// Trailing `.git` suffix with an optional `#ref` fragment
static GIT_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.git(?:#.*)?$").expect("Invalid regex"));

/// Base URL for Jira issue links, e.g. `https://acme.atlassian.net/browse/`.
///
/// Only derived when `bugs.url` mentions `jira`; anything unparseable yields `None`.
pub fn jira_issue_url(manifest: &Manifest) -> Option<String> {
    let bugs_url = manifest.bugs_url()?;
    if !bugs_url.contains("jira") {
        return None;
    }

    let parsed = match Url::parse(bugs_url) {
        Ok(url) => url,
        Err(e) => {
            debug!(bugs_url, error = %e, "bugs url is not a valid url");
            return None;
        }
    };

    let host = parsed.host_str()?;
    let authority = match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };

    Some(format!("{scheme}://{authority}/browse/", scheme = parsed.scheme()))
}

/// Base URL for GitHub issue links, e.g. `https://github.com/org/repo/issues/`
pub fn github_issue_url(manifest: &Manifest) -> Option<String> {
    let repository_url = manifest.repository_url()?;
    if !repository_url.contains("github.com") {
        return None;
    }

    github_url_from_git(repository_url).map(|web| format!("{web}/issues/"))
}

/// Convert a git remote URL (https, ssh or git protocol) into the GitHub web URL
pub fn github_url_from_git(remote: &str) -> Option<String> {
    let trimmed = remote.trim().trim_end_matches('/');
    let stripped = GIT_SUFFIX_REGEX.replace(trimmed, "");

    let caps = GITHUB_REMOTE_REGEX.captures(&stripped)?;
    let host = caps.name("host")?.as_str();
    let path = caps.name("path")?.as_str();

    Some(format!("https://{host}/{path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manifest_with_bugs(url: &str) -> Manifest {
        Manifest::from_value(json!({ "bugs": { "url": url } }))
    }

    fn manifest_with_repo(url: &str) -> Manifest {
        Manifest::from_value(json!({ "repository": { "url": url } }))
    }

    #[test]
    fn test_jira_issue_url() {
        let manifest = manifest_with_bugs("https://x.atlassian.net/jira/browse");
        assert_eq!(
            jira_issue_url(&manifest).as_deref(),
            Some("https://x.atlassian.net/browse/")
        );
    }

    #[test]
    fn test_jira_issue_url_keeps_port() {
        let manifest = manifest_with_bugs("http://jira.internal:8080/projects/ABC");
        assert_eq!(
            jira_issue_url(&manifest).as_deref(),
            Some("http://jira.internal:8080/browse/")
        );
    }

    #[test]
    fn test_jira_issue_url_requires_jira() {
        let manifest = manifest_with_bugs("https://github.com/org/repo/issues");
        assert!(jira_issue_url(&manifest).is_none());
        assert!(jira_issue_url(&Manifest::empty()).is_none());
    }

    #[test]
    fn test_jira_issue_url_unparseable() {
        let manifest = manifest_with_bugs("not a url but mentions jira");
        assert!(jira_issue_url(&manifest).is_none());
    }

    #[test]
    fn test_github_issue_url() {
        let manifest = manifest_with_repo("git+https://github.com/org/repo.git");
        assert_eq!(
            github_issue_url(&manifest).as_deref(),
            Some("https://github.com/org/repo/issues/")
        );
    }

    #[test]
    fn test_github_issue_url_requires_github() {
        let manifest = manifest_with_repo("https://gitlab.com/org/repo.git");
        assert!(github_issue_url(&manifest).is_none());
        assert!(github_issue_url(&Manifest::empty()).is_none());
    }

    #[test]
    fn test_github_url_from_git_forms() {
        let expected = Some("https://github.com/org/repo".to_string());
        assert_eq!(github_url_from_git("git@github.com:org/repo.git"), expected);
        assert_eq!(github_url_from_git("git://github.com/org/repo.git"), expected);
        assert_eq!(github_url_from_git("git+ssh://git@github.com/org/repo.git"), expected);
        assert_eq!(github_url_from_git("https://github.com/org/repo"), expected);
        assert_eq!(github_url_from_git("https://github.com/org/repo/"), expected);
        assert_eq!(github_url_from_git("github.com/org/repo.git#v1.0.0"), expected);
    }

    #[test]
    fn test_github_url_from_git_rejects_other_hosts() {
        assert!(github_url_from_git("https://bitbucket.org/org/repo.git").is_none());
        assert!(github_url_from_git("https://github.com/org").is_none());
    }
}
