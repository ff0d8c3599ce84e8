//! Issue key linkification

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Jira issue keys (`ABC-123`), or a colon directly followed by an ASCII word character.
///
/// The colon branch produces an empty link, which is how existing changelogs
/// generated with this preset look.
static ISSUE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":(?-u:\b)|(?P<key>[A-Z]{2,}-[0-9]+)").expect("Invalid regex"));

/// Rewrites issue keys in text as markdown links into an issue tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueLinker {
    base_url: String,
}

impl IssueLinker {
    /// Create a linker for a tracker base URL such as `https://acme.atlassian.net/browse/`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// The tracker base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Markdown link for a single issue key
    pub fn link(&self, key: &str) -> String {
        format!("[{key}]({base}{key})", base = self.base_url)
    }

    /// Replace every issue key in `text` with its link
    pub fn linkify<'a>(&self, text: &'a str) -> Cow<'a, str> {
        ISSUE_REGEX.replace_all(text, |caps: &Captures<'_>| {
            let key = caps.name("key").map_or("", |m| m.as_str());
            self.link(key)
        })
    }
}
