use serde::Serialize;

use crate::url_split::{self, ParsedUrl};

pub const GIT_SUFFIX: &str = ".git";
pub const PROJECT_PREFIX: &str = "group.";

/// Identifiers derived from a repository URL and commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct OriginIds {
    pub origin_url: String,
    pub origin_uri: String,
    pub origin_sha: String,
    pub project_identifier: String,
}

impl OriginIds {
    /// `(KEY, value)` pairs in output order.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("ORIGIN_URL", self.origin_url.as_str()),
            ("ORIGIN_URI", self.origin_uri.as_str()),
            ("ORIGIN_SHA", self.origin_sha.as_str()),
            ("PROJECT_IDENTIFIER", self.project_identifier.as_str()),
        ]
    }
}

pub fn derive(raw_url: &str, commit_sha: &str) -> OriginIds {
    derive_from_parts(&url_split::parse(raw_url), commit_sha)
}

pub fn derive_from_parts(url: &ParsedUrl, commit_sha: &str) -> OriginIds {
    let url_path = strip_git_suffix(&url.path);
    let origin_uri = format!("{}{}", reverse_host(&url.netloc), dotted_path(url_path));
    OriginIds {
        origin_url: format!("{}{}", url.netloc, url_path),
        project_identifier: project_identifier(&origin_uri),
        origin_uri,
        origin_sha: commit_sha.to_string(),
    }
}

/// Removes one trailing `.git`, if present.
pub fn strip_git_suffix(path: &str) -> &str {
    path.strip_suffix(GIT_SUFFIX).unwrap_or(path)
}

/// `github.com` -> `com.github`. An empty netloc stays empty.
pub fn reverse_host(netloc: &str) -> String {
    netloc.rsplit('.').collect::<Vec<_>>().join(".")
}

pub fn dotted_path(url_path: &str) -> String {
    url_path.replace('/', ".")
}

/// `group.` followed by every segment of `origin_uri` but the first.
pub fn project_identifier(origin_uri: &str) -> String {
    let rest = origin_uri.split_once('.').map_or("", |(_, rest)| rest);
    format!("{PROJECT_PREFIX}{rest}")
}
