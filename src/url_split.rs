//! Permissive URL decomposition.
//!
//! Splits a URL into `scheme://netloc/path;params?query#fragment` without
//! validating, trimming or otherwise correcting any of it. Missing components
//! come back as empty strings; only the scheme is lowercased.

const SCHEME_CHARS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789+-.";

/// Schemes whose last path segment may carry `;params`.
const USES_PARAMS: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtspu", "sip",
    "sips", "mms", "sftp", "tel",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    pub params: String,
    pub query: String,
    pub fragment: String,
}

pub fn parse(raw: &str) -> ParsedUrl {
    let mut rest = raw.to_string();
    let mut out = ParsedUrl::default();

    if let Some(i) = rest.find(':') {
        let (prefix, after) = (&rest[..i], &rest[i + 1..]);
        let scheme_chars_only =
            !prefix.is_empty() && prefix.chars().all(|c| SCHEME_CHARS.contains(c));
        // `host:8080` keeps the whole thing as path
        let after_is_port = !after.is_empty() && after.bytes().all(|b| b.is_ascii_digit());
        if scheme_chars_only && !after_is_port {
            out.scheme = prefix.to_ascii_lowercase();
            rest = after.to_string();
        }
    }

    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(['/', '?', '#']).unwrap_or(after.len());
        out.netloc = after[..end].to_string();
        rest = after[end..].to_string();
    }

    if let Some(i) = rest.find('#') {
        out.fragment = rest[i + 1..].to_string();
        rest.truncate(i);
    }

    if let Some(i) = rest.find('?') {
        out.query = rest[i + 1..].to_string();
        rest.truncate(i);
    }

    if USES_PARAMS.contains(&out.scheme.as_str()) {
        let seg_start = rest.rfind('/').unwrap_or(0);
        if let Some(off) = rest[seg_start..].find(';') {
            let i = seg_start + off;
            out.params = rest[i + 1..].to_string();
            rest.truncate(i);
        }
    }

    out.path = rest;
    out
}
