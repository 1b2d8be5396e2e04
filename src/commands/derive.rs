use std::borrow::Cow;
use std::ffi::OsStr;
use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::DeriveArgs;

use originid::origin::derive_from_parts;
use originid::url_split;
use originid::{render, OutputFormat};

const FORMAT_ENV: &str = "ORIGINID_FORMAT";

pub(crate) fn cmd_derive(args: DeriveArgs) -> Result<()> {
    let format = resolve_format(args.format)?;
    let repository_url = lossy_arg("repository url", &args.repository_url);
    let commit_sha = lossy_arg("commit SHA", &args.commit_sha);

    let url = url_split::parse(&repository_url);
    tracing::debug!(
        scheme = %url.scheme,
        netloc = %url.netloc,
        path = %url.path,
        "parsed repository url"
    );
    if url.netloc.is_empty() {
        tracing::warn!(
            "No network location in {:?}; identifiers will be partial",
            repository_url
        );
    }
    if !looks_like_commit_sha(&commit_sha) {
        tracing::warn!("Commit SHA does not look like a hex object name: {:?}", commit_sha);
    }

    let ids = derive_from_parts(&url, &commit_sha);
    tracing::debug!(?ids, %format, "derived identifiers");

    let text = render(&ids, format)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write to stdout")?;
    Ok(())
}

fn resolve_format(flag: Option<OutputFormat>) -> Result<OutputFormat> {
    if let Some(f) = flag {
        return Ok(f);
    }
    match std::env::var(FORMAT_ENV) {
        Ok(v) if !v.trim().is_empty() => v
            .parse::<OutputFormat>()
            .with_context(|| format!("Invalid {FORMAT_ENV}")),
        _ => Ok(OutputFormat::default()),
    }
}

/// Non-UTF-8 bytes become U+FFFD instead of rejecting the argument.
fn lossy_arg<'a>(what: &str, arg: &'a OsStr) -> Cow<'a, str> {
    let s = arg.to_string_lossy();
    if matches!(s, Cow::Owned(_)) {
        tracing::warn!("Non-UTF-8 bytes in {what} replaced with U+FFFD");
    }
    s
}

fn looks_like_commit_sha(sha: &str) -> bool {
    (4..=64).contains(&sha.len()) && sha.bytes().all(|b| b.is_ascii_hexdigit())
}
