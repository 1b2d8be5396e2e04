use std::ffi::OsString;

use anyhow::Result;
use clap::{ArgAction, Args, Parser};

use originid::OutputFormat;

use crate::commands;
use crate::logging;

#[derive(Parser, Debug)]
#[command(
    name = "originid",
    version,
    about = "Derive origin and project identifiers from a repository URL and commit"
)]
struct Cli {
    #[command(flatten)]
    derive: DeriveArgs,
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Args, Debug)]
pub(crate) struct DeriveArgs {
    /// Repository URL, e.g. `https://github.com/example/repo.git`
    pub(crate) repository_url: OsString,
    /// Commit SHA, emitted verbatim as ORIGIN_SHA
    pub(crate) commit_sha: OsString,
    /// Output format: xcconfig, env or json (default: $ORIGINID_FORMAT, then xcconfig)
    #[arg(long)]
    pub(crate) format: Option<OutputFormat>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    commands::derive::cmd_derive(cli.derive)
}
