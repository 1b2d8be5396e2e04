use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber. stdout carries only the rendered identifiers.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks the level.
pub(crate) fn init(verbose: u8) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;

    tracing::debug!("logging initialized");
    Ok(())
}

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
