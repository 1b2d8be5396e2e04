use std::fmt;
use std::str::FromStr;

use anyhow::Result;

use crate::origin::OriginIds;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `KEY = VALUE`, includable from an Xcode build configuration file.
    #[default]
    Xcconfig,
    /// `KEY='VALUE'`, sourceable from a POSIX shell.
    Env,
    Json,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["xcconfig", "env", "json"];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Xcconfig => "xcconfig",
            OutputFormat::Env => "env",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug)]
pub struct UnknownFormat {
    pub given: String,
}

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown output format: {:?} (expected one of: {})",
            self.given,
            OutputFormat::NAMES.join(", ")
        )
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xcconfig" => Ok(OutputFormat::Xcconfig),
            "env" => Ok(OutputFormat::Env),
            "json" => Ok(OutputFormat::Json),
            _ => Err(UnknownFormat {
                given: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn render(ids: &OriginIds, format: OutputFormat) -> Result<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Xcconfig => {
            for (key, value) in ids.entries() {
                out.push_str(&format!("{key} = {value}\n"));
            }
        }
        OutputFormat::Env => {
            for (key, value) in ids.entries() {
                out.push_str(&format!("{key}={}\n", shell_quote(value)));
            }
        }
        OutputFormat::Json => {
            out = serde_json::to_string_pretty(ids)? + "\n";
        }
    }
    Ok(out)
}

/// Single-quotes `s` for POSIX shells.
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}
