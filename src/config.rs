use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::Error;
use crate::sequence;

/// How the binary reports its results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(Error::Parse(format!("unrecognized output format: {s}"))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanConfig {
    pub sequence: String,
    #[serde(default)]
    pub show_frames: bool,
    pub format: Option<String>,
}

impl ScanConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        sequence::validate_sequence(&self.sequence).context("invalid sequence in config")?;
        self.output_format()?;
        Ok(())
    }

    /// Output format, defaulting to text when unset.
    pub fn output_format(&self) -> Result<OutputFormat> {
        match &self.format {
            Some(s) => s
                .parse::<OutputFormat>()
                .with_context(|| format!("invalid output format: '{s}'")),
            None => Ok(OutputFormat::default()),
        }
    }
}
