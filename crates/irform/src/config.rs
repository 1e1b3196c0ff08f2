// File: src/config.rs
// Purpose: Configuration parsing from irform.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// irform configuration
///
/// ```toml
/// [messages]
/// iranianMobile = "Enter an 11-digit mobile number"
///
/// [mask.tokens]
/// plate = "[0-9A-Z]"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Rule name to default message override
    #[serde(default)]
    pub messages: BTreeMap<String, String>,

    #[serde(default)]
    pub mask: MaskSection,
}

/// Mask configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MaskSection {
    /// Token name to single-character regex, added to the global token table
    #[serde(default)]
    pub tokens: BTreeMap<String, String>,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// A missing or blank file yields [`Config::default`]; any other read
    /// failure is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no irform configuration file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read config file: {:?}", path));
            }
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "irform configuration file is blank, using defaults");
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        tracing::info!(
            path = %path.display(),
            messages = config.messages.len(),
            tokens = config.mask.tokens.len(),
            "loaded irform configuration"
        );

        Ok(config)
    }

    /// Load configuration from default path (./irform.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("irform.toml")
    }
}
