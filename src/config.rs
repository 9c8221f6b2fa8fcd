//! Configuration for the terminal shell.
//!
//! Loaded from a TOML file under the platform config dir (or an explicit
//! path). A missing file means defaults; a malformed file is an error
//! the caller surfaces at startup.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cart::CurrencyFormat;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where durable widget slots live. Defaults to the platform data dir.
    pub data_dir: Option<PathBuf>,
    /// Seconds between automatic slider advances.
    pub slider_interval_secs: u64,
    /// How cart prices are rendered.
    pub currency: CurrencyFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            slider_interval_secs: 5,
            currency: CurrencyFormat::default(),
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when none is given.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// The default config file location, under the platform config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("deskpad").join("deskpad.toml"))
    }
}
