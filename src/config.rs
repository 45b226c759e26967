//! Runtime settings shared by the CLI and the web driver.
//!
//! Settings come from a JSON file; every field is optional and a missing
//! file means defaults.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::state::Theme;

/// Environment variable naming a config file when none is given explicitly.
pub const CONFIG_ENV: &str = "ATOMLATTICE_CONFIG";

/// Elements at or above this atomic number go through the confirmation gate.
pub const DEFAULT_HIGH_Z_THRESHOLD: u32 = 80;
pub const DEFAULT_COUNTDOWN_SECS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Fixed seed for electron phases/orientations. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub high_z_threshold: u32,
    pub countdown_secs: u32,
    pub bind: SocketAddr,
    pub theme: Theme,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        VisualizerConfig {
            seed: None,
            high_z_threshold: DEFAULT_HIGH_Z_THRESHOLD,
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            theme: Theme::Light,
        }
    }
}

impl VisualizerConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Load from `explicit`, else from `$ATOMLATTICE_CONFIG`, else defaults.
    /// A path that was asked for but does not exist is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path: Option<PathBuf> = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        match path {
            Some(path) => {
                info!("Loading config from {}", path.display());
                Self::from_path(&path)
            }
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}
