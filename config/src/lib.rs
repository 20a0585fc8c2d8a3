//! Configuration loading and parsing for Registrar.
//!
//! The CLI reads an optional TOML file from the platform config directory
//! (`~/.config/registrar/config.toml` on Linux). A missing file yields the
//! defaults; a malformed file is a hard error so a typo never silently
//! changes which identity signs mutations.
//!
//! ```toml
//! identity = "0x00112233445566778899aabbccddeeff00112233"
//! store = "/var/lib/registrar/registry.json"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use registrar_types::Address;

const CONFIG_DIR: &str = "registrar";
const CONFIG_FILE: &str = "config.toml";
const STORE_FILE: &str = "registry.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings the CLI consults before falling back to built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default caller identity for mutating commands, overridable with
    /// `--as` on the command line.
    pub identity: Option<Address>,
    /// Path of the registry state file, overridable with `--store`.
    pub store: Option<PathBuf>,
}

impl Config {
    /// Load from the platform config path. Missing file means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path. Missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}

/// Platform location of the config file, if a config directory exists.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Default location of the registry state file.
#[must_use]
pub fn default_store_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(CONFIG_DIR).join(STORE_FILE))
}
