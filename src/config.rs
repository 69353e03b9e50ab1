//! Configuration handling for packsmith packs.
//! Loads `packsmith.json` from the pack root (or its `src/` subdirectory),
//! falling back to defaults when no file is present.

use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, DEFAULT_ENTRYPOINT, DEFAULT_GENERATED_DIR};
use crate::error::{Error, Result};

/// Pack configuration.
///
/// Unknown keys in the file are ignored; the core build pipeline only
/// reads `generated_dir`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Source file the build driver evaluates, relative to the pack root
    pub entrypoint: String,
    /// Bucket directory name for compiler-generated files
    pub generated_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entrypoint: DEFAULT_ENTRYPOINT.to_string(),
            generated_dir: DEFAULT_GENERATED_DIR.to_string(),
        }
    }
}

/// Finds an existing config file in a pack directory.
///
/// Checks `<pack>/packsmith.json` first, then `<pack>/src/packsmith.json`.
///
/// # Returns
/// * `Option<PathBuf>` - Path to the config file, or None if not found
pub fn find_config_path<P: AsRef<Path>>(pack_dir: P) -> Option<PathBuf> {
    let pack_dir = pack_dir.as_ref();
    for candidate in [pack_dir.join(CONFIG_FILE), pack_dir.join("src").join(CONFIG_FILE)] {
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

/// Loads the configuration for a pack directory.
///
/// # Arguments
/// * `pack_dir` - Root directory of the pack
///
/// # Returns
/// * `Result<Config>` - Parsed configuration, or defaults when no config
///   file exists
///
/// # Errors
/// * `Error::ConfigError` if a config file exists but cannot be parsed
pub fn load_config<P: AsRef<Path>>(pack_dir: P) -> Result<Config> {
    let Some(config_path) = find_config_path(pack_dir) else {
        debug!("No configuration file found, using defaults");
        return Ok(Config::default());
    };

    debug!("Loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(&config_path).map_err(Error::IoError)?;
    serde_json::from_str(&content).map_err(|e| {
        Error::ConfigError(format!(
            "Invalid configuration in {}: {}",
            config_path.display(),
            e
        ))
    })
}
