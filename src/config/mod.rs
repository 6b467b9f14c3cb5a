//! This module handles the service configuration, including loading and
//! saving settings to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use exif_lens::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.port = Some(8080);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ExifLens";

pub const DEFAULT_PORT: u16 = 5051;
pub const DEFAULT_MAX_UPLOAD_MB: u64 = 25;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// TCP port the HTTP server listens on.
    #[serde(default)]
    pub port: Option<u16>,
    /// Upper bound for uploaded request bodies, in megabytes.
    #[serde(default)]
    pub max_upload_mb: Option<u64>,
    /// Directory of static frontend files served at the root path.
    #[serde(default)]
    pub static_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: Some(DEFAULT_PORT),
            max_upload_mb: Some(DEFAULT_MAX_UPLOAD_MB),
            static_dir: Some(DEFAULT_STATIC_DIR.to_string()),
        }
    }
}

impl Config {
    /// Effective port with the default applied.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Effective upload limit in bytes.
    #[must_use]
    pub fn max_upload_bytes(&self) -> usize {
        let mb = self.max_upload_mb.unwrap_or(DEFAULT_MAX_UPLOAD_MB);
        (mb as usize).saturating_mul(1024 * 1024)
    }

    /// Effective static file directory.
    #[must_use]
    pub fn static_dir(&self) -> PathBuf {
        PathBuf::from(
            self.static_dir
                .clone()
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
        )
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
