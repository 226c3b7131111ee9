//! Settings loading from config.toml
//!
//! The settings file is optional. It holds the preset reward names and devices
//! offered as suggestions in the add form.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable naming the settings file.
pub const CONFIG_PATH_ENV: &str = "PREMI_CONFIG";

/// Settings file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Add-form presets
    #[serde(default)]
    pub suggestions: Suggestions,
}

/// Preset values suggested while typing a new reward
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Suggestions {
    /// Common reward names
    pub rewards: Vec<String>,
    /// Household devices
    pub devices: Vec<String>,
}

impl Default for Suggestions {
    fn default() -> Self {
        Self {
            rewards: ["Buono Spesa 5€", "Sconto 10%", "Giga Illimitati", "Buono Amazon"]
                .map(String::from)
                .to_vec(),
            devices: ["Smartphone Mamma", "Smartphone Papà", "Tablet Cucina"]
                .map(String::from)
                .to_vec(),
        }
    }
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path_ref = path.as_ref();
    debug!("Loading settings from {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads settings from `$PREMI_CONFIG` (or ./config.toml), falling back to the
/// built-in presets when the file does not exist.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_default_config() -> Result<Settings> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    if !Path::new(&path).exists() {
        info!("No settings file at {}, using defaults", path);
        return Ok(Settings::default());
    }
    load_config(path)
}
