// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user preferences in a `settings.toml` file.
//!
//! The file lives in the platform config directory and currently carries the
//! UI language and the NASA API access token. Anything missing or malformed
//! falls back to defaults so a broken file never prevents startup.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "AstroGallery";

/// NASA's public demonstration token, rate-limited but good enough to browse.
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub language: Option<String>,
    /// APOD access token; `DEMO_KEY` when unset.
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Config {
    /// The access token to embed in requests, falling back to the demo key.
    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or(DEFAULT_API_KEY)
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
