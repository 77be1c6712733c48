use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::api::EndpointPaths;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_list_endpoint")]
    pub list_endpoint: String,
    #[serde(default = "default_search_endpoint")]
    pub search_endpoint: String,
    #[serde(default = "default_stocks_endpoint")]
    pub stocks_endpoint: String,
    #[serde(default = "default_categories_endpoint")]
    pub categories_endpoint: String,
    #[serde(default)]
    pub vim_mode: bool,
    /// Offer the create action in the toolbar
    #[serde(default = "default_true")]
    pub create_button: bool,
}

fn default_list_endpoint() -> String {
    "/api/stocks".to_string()
}

fn default_search_endpoint() -> String {
    "/api/stocks/search".to_string()
}

fn default_stocks_endpoint() -> String {
    "/api/stocks".to_string()
}

fn default_categories_endpoint() -> String {
    "/api/categories".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            list_endpoint: default_list_endpoint(),
            search_endpoint: default_search_endpoint(),
            stocks_endpoint: default_stocks_endpoint(),
            categories_endpoint: default_categories_endpoint(),
            vim_mode: false,
            create_button: true,
        }
    }
}

impl Config {
    pub fn from_yaml(raw: &str) -> Result<Self> {
        serde_yaml::from_str(raw).context("Invalid config file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&raw)
    }

    pub fn endpoint_paths(&self) -> EndpointPaths {
        EndpointPaths {
            list: self.list_endpoint.clone(),
            search: self.search_endpoint.clone(),
            stocks: self.stocks_endpoint.clone(),
            categories: self.categories_endpoint.clone(),
        }
    }
}

/// Preferred config location: `<config_dir>/stocktui/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stocktui").join("config.yaml"))
}

/// Determine the config file path with fallback logic
///
/// An explicit path must exist. Otherwise the platform config directory is
/// tried, then `./config.yaml`. `Ok(None)` means no file was found.
pub fn find_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_path) = default_config_path() {
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

/// Error for a run with neither a config file nor `--base-url`
pub fn missing_config_error() -> anyhow::Error {
    let expected_path = default_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "~/.config/stocktui/config.yaml".to_string());

    anyhow::anyhow!(
        "Config file not found. Expected locations:\n\
         1. {} (preferred)\n\
         2. ./config.yaml (fallback)\n\
         \n\
         Use --config <path> to specify a custom location, or --base-url <url>.",
        expected_path
    )
}
