use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::http::HttpOptions;

/// Third-party extraction service queried with `?url=<video url>`.
pub const DEFAULT_ENDPOINT: &str = "https://facebook-downloader.apis-bj-devs.workers.dev/";

/// Global configuration loaded from `~/.config/fbdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FbdlConfig {
    /// Extraction API endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Where saved videos go (None = current directory).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Optional connect timeout in seconds (None = transport default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for FbdlConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            download_dir: None,
            connect_timeout_secs: None,
        }
    }
}

impl FbdlConfig {
    pub fn http_options(&self) -> HttpOptions {
        HttpOptions {
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fbdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FbdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FbdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FbdlConfig = toml::from_str(&data)?;
    Ok(cfg)
}
