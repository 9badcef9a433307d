use crate::fetcher::Timeouts;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Render endpoint used when config.toml does not override it.
pub const DEFAULT_SERVER: &str = "https://plantuml.mcdole.org/png/";

/// Global configuration loaded from `~/.config/pumlviz/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PumlConfig {
    /// Render server prefix; the token is appended verbatim.
    pub server: String,
    /// Connect timeout for the image GET, in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout for the image GET, in seconds.
    pub timeout_secs: u64,
}

impl Default for PumlConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 60,
        }
    }
}

impl PumlConfig {
    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            connect: Duration::from_secs(self.connect_timeout_secs),
            total: Duration::from_secs(self.timeout_secs),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pumlviz")?;
    xdg_dirs
        .place_config_file("config.toml")
        .context("creating pumlviz config directory")
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PumlConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but for an explicit config file path.
pub fn load_or_init_at(path: &Path) -> Result<PumlConfig> {
    if !path.exists() {
        let default_cfg = PumlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("loading {}", path.display()))?;
    let cfg: PumlConfig =
        toml::from_str(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}

/// [`load_or_init`], falling back to built-in defaults when the config cannot
/// be read or created. Encoding a URL never needs the config on disk.
pub fn load_or_default() -> PumlConfig {
    match load_or_init() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("using default config: {:#}", e);
            PumlConfig::default()
        }
    }
}
