use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/harpack/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarpackConfig {
    /// Prefix for exported archive names (`<prefix>_<stamp>.zip`).
    pub archive_prefix: String,
    /// Override for the store socket path; defaults to the XDG state dir.
    #[serde(default)]
    pub socket_path: Option<PathBuf>,
}

impl Default for HarpackConfig {
    fn default() -> Self {
        Self {
            archive_prefix: "resources".to_string(),
            socket_path: None,
        }
    }
}

impl HarpackConfig {
    /// Effective store socket path: the configured override or the XDG
    /// default.
    pub fn store_socket_path(&self) -> Result<PathBuf> {
        match &self.socket_path {
            Some(path) => Ok(path.clone()),
            None => Ok(crate::store::default_store_socket_path()?),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harpack")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HarpackConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HarpackConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: HarpackConfig = toml::from_str(&data)?;
    Ok(cfg)
}
