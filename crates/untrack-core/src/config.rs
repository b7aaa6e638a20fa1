use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Transport settings loaded from `~/.config/untrack/config.toml`.
///
/// Cleanup rules are compiled in and never read from here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UntrackConfig {
    /// Connect timeout per hop, in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout per hop, in seconds.
    pub timeout_secs: u64,
    /// `User-Agent` sent with every GET (None = libcurl default, no header).
    pub user_agent: Option<String>,
    /// Scheme given to input without one (`example.com/x`).
    pub default_scheme: String,
}

impl Default for UntrackConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            user_agent: None,
            default_scheme: "http".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("untrack")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UntrackConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UntrackConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file; missing keys take defaults.
pub fn load_from(path: &Path) -> Result<UntrackConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: UntrackConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
