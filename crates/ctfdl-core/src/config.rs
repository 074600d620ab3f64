use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Folder under the output directory that holds challenge stubs and assets.
pub const DEFAULT_CHALLENGES_FOLDER: &str = "📂 Challenges";

/// Global configuration loaded from `~/.config/ctfdl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtfdlConfig {
    /// Transfer buffer size in bytes for asset streaming.
    pub chunk_size: usize,
    /// Maximum concurrent asset downloads within one challenge (1 = sequential).
    pub max_parallel_downloads: usize,
    /// Connect timeout in seconds for every request.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds for API calls (0 = no limit). File
    /// downloads are only bounded by stall detection.
    pub request_timeout_secs: u64,
    /// Stall threshold in bytes per second (0 = no stall detection).
    #[serde(default = "default_low_speed_limit")]
    pub low_speed_limit: u32,
    /// Seconds below `low_speed_limit` before a transfer is aborted.
    #[serde(default = "default_low_speed_time_secs")]
    pub low_speed_time_secs: u64,
    /// User-Agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Name of the folder holding per-challenge files.
    #[serde(default = "default_challenges_folder")]
    pub challenges_folder: String,
}

fn default_user_agent() -> String {
    format!("ctfdl/{}", env!("CARGO_PKG_VERSION"))
}

fn default_low_speed_limit() -> u32 {
    1024
}

fn default_low_speed_time_secs() -> u64 {
    60
}

fn default_challenges_folder() -> String {
    DEFAULT_CHALLENGES_FOLDER.to_string()
}

impl Default for CtfdlConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1024,
            max_parallel_downloads: 1,
            connect_timeout_secs: 30,
            request_timeout_secs: 300,
            low_speed_limit: default_low_speed_limit(),
            low_speed_time_secs: default_low_speed_time_secs(),
            user_agent: default_user_agent(),
            challenges_folder: default_challenges_folder(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ctfdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CtfdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CtfdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CtfdlConfig = toml::from_str(&data)?;
    Ok(cfg)
}
