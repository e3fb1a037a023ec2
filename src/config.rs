use crate::error::RadioResult;
use crate::stations::{Catalogue, StreamFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main skill configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Playback
    pub default_station: String,
    pub stream_format: StreamFormat,

    // Host
    pub platform: String,

    // Data
    pub assets_dir: String,
    pub stations_file: Option<String>,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_station: "ABC News".to_string(),
            stream_format: StreamFormat::Mp3,
            platform: "unknown".to_string(),
            assets_dir: dirs::data_dir()
                .unwrap_or_default()
                .join("abc-radio")
                .to_string_lossy()
                .to_string(),
            stations_file: None,
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location, or create default
    pub fn load() -> RadioResult<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `path`, falling back to defaults when missing or invalid
    pub fn load_from(path: &Path) -> RadioResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                // Keep the broken file around for debugging
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> RadioResult<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> RadioResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Log filter directive; `verbose` forces debug output
    pub fn log_directive(&self, verbose: bool) -> String {
        if verbose {
            "debug".to_string()
        } else {
            self.log_level.trim().to_lowercase()
        }
    }

    /// Station catalogue to use: the external file if configured, else built-in
    pub fn catalogue(&self) -> RadioResult<Catalogue> {
        match &self.stations_file {
            Some(file) => Catalogue::from_file(Path::new(file)),
            None => Ok(Catalogue::builtin().clone()),
        }
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("abc-radio")
        .join("config.json")
}
