use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_STORAGE_KEY: &str = "trelloBoardState";
pub const DEFAULT_ERROR_FLASH_MS: u64 = 2000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// File backing the local key-value store
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
    /// Key under which the board state is stored
    #[serde(default)]
    pub storage_key: Option<String>,
    /// How long the editor border stays red after an empty submission
    #[serde(default)]
    pub error_flash_ms: Option<u64>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/triboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("triboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("triboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Reads a config file, falling back to defaults when it is missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn effective_storage_path(&self) -> PathBuf {
        self.storage_path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|data| data.join("triboard").join("storage.json"))
                .unwrap_or_else(|| PathBuf::from("triboard-storage.json"))
        })
    }

    pub fn effective_storage_key(&self) -> &str {
        self.storage_key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY)
    }

    pub fn error_flash(&self) -> Duration {
        Duration::from_millis(self.error_flash_ms.unwrap_or(DEFAULT_ERROR_FLASH_MS))
    }
}
