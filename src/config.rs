// Process-wide client configuration (not user credentials).
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    /// When the backend is unreachable, GETs serve fixed seed posts instead
    /// of failing. Meant for working on the client without a backend; off in
    /// release builds unless explicitly enabled.
    pub offline_fallback: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            offline_fallback: cfg!(debug_assertions),
        }
    }
}

impl ClientConfig {
    pub fn config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".hong_board_config.json")
    }

    pub fn load() -> Self {
        let path = Self::config_path();
        let mut config: Self = fs::read_to_string(&path)
            .ok()
            .and_then(|data| serde_json::from_str(&data).ok())
            .unwrap_or_default();
        // HONG_BOARD_API overrides both file and default, handy for testing
        // against a staging backend.
        if let Ok(url) = std::env::var("HONG_BOARD_API") {
            config.api_base_url = url;
        }
        config
    }

    pub fn save(&self) {
        let path = Self::config_path();
        if let Ok(data) = serde_json::to_string_pretty(self) {
            let _ = fs::write(path, data);
        }
    }
}

static CONFIG: OnceCell<RwLock<ClientConfig>> = OnceCell::new();

pub fn init_config() {
    let config = ClientConfig::load();
    // First run leaves an editable config file behind.
    if !ClientConfig::config_path().exists() {
        config.save();
    }
    CONFIG.set(RwLock::new(config)).ok();
}

pub fn config() -> std::sync::RwLockReadGuard<'static, ClientConfig> {
    CONFIG.get().expect("ClientConfig not initialized").read().expect("RwLock poisoned")
}
