use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// MediaConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaConfig {
    #[serde(default = "default_media_enabled")]
    pub enabled: bool,
    #[serde(default = "default_media_endpoint")]
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_media_enabled() -> bool {
    true
}

fn default_media_endpoint() -> String {
    "https://media.projectpapa.nl/search".to_string()
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            enabled: default_media_enabled(),
            endpoint: default_media_endpoint(),
            api_key: None,
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub media: MediaConfig,
}

impl AppConfig {
    /// Load the config; a missing or unreadable file yields the defaults.
    pub fn load(root: &Path) -> Self {
        let path = paths::config_path(root);
        if !path.exists() {
            return Self::default();
        }
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("failed to read config at {}: {e}", path.display());
                return Self::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("corrupt config at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_json::to_string_pretty(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load(dir.path());
        assert!(config.media.enabled);
        assert_eq!(config.media.endpoint, default_media_endpoint());
    }

    #[test]
    fn config_roundtrip() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            media: MediaConfig {
                enabled: false,
                endpoint: "http://localhost:9999/search".into(),
                api_key: Some("k".into()),
            },
        };
        config.save(dir.path()).unwrap();
        assert_eq!(AppConfig::load(dir.path()), config);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".papa/config.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"media":{"enabled":false}}"#).unwrap();

        let config = AppConfig::load(dir.path());
        assert!(!config.media.enabled);
        assert_eq!(config.media.endpoint, default_media_endpoint());
    }

    #[test]
    fn corrupt_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".papa/config.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "%%%").unwrap();
        assert_eq!(AppConfig::load(dir.path()), AppConfig::default());
    }
}
