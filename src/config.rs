use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::api::{normalize_base_url, BASE_URL_ENV, DEFAULT_BASE_URL};
use crate::ui::theme::ThemePreset;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

/// Steganography service connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the service, without the `/encode` or `/decode` suffix
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Look and feel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    #[serde(default)]
    pub theme: ThemePreset,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "stego-toolkit", "StegoToolkit")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        let config_dir = dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            tracing::info!("Loaded configuration from {:?}", path);
            Ok(config)
        } else {
            tracing::info!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Effective service URL, honoring the environment override
    pub fn base_url(&self) -> String {
        self.base_url_with_env(std::env::var(BASE_URL_ENV).ok())
    }

    /// Effective service URL with an explicit override (`--api-url`) on top
    pub fn resolve_base_url(&self, api_url: Option<&str>) -> String {
        match api_url {
            Some(url) if !url.trim().is_empty() => normalize_base_url(url),
            _ => self.base_url(),
        }
    }

    /// Effective service URL given the value of the override variable
    pub fn base_url_with_env(&self, env_value: Option<String>) -> String {
        match env_value {
            Some(url) if !url.trim().is_empty() => normalize_base_url(&url),
            _ => normalize_base_url(&self.service.base_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.service.base_url, "http://localhost:8000");
        assert_eq!(config.appearance.theme, ThemePreset::Harbor);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[appearance]\ntheme = \"moss\"\n").unwrap();
        assert_eq!(config.appearance.theme, ThemePreset::Moss);
        assert_eq!(config.service.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.service.base_url = "http://stego.internal:9000".to_string();
        config.appearance.theme = ThemePreset::Slate;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_api_url_override_beats_file() {
        let mut config = Config::default();
        config.service.base_url = "http://from-file:8000".to_string();

        assert_eq!(
            config.resolve_base_url(Some(" http://flag:7000/ ")),
            "http://flag:7000"
        );
        assert_eq!(config.resolve_base_url(Some("")), config.base_url());
        assert_eq!(config.resolve_base_url(None), config.base_url());
    }

    #[test]
    fn test_env_override_wins() {
        let mut config = Config::default();
        config.service.base_url = "http://from-file:8000/".to_string();

        assert_eq!(config.base_url_with_env(None), "http://from-file:8000");
        assert_eq!(
            config.base_url_with_env(Some("http://from-env:1234/".to_string())),
            "http://from-env:1234"
        );
        assert_eq!(
            config.base_url_with_env(Some("   ".to_string())),
            "http://from-file:8000"
        );
    }
}
