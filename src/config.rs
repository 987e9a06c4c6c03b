use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub naming: NamingDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// API key for the hosted inference endpoint. The GEMINI_API_KEY
    /// environment variable takes precedence over this value.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingDefaults {
    #[serde(default = "default_subject")]
    pub subject: String,

    #[serde(default = "default_topic")]
    pub topic: String,

    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai: AiConfig::default(),
            naming: NamingDefaults::default(),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for NamingDefaults {
    fn default() -> Self {
        Self {
            subject: default_subject(),
            topic: default_topic(),
            version: default_version(),
        }
    }
}

fn default_model() -> String {
    "gemini-3-pro-preview".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_subject() -> String {
    "Physics".to_string()
}

fn default_topic() -> String {
    "Thermodynamics".to_string()
}

fn default_version() -> String {
    "v1".to_string()
}

impl AiConfig {
    /// The key to use for requests: environment first, then config file.
    pub fn resolve_api_key(&self) -> Option<String> {
        pick_api_key(std::env::var(API_KEY_ENV).ok(), self.api_key.clone())
    }
}

fn pick_api_key(env: Option<String>, file: Option<String>) -> Option<String> {
    env.filter(|k| !k.trim().is_empty())
        .or_else(|| file.filter(|k| !k.trim().is_empty()))
}

impl Config {
    /// Get the config file path: %APPDATA%\tidydesk\config.toml
    pub fn config_path() -> Result<PathBuf> {
        let appdata =
            std::env::var("APPDATA").context("APPDATA environment variable not set")?;
        let config_dir = PathBuf::from(appdata).join("tidydesk");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file or return defaults
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) if path.exists() => match fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file: {}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    eprintln!("Warning: Failed to read config file: {}", e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }

    /// Load config, writing a default file on first run so the user has
    /// somewhere obvious to put the API key.
    pub fn load_or_create() -> Self {
        let config = Self::load();
        if let Ok(path) = Self::config_path() {
            if !path.exists() {
                let _ = config.save();
            }
        }
        config
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, toml).context("Failed to write config file")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.ai.model, "gemini-3-pro-preview");
        assert!(config.ai.endpoint.starts_with("https://"));
        assert_eq!(config.ai.timeout_secs, 60);
        assert!(config.ai.api_key.is_none());
        assert_eq!(config.naming.subject, "Physics");
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.ai.api_key = Some("abc123".to_string());
        config.ai.timeout_secs = 30;
        config.naming.subject = "Chemistry".to_string();

        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.ai.api_key.as_deref(), Some("abc123"));
        assert_eq!(back.ai.timeout_secs, 30);
        assert_eq!(back.naming.subject, "Chemistry");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[ai]\napi_key = \"k\"\n").unwrap();
        assert_eq!(config.ai.api_key.as_deref(), Some("k"));
        assert_eq!(config.ai.model, "gemini-3-pro-preview");
        assert_eq!(config.naming.topic, "Thermodynamics");
    }

    #[test]
    fn test_api_key_precedence() {
        assert_eq!(
            pick_api_key(Some("env".into()), Some("file".into())).as_deref(),
            Some("env")
        );
        assert_eq!(
            pick_api_key(None, Some("file".into())).as_deref(),
            Some("file")
        );
        // Blank values are as good as absent
        assert_eq!(
            pick_api_key(Some("  ".into()), Some("file".into())).as_deref(),
            Some("file")
        );
        assert_eq!(pick_api_key(None, None), None);
    }
}
