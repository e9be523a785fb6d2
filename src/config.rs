use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub models: ModelsConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub profile: ProfileDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ModelsConfig {
    pub default: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Profile fields worth remembering between runs
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProfileDefaults {
    pub cuisine: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    11434
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(&config_path, toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;

        Ok(home.join(".healtharchitect").join("config.toml"))
    }

    /// Set the default model
    pub fn set_default_model(&mut self, name: String) {
        self.models.default = Some(name);
    }

    /// Get the default model
    pub fn get_default_model(&self) -> Option<&str> {
        self.models.default.as_deref()
    }

    /// Clear the default model
    pub fn clear_default_model(&mut self) {
        self.models.default = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.models.default.is_none());
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.api.port, 11434);
        assert!(config.profile.cuisine.is_none());
    }

    #[test]
    fn test_set_default_model() {
        let mut config = Config::default();
        config.set_default_model("qwen2.5:7b-instruct".to_string());
        assert_eq!(config.get_default_model(), Some("qwen2.5:7b-instruct"));
    }

    #[test]
    fn test_clear_default_model() {
        let mut config = Config::default();
        config.set_default_model("qwen2.5:7b-instruct".to_string());
        config.clear_default_model();
        assert!(config.get_default_model().is_none());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.set_default_model("qwen2.5:7b-instruct".to_string());
        config.profile.cuisine = Some("South Indian".to_string());

        let toml_string = toml::to_string(&config).unwrap();
        assert!(toml_string.contains("qwen2.5:7b-instruct"));
        assert!(toml_string.contains("South Indian"));

        let deserialized: Config = toml::from_str(&toml_string).unwrap();
        assert_eq!(deserialized.get_default_model(), Some("qwen2.5:7b-instruct"));
        assert_eq!(deserialized.profile.cuisine.as_deref(), Some("South Indian"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[models]\ndefault = \"llama3\"\n").unwrap();
        assert_eq!(config.get_default_model(), Some("llama3"));
        assert_eq!(config.api.port, 11434);
    }
}
