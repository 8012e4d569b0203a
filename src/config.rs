//! Configuration management
//!
//! Server bind settings, store file locations, and suggestion defaults,
//! persisted as TOML under the platform config directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server bind settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Store file locations
    #[serde(default)]
    pub store: StoreConfig,
    /// Suggestion defaults
    #[serde(default)]
    pub suggest: SuggestConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Static keyword rules document. Relative paths resolve against the
    /// working directory so the shipped data/ tree works out of the box.
    #[serde(default = "default_rules_path")]
    pub rules_path: PathBuf,
    /// Learned association document, rewritten on every feedback event.
    #[serde(default = "default_learned_path")]
    pub learned_path: PathBuf,
}

fn default_rules_path() -> PathBuf {
    PathBuf::from("data/seed_rules.json")
}

fn default_learned_path() -> PathBuf {
    PathBuf::from("data/learned.json")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            rules_path: default_rules_path(),
            learned_path: default_learned_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestConfig {
    /// Number of suggestions returned when the caller does not ask for
    /// a specific count
    #[serde(default = "default_k")]
    pub default_k: usize,
}

fn default_k() -> usize {
    5
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            default_k: default_k(),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults when no
    /// config file exists yet
    pub fn load() -> Result<Self> {
        let config_path = config_path()?;
        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            toml::from_str(&contents).context("Failed to parse config file")
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = config_path()?;
        let parent = config_path.parent().context("Config path has no parent")?;

        std::fs::create_dir_all(parent).context("Failed to create config directory")?;

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&config_path, contents).context("Failed to write config file")?;

        Ok(())
    }
}

/// Get the configuration file path
pub fn config_path() -> Result<PathBuf> {
    let base = directories::ProjectDirs::from("com", "habit-suggester", "habit-suggester")
        .context("Failed to get project directories")?;
    Ok(base.config_dir().join("config.toml"))
}

/// Show current configuration
pub fn show_config() -> Result<()> {
    let config = Config::load()?;
    println!("Configuration ({}):", config_path()?.display());
    print!(
        "{}",
        toml::to_string_pretty(&config).context("Failed to serialize config")?
    );
    Ok(())
}

/// Reset configuration to defaults
pub fn reset_config() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.suggest.default_k, 5);
        assert_eq!(config.store.rules_path, PathBuf::from("data/seed_rules.json"));
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.suggest.default_k, 5);
    }
}
