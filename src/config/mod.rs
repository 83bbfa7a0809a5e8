//! Configuration management for the signal simulator.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::utils::error::Result;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General application settings
    pub app: AppConfig,
    /// Endpoints of the two collaborating services
    pub services: ServicesConfig,
    /// Coin reference dataset settings
    #[serde(default)]
    pub coins: CoinsConfig,
}

/// Application-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log level (debug, info, warn, error)
    pub log_level: String,
}

/// Service endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Inference service endpoint (POST, body `{ "message": … }`)
    pub inference_url: String,
    /// Processing service endpoint (POST, body `{ "signal_data": … }`)
    pub processing_url: String,
}

/// Coin dataset configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoinsConfig {
    /// Path to a JSON dataset; the bundled one is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                log_level: "info".to_string(),
            },
            services: ServicesConfig {
                inference_url: "http://localhost:3001/infer".to_string(),
                processing_url: "http://localhost:3000/api/process-telegram-signals".to_string(),
            },
            coins: CoinsConfig { dataset_path: None },
        }
    }
}

impl Config {
    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Save the configuration as TOML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let raw = toml::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }

    /// The default configuration rendered as TOML.
    pub fn default_toml() -> Result<String> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }
}
