//! Configuration loading and validation
//!
//! Sources are merged in order, later sources overriding earlier ones:
//! compiled-in defaults, a TOML file (explicit path or a well-known
//! location), then `CDA_`-prefixed environment variables.

use std::env;
use std::path::{Path, PathBuf};

use cda_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME};

/// Configuration loader service
#[derive(Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set an explicit configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                info!("Configuration loaded from {}", config_path.display());
            } else {
                warn!("Configuration file not found: {}", config_path.display());
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            info!("Configuration loaded from {}", default_path.display());
        }

        // Double underscore separates nesting levels so snake_case field
        // names survive, e.g. CDA_SERVER__PORT or CDA_GENERATION__API_KEY
        figment = figment.merge(Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split("__"));

        let app_config: AppConfig = figment.extract().map_err(|e| {
            Error::config_with_source("Failed to extract configuration", e)
        })?;

        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Find a configuration file in the well-known locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.exists())
    }
}

/// Validate application configuration
fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_storage_config(config)?;
    validate_generation_config(config)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::config("Server port cannot be 0"));
    }
    if config.server.max_upload_bytes == 0 {
        return Err(Error::config("Maximum upload size cannot be 0"));
    }
    Ok(())
}

fn validate_storage_config(config: &AppConfig) -> Result<()> {
    if config.storage.data_dir.as_os_str().is_empty() {
        return Err(Error::config("Storage data directory cannot be empty"));
    }
    Ok(())
}

fn validate_generation_config(config: &AppConfig) -> Result<()> {
    match config.generation.provider.as_str() {
        "openai" | "null" => {}
        other => {
            return Err(Error::config(format!(
                "Unknown generation provider: {other}. Use openai or null"
            )));
        }
    }
    if config.generation.model.is_empty() {
        return Err(Error::config("Generation model cannot be empty"));
    }
    if !(0.0..=2.0).contains(&config.generation.temperature) {
        return Err(Error::config(
            "Generation temperature must be between 0.0 and 2.0",
        ));
    }
    if config.generation.stage_timeout_secs == 0 {
        return Err(Error::config("Stage timeout cannot be 0"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(validate_app_config(&config).is_ok());
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_app_config(&config).is_err());
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let mut config = AppConfig::default();
        config.generation.provider = "carrier-pigeon".to_string();
        assert!(validate_app_config(&config).is_err());
    }

    #[test]
    fn test_out_of_range_temperature_rejected() {
        let mut config = AppConfig::default();
        config.generation.temperature = 3.5;
        assert!(validate_app_config(&config).is_err());
    }

    #[test]
    fn test_toml_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cda.toml");
        std::fs::write(&path, "[server]\nport = 9999\n").unwrap();

        let config = ConfigLoader::new().with_config_path(&path).load().unwrap();
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.generation.model, "gpt-4o-mini");
    }
}
