// Rust guideline compliant 2026-10-17

//! Configuration management for Petstore.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Configuration for the Petstore service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Key that must be sent in the `api_key` header to delete a Pet.
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Directory for uploaded images, relative to the store directory unless absolute.
    #[serde(default = "default_images_dir")]
    pub images_dir: String,

    /// Prefix joined with a stored image name to form its photo URL.
    #[serde(default = "default_images_link")]
    pub images_link: String,

    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Address the HTTP server binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_api_key() -> String {
    "special-key".to_string()
}

fn default_images_dir() -> String {
    "images".to_string()
}

fn default_images_link() -> String {
    "/images/".to_string()
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            images_dir: default_images_dir(),
            images_link: default_images_link(),
            max_upload_bytes: default_max_upload_bytes(),
            listen_addr: default_listen_addr(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<store_dir>/config.toml`
    /// 3. Environment variables with `PETSTORE_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(store_dir: &Path) -> Result<Self> {
        Self::load_with_env(store_dir, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::load`], reading overrides through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_with_env<F>(store_dir: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let config_path = store_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `PETSTORE_API_KEY`
    /// - `PETSTORE_IMAGES_DIR`
    /// - `PETSTORE_IMAGES_LINK`
    /// - `PETSTORE_MAX_UPLOAD_BYTES`
    /// - `PETSTORE_LISTEN_ADDR`
    fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("PETSTORE_API_KEY") {
            self.api_key = val;
        }

        if let Some(val) = lookup("PETSTORE_IMAGES_DIR") {
            self.images_dir = val;
        }

        if let Some(val) = lookup("PETSTORE_IMAGES_LINK") {
            self.images_link = val;
        }

        if let Some(val) = lookup("PETSTORE_MAX_UPLOAD_BYTES") {
            self.max_upload_bytes = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "PETSTORE_MAX_UPLOAD_BYTES must be a positive number".to_string(),
                )
            })?;
        }

        if let Some(val) = lookup("PETSTORE_LISTEN_ADDR") {
            self.listen_addr = val;
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::InvalidConfig("api_key cannot be empty".to_string()));
        }

        if self.images_dir.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "images_dir cannot be empty".to_string(),
            ));
        }

        if self.images_link.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "images_link cannot be empty".to_string(),
            ));
        }

        if self.max_upload_bytes == 0 {
            return Err(Error::InvalidConfig(
                "max_upload_bytes must be greater than 0".to_string(),
            ));
        }

        self.socket_addr()?;

        Ok(())
    }

    /// Parses `listen_addr` into a socket address.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is malformed.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr.parse().map_err(|_| {
            Error::InvalidConfig(format!(
                "listen_addr must be host:port, got {}",
                self.listen_addr
            ))
        })
    }

    /// Saves the configuration to `<store_dir>/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, store_dir: &Path) -> Result<()> {
        let config_path = store_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
