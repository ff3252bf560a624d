// Rust guideline compliant 2026-10-17

//! Store discovery and path management utilities.

use crate::error::{AppError, Result};
use petstore_core::{Config, ImageStore, Storage};
use std::path::{Path, PathBuf};

/// Name of the store directory created under the chosen root.
pub const STORE_DIR_NAME: &str = ".petstore";

/// Path metadata for a Petstore data directory.
#[derive(Debug, Clone)]
pub struct StoreContext {
    root: PathBuf,
    store_dir: PathBuf,
    pets_path: PathBuf,
    config_path: PathBuf,
}

impl StoreContext {
    fn at(root: PathBuf) -> Self {
        let store_dir = root.join(STORE_DIR_NAME);
        Self {
            root,
            pets_path: store_dir.join("pets.jsonl"),
            config_path: store_dir.join("config.toml"),
            store_dir,
        }
    }

    /// Discovers a Petstore data directory starting from an optional root.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - The `.petstore` directory is missing
    pub fn discover(root: Option<&Path>) -> Result<Self> {
        let root = match root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let context = Self::at(root);
        if !context.store_dir.exists() {
            return Err(AppError::StoreNotInitialized {
                path: context.store_dir,
            });
        }
        Ok(context)
    }

    /// Creates the store layout under `root`, keeping anything already present.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or file cannot be created.
    pub fn init(root: &Path) -> Result<Self> {
        let context = Self::at(root.to_path_buf());

        std::fs::create_dir_all(&context.store_dir)?;

        if !context.pets_path.exists() {
            std::fs::File::create(&context.pets_path)?;
        }

        if !context.config_path.exists() {
            Config::default().save(&context.store_dir)?;
        }

        let config = context.load_config()?;
        std::fs::create_dir_all(context.images_dir(&config))?;

        Ok(context)
    }

    /// Returns the root the store directory lives under.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.petstore` directory path.
    #[must_use]
    pub fn store_dir(&self) -> &Path {
        self.store_dir.as_path()
    }

    /// Returns the pets JSONL path.
    #[must_use]
    pub fn pets_path(&self) -> &Path {
        self.pets_path.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Resolves the image directory; relative paths are taken from the store directory.
    #[must_use]
    pub fn images_dir(&self, config: &Config) -> PathBuf {
        let dir = Path::new(&config.images_dir);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.store_dir.join(dir)
        }
    }

    /// Opens storage for the pets file.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be initialized.
    pub fn open_storage(&self) -> Result<Storage> {
        Ok(Storage::new(self.pets_path.clone())?)
    }

    /// Opens the image store configured for this data directory.
    #[must_use]
    pub fn open_images(&self, config: &Config) -> ImageStore {
        ImageStore::new(self.images_dir(config))
    }

    /// Loads store configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.store_dir())?)
    }
}
