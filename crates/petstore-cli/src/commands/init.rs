// Rust guideline compliant 2026-10-17

//! Implementation of the `petstore init` command.
//!
//! Creates the `.petstore` directory with an empty pets file, a default
//! `config.toml`, and the images directory.

use anyhow::Result;
use petstore_app::StoreContext;
use std::path::Path;

/// Initializes a Petstore data directory under `root`.
///
/// Existing files are left untouched, so running it twice is harmless.
///
/// # Errors
///
/// Returns an error if a directory or file cannot be created, or if an
/// existing `config.toml` is invalid.
pub fn execute(root: &Path) -> Result<()> {
    let context = StoreContext::init(root)?;
    let config = context.load_config()?;

    println!("✓ Petstore initialized at {}", context.store_dir().display());
    println!("  - Pets:   {}", context.pets_path().display());
    println!("  - Config: {}", context.config_path().display());
    println!("  - Images: {}", context.images_dir(&config).display());

    Ok(())
}
