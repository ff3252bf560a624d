// Rust guideline compliant 2026-10-17

//! Implementation of the `petstore show` command.

use crate::OutputFormatter;
use anyhow::Result;
use petstore_app::PetService;
use std::path::Path;

/// Renders a single Pet by id.
///
/// # Errors
///
/// Returns an error if the store is missing, the id is not a positive
/// integer, or no Pet has that id.
pub fn render(root: &Path, id: &str, formatter: &dyn OutputFormatter) -> Result<String> {
    let service = PetService::open(Some(root))?;
    let pet = service.get_pet(id)?;
    Ok(formatter.format_pet(&pet))
}

/// Prints a single Pet by id.
///
/// # Errors
///
/// See [`render`].
pub fn execute(root: &Path, id: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    println!("{}", render(root, id, formatter)?);
    Ok(())
}
