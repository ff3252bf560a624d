// Rust guideline compliant 2026-10-17

//! Implementation of the `petstore list` command.
//!
//! Without a status filter every stored Pet is listed in store order. With
//! one or more `--status` values the same grouping as `findByStatus` applies.

use crate::OutputFormatter;
use anyhow::Result;
use petstore_app::{PetService, StoreContext};
use std::path::Path;

/// Renders the Pets matching `statuses`, or all Pets when empty.
///
/// # Errors
///
/// Returns an error if the store is missing, a status is unknown, or the
/// pets file cannot be read.
pub fn render(root: &Path, statuses: &[String], formatter: &dyn OutputFormatter) -> Result<String> {
    let pets = if statuses.is_empty() {
        let context = StoreContext::discover(Some(root))?;
        context.open_storage()?.load_all()?
    } else {
        PetService::open(Some(root))?.find_by_status(statuses)?
    };
    Ok(formatter.format_list(&pets))
}

/// Prints the matching Pets.
///
/// # Errors
///
/// See [`render`].
pub fn execute(root: &Path, statuses: &[String], formatter: &dyn OutputFormatter) -> Result<()> {
    println!("{}", render(root, statuses, formatter)?);
    Ok(())
}
