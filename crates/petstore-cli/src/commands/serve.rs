// Rust guideline compliant 2026-10-17

//! Implementation of the `petstore serve` command.

use anyhow::Result;
use petstore_server::ServerOptions;

/// Runs the HTTP server until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the store cannot be opened, logging cannot be set up,
/// or the listen address cannot be bound.
pub fn execute(options: ServerOptions) -> Result<()> {
    petstore_server::run(options)?;
    Ok(())
}
