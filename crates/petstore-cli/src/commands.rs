// Rust guideline compliant 2026-10-17

//! Command implementations for the Petstore CLI.

pub mod init;
pub mod list;
pub mod serve;
pub mod show;
