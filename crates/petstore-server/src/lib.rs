// Rust guideline compliant 2026-10-17

//! HTTP server for the Petstore API.
//!
//! Exposes the pet operations from `petstore-app` over axum, with JSON
//! structured logging and graceful shutdown.

mod error;
mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{router, run, AppState, ServerError, ServerOptions};
