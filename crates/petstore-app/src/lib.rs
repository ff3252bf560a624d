// Rust guideline compliant 2026-10-17

//! Shared application services for Petstore.
//!
//! This crate provides the transport-independent use cases behind the HTTP
//! API: store discovery, request body validation, the pet operations
//! themselves, and standardized response envelopes.

pub mod error;
pub mod input;
pub mod pets;
pub mod repo;
pub mod response;

pub use error::{AppError, ErrorCode, Result};
pub use input::{parse_pet_body, parse_status_filters, PetForm};
pub use pets::{ImageUpload, PetService, UploadedFile};
pub use repo::StoreContext;
pub use response::{ApiResponse, ErrorEnvelope};
