// Rust guideline compliant 2026-10-17

//! Petstore Core Library
//!
//! This crate provides the foundational components for the Petstore service:
//! - Data models (Pet, Category, Tag, Status)
//! - Storage engine (JSONL document store with atomic writes and locking)
//! - Image handling (content type checks, collision-free file naming)
//! - Configuration loading
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod images;
pub mod models;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result};
pub use images::{is_supported_image, sanitize_file_name, unique_file_name, ImageStore};
pub use models::{parse_pet_id, Category, Pet, Status, Tag};
pub use storage::Storage;
